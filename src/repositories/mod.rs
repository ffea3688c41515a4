// src/repositories/mod.rs

pub mod quiz;
pub mod submission;
pub mod teacher;

pub use quiz::QuizRepository;
pub use submission::SubmissionRepository;
pub use teacher::TeacherRepository;
