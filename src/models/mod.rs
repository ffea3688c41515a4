// src/models/mod.rs

pub mod quiz;
pub mod submission;
pub mod teacher;
