// src/services/mod.rs

//! Boundary operations consumed by the HTTP layer. Every access-controlled
//! operation takes the acting teacher explicitly.

pub mod accounts;
pub mod quizzes;
