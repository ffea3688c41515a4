// src/lib.rs

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod repositories;
pub mod routes;
pub mod scoring;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
