//! Shared TrainU data types and table access.

pub mod database;
pub mod errors;
pub mod models;
