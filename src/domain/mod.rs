pub mod adapters;
pub mod commands;
pub mod errors;
pub mod models;
pub mod questions;
pub mod validation;
