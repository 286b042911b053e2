pub mod adapters;
pub mod app_context;
pub mod cli;
pub mod domain;
pub mod entry;
pub mod utils;
