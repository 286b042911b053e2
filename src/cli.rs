pub mod commit;
pub mod error;
pub mod log;
