mod args;
mod handler;

pub use args::Commit;
pub use handler::handler;
