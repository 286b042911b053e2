mod args;
mod handler;

pub use args::Arguments;
pub use handler::handler;
