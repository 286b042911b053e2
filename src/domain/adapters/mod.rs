mod git;
pub mod prompt;

pub use git::{Git, GitResult, GitSystem, TimedOut};
