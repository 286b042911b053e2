mod git;
pub mod prompt;

pub use git::Git;
pub use git::GitCommand;
