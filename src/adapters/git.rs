mod git_adapter;
mod system_adapter;

pub use git_adapter::Git;
pub use system_adapter::GitCommand;
