use std::time::Duration;

use thiserror::Error;

use crate::domain::errors::GitError;

/// Used to abstract cli git commands for testing.
pub trait Git {
    /// Get the subject line of the most recent non-merge commit, giving up once `timeout` elapses.
    fn last_commit_subject(&self, timeout: Duration) -> Result<String, GitError>;

    /// Commit staged changes using `message` as the whole commit message.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

pub trait GitResult {
    fn get_status(&mut self) -> anyhow::Result<()>;

    fn get_output(&mut self, timeout: Duration) -> anyhow::Result<String>;
}

/// Used to abstract system cli commands for testing.
pub trait GitSystem {
    type Result: GitResult;

    fn command(&self, args: &[&str]) -> Self::Result;
}

/// Raised by [`GitResult::get_output`] when the command outlives its deadline.
#[derive(Error, Debug)]
#[error("Command did not complete within {0:?}")]
pub struct TimedOut(pub Duration);
