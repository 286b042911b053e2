use std::time::Duration;

use crate::domain::{
    adapters::{self, GitResult, GitSystem, TimedOut},
    errors::GitError,
};

pub struct Git<S: GitSystem> {
    pub git: S,
}

impl<S: GitSystem> adapters::Git for Git<S> {
    fn last_commit_subject(&self, timeout: Duration) -> Result<String, GitError> {
        let output = self
            .git
            .command(&["log", "--pretty=format:\"%s\"", "--no-merges", "-1"])
            .get_output(timeout)
            .map_err(|e| {
                if e.downcast_ref::<TimedOut>().is_some() {
                    log::warn!("Gave up on last commit subject: {}", e);
                    GitError::Timeout { timeout }
                } else {
                    log::error!("Failed to get last commit subject: {}", e);
                    GitError::LastSubject
                }
            })?;

        let subject = unquote(&output);
        log::info!("last commit subject '{}'", subject);

        Ok(subject)
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        log::info!("commit with message '{}'", message);

        self.git
            .command(&["commit", "-m", message])
            .get_status()
            .map_err(|e| {
                log::error!("Failed to commit: {}", e);
                GitError::Commit {
                    message: e.to_string(),
                }
            })?;

        Ok(())
    }
}

// Subjects are requested wrapped in quotes to keep surrounding whitespace.
fn unquote(output: &str) -> String {
    let subject = output.trim();
    let subject = subject.strip_prefix('"').unwrap_or(subject);
    let subject = subject.strip_suffix('"').unwrap_or(subject);

    subject.into()
}
