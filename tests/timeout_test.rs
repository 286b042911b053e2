#![cfg(unix)]


use std::{
    process::Command,
    time::{Duration, Instant},
};

use crate::fakers::{fake_commit, PromptMock};
use tbcommit::{
    adapters::Git,
    domain::{
        adapters::{Git as _, GitSystem},
        commands::commit::{handler, Commit},
        errors::GitError,
    },
};

/// Stands in for a git binary whose `log` hangs while `commit` succeeds.
struct HangingLog;

impl GitSystem for HangingLog {
    type Result = Command;

    fn command(&self, args: &[&str]) -> Self::Result {
        match args.first() {
            Some(&"log") => {
                let mut command = Command::new("sleep");
                command.arg("5");
                command
            }
            _ => Command::new("true"),
        }
    }
}

#[test]
fn last_commit_subject_fails_at_the_timeout() {
    let git = Git { git: HangingLog };
    let timeout = Duration::from_millis(300);
    let start = Instant::now();

    let err = git.last_commit_subject(timeout).unwrap_err();

    let elapsed = start.elapsed();
    assert_eq!(GitError::Timeout { timeout }, err);
    assert!(elapsed >= timeout, "gave up early after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "gave up late after {elapsed:?}");
}

#[test]
fn commit_proceeds_without_defaults_after_a_timeout() -> anyhow::Result<()> {
    let git = Git { git: HangingLog };

    let prompt = PromptMock {
        select_res: |starting| {
            assert_eq!(None, starting);
            Ok(0)
        },
        text_res: |question| {
            assert_eq!(None, question.default);

            let answer = match question.name.as_str() {
                "scope" => Some("auth".to_string()),
                "message" => Some("add login".to_string()),
                _ => None,
            };

            Ok(answer)
        },
    };

    let commit = Commit {
        timeout: Duration::from_millis(200),
        ..fake_commit()
    };

    let message = handler(&git, &prompt, commit)?;

    assert_eq!("feat(auth): add login(-)", message);

    Ok(())
}
