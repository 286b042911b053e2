use crate::domain::adapters::{GitResult, GitSystem, TimedOut};
use std::{
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct GitCommand;

/// Implementation of GitResult wrapper for system command result
impl GitResult for Command {
    fn get_status(&mut self) -> anyhow::Result<()> {
        let status = self.status().map_err(|e| anyhow::anyhow!(e))?;

        if !status.success() {
            anyhow::bail!("system command failed with {}", status)
        } else {
            Ok(())
        }
    }

    fn get_output(&mut self, timeout: Duration) -> anyhow::Result<String> {
        let start = Instant::now();
        let mut child = self
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| anyhow::anyhow!(e))?;

        loop {
            if let Some(status) = child.try_wait()? {
                let output = child.wait_with_output()?;

                if !status.success() {
                    anyhow::bail!("system command failed with {}", status)
                }

                return Ok(String::from_utf8_lossy(&output.stdout).into());
            }

            let elapsed = start.elapsed();
            if elapsed >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(TimedOut(timeout).into());
            }

            thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
        }
    }
}

impl GitSystem for GitCommand {
    type Result = Command;

    fn command(&self, args: &[&str]) -> Self::Result {
        let mut comm = Command::new("git");
        comm.args(args);
        comm
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn get_output_returns_stdout() -> anyhow::Result<()> {
        let output = Command::new("sh")
            .args(["-c", "echo hello"])
            .get_output(Duration::from_secs(5))?;

        assert_eq!("hello\n", output);

        Ok(())
    }

    #[test]
    fn get_output_errors_on_failed_command() {
        let err = Command::new("sh")
            .args(["-c", "exit 3"])
            .get_output(Duration::from_secs(5))
            .unwrap_err();

        assert!(err.downcast_ref::<TimedOut>().is_none());
    }

    #[test]
    fn get_output_gives_up_once_the_timeout_elapses() {
        let timeout = Duration::from_millis(200);
        let start = Instant::now();

        let err = Command::new("sleep")
            .arg("5")
            .get_output(timeout)
            .unwrap_err();

        let elapsed = start.elapsed();
        assert!(err.downcast_ref::<TimedOut>().is_some());
        assert!(elapsed >= timeout, "returned early after {elapsed:?}");
        assert!(elapsed < Duration::from_secs(3), "returned late after {elapsed:?}");
    }

    #[test]
    fn get_status_errors_on_non_zero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 1"]);

        assert!(command.get_status().is_err());
    }

    #[test]
    fn command_targets_git() {
        let command = GitCommand.command(&["log", "-1"]);

        assert_eq!("git", command.get_program());
        assert_eq!(vec!["log", "-1"], command.get_args().collect::<Vec<_>>());
    }
}
