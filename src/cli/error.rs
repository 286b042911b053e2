use colored::Colorize;
use std::io::{self, Write};

use crate::domain::errors::{Errors, GitError};

pub fn display_error(err: Errors) -> io::Result<()> {
    let message = err.to_string();
    match err {
        Errors::UserInput(inner) => print_error(inner.to_string(), None),
        Errors::Git(inner) => print_git_error(inner),
        Errors::Render { .. } => print_error(message, None),
    }
}

fn print_git_error(err: GitError) -> io::Result<()> {
    let hint = match &err {
        GitError::Commit { .. } => Some("check there are staged changes and any commit hooks"),
        GitError::LastSubject | GitError::Timeout { .. } => None,
    };

    print_error(err.to_string(), hint)
}

fn print_error(message: String, hint: Option<&str>) -> io::Result<()> {
    log::error!("{} {:?}", message, hint);
    let mut stderr = io::stderr();
    writeln!(stderr, "{}: {message}", "error".red())?;

    if let Some(hint) = hint {
        writeln!(stderr, "{}: {hint}", "hint".yellow())?;
    }

    Ok(())
}
