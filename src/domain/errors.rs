use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Errors {
    #[error(transparent)]
    Git(GitError),

    #[error(transparent)]
    UserInput(UserInputError),

    #[error("Failed to render commit message {}", .message.to_lowercase())]
    Render { message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserInputError {
    #[error("Missing required {name:?} input")]
    Required { name: String },

    #[error("Input prompt cancelled by user")]
    Cancelled,

    #[error("Invalid input {name:?} found {}", .message.to_lowercase())]
    Validation { name: String, message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GitError {
    #[error("Failed to retrieve the last commit subject")]
    LastSubject,

    #[error("Timed out after {timeout:?} retrieving the last commit subject")]
    Timeout { timeout: Duration },

    #[error("Failed to apply commit: {message}")]
    Commit { message: String },
}
