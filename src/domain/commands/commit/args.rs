use std::time::Duration;

use crate::domain::models::{CommitType, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Types offered by the type prompt.
    pub types: Vec<CommitType>,
    pub language: Language,
    /// Deadline for reading the previous commit subject.
    pub timeout: Duration,
}
