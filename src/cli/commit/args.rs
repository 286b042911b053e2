use std::time::Duration;

use clap::Args;

use crate::domain::{
    commands::commit::Commit,
    models::{CommitType, Language},
};

#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct Arguments {
    /// Also offer the 'refactor', 'revert' and 'WIP' commit types.
    #[clap(long)]
    pub extended: bool,

    /// Seconds to wait on git for the previous commit subject.
    #[clap(long, value_parser, default_value_t = 10)]
    pub timeout: u64,
}

impl Arguments {
    pub fn into_domain(self, language: Language) -> Commit {
        let types = if self.extended {
            CommitType::EXTENDED.to_vec()
        } else {
            CommitType::STANDARD.to_vec()
        };

        Commit {
            types,
            language,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
