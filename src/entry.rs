use crate::adapters::{Git, GitCommand};
use crate::app_context::AppContext;
use crate::cli::{commit, log::LogLevel};
use crate::domain::models::Language;
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "tbcommit")]
#[clap(bin_name = "tbcommit")]
#[clap(about = "Commit staged changes with a 'type(scope): message(version-ticket)' message, pre-filled from the previous commit.", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// Log level
    #[clap(value_enum, long, default_value_t=LogLevel::None)]
    log: LogLevel,

    /// Language used to describe commit types
    #[clap(value_enum, long, default_value_t=Language::En)]
    lang: Language,

    #[clap(flatten)]
    pub commit: commit::Arguments,
}

impl Cli {
    pub fn init(&self) -> AppContext<Git<GitCommand>> {
        self.log.init_logger();

        let git = Git { git: GitCommand };

        AppContext::new(git, self.lang)
    }
}
