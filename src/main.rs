use std::process::ExitCode;

use clap::Parser;
use tbcommit::{
    adapters::prompt::Prompt,
    cli::{commit, error::display_error},
    domain::errors::{Errors, UserInputError},
    entry::Cli,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    let context = args.init();

    let result = commit::handler(&context, args.commit, Prompt);

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(Errors::UserInput(UserInputError::Cancelled)) => {
            log::info!("commit cancelled, nothing committed");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            display_error(err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
