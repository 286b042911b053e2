use colored::Colorize;

use crate::domain::{
    adapters::{prompt::Prompter, Git},
    errors::Errors,
    models::CommitFields,
    questions::Questions,
};

use super::Commit;

pub fn handler<G: Git, P: Prompter>(
    git: &G,
    prompter: &P,
    commit: Commit,
) -> Result<String, Errors> {
    let defaults = match git.last_commit_subject(commit.timeout) {
        Ok(subject) => {
            let fields = CommitFields::parse(&subject);
            if fields.is_none() {
                log::info!("last commit subject '{}' has no reusable fields", subject);
            }
            fields
        }
        Err(e) => {
            log::warn!("continuing without defaults: {}", e);
            None
        }
    };

    let questions = Questions::new(defaults.as_ref(), &commit.types, commit.language);
    let fields = questions.ask(prompter).map_err(Errors::UserInput)?;

    let message = fields.render()?;
    println!("{}: {}", "commit message".green(), message);

    git.commit(&message).map_err(Errors::Git)?;

    Ok(message)
}
