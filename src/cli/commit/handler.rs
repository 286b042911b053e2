use crate::{
    app_context::AppContext,
    domain::{
        adapters::{prompt::Prompter, Git},
        commands::commit,
        errors::Errors,
    },
};

use super::Arguments;

pub fn handler<G: Git, P: Prompter>(
    context: &AppContext<G>,
    args: Arguments,
    prompter: P,
) -> Result<(), Errors> {
    let commit = args.into_domain(context.language);
    log::info!("commit with {:?}", commit);

    commit::handler(&context.git, &prompter, commit)?;

    Ok(())
}
