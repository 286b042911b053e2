use crate::{
    domain::{
        adapters::prompt::{Prompter, SelectItem, TextQuestion, Validator},
        errors::UserInputError,
        models::{CommitFields, CommitType, Language},
        validation,
    },
    utils::string::OptionStr,
};

const SCOPE_HELP: &str = "one word to describe the scope of influence, composed of lowercase letters and numbers, the length range is 2-20 characters";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQuestion {
    pub message: String,
    pub options: Vec<SelectItem<CommitType>>,
    pub starting: Option<usize>,
}

/// Prompts for every commit field, in the order they are asked.
#[derive(Clone)]
pub struct Questions {
    pub kind: TypeQuestion,
    pub scope: TextQuestion,
    pub message: TextQuestion,
    pub version: TextQuestion,
    pub ticket: TextQuestion,
}

impl Questions {
    /// Build the prompts, pre-filled with `defaults` parsed from a previous commit.
    pub fn new(defaults: Option<&CommitFields>, types: &[CommitType], language: Language) -> Self {
        let starting = defaults.and_then(|fields| {
            types
                .iter()
                .position(|kind| kind.name() == fields.kind.as_str())
        });

        let options = types
            .iter()
            .map(|kind| SelectItem {
                name: kind.name().into(),
                value: *kind,
                description: Some(kind.descriptions().get(language).into()),
            })
            .collect();

        Questions {
            kind: TypeQuestion {
                message: "Select the type of change you're committing".into(),
                options,
                starting,
            },
            scope: text(
                "scope",
                "Input the scope of impact of your current commit",
                seed(defaults.map(|fields| &fields.scope)),
                validation::scope,
            )
            .with_help(SCOPE_HELP),
            message: text(
                "message",
                "Input message of your current commit",
                seed(defaults.map(|fields| &fields.message)),
                validation::message,
            ),
            version: text(
                "version",
                "Input repository version",
                seed(defaults.map(|fields| &fields.version)),
                validation::version,
            ),
            ticket: text(
                "ticket",
                "Input teambition number",
                seed(defaults.map(|fields| &fields.ticket)),
                validation::ticket,
            ),
        }
    }

    pub fn ask<P: Prompter>(&self, prompter: &P) -> Result<CommitFields, UserInputError> {
        let kind = prompter.select(
            &self.kind.message,
            self.kind.options.clone(),
            self.kind.starting,
        )?;
        log::info!("selected commit type '{}'", kind.value);

        let fields = CommitFields {
            kind: kind.value.name().into(),
            scope: required(prompter, &self.scope)?,
            message: required(prompter, &self.message)?,
            version: prompter.text(&self.version)?.unwrap_or_default(),
            ticket: prompter.text(&self.ticket)?.unwrap_or_default(),
        };

        Ok(fields)
    }
}

fn text(name: &str, message: &str, default: Option<String>, validator: Validator) -> TextQuestion {
    TextQuestion {
        name: name.into(),
        message: message.into(),
        help: None,
        default,
        validator: Some(validator),
    }
}

fn required<P: Prompter>(prompter: &P, question: &TextQuestion) -> Result<String, UserInputError> {
    prompter
        .text(question)?
        .ok_or_else(|| UserInputError::Required {
            name: question.name.clone(),
        })
}

fn seed(value: Option<&String>) -> Option<String> {
    value.cloned().none_if_empty()
}

impl TextQuestion {
    fn with_help(self, help: &str) -> Self {
        TextQuestion {
            help: Some(help.into()),
            ..self
        }
    }
}
