use std::fmt::Display;

use crate::{
    domain::{
        adapters::prompt::{Prompter, SelectItem, TextQuestion},
        errors::UserInputError,
    },
    utils::string::OptionStr,
};
use colored::Colorize;
use inquire::{
    ui::{Attributes, Color, RenderConfig, StyleSheet, Styled},
    validator::Validation,
    CustomUserError, InquireError, Select, Text,
};

impl<T> Display for SelectItem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.name.green(),
            self.description.clone().unwrap_or_default().italic()
        )
    }
}

pub struct Prompt;

impl Prompt {
    fn filter<T>(input: &str, option: &SelectItem<T>) -> bool {
        option.name.to_lowercase().contains(&input.to_lowercase())
    }

    fn get_render_config() -> RenderConfig {
        RenderConfig {
            highlighted_option_prefix: Styled::new("➜").with_fg(Color::LightBlue),
            default_value: StyleSheet::new()
                .with_attr(Attributes::ITALIC)
                .with_fg(Color::DarkGrey),
            ..RenderConfig::default()
        }
    }
}

impl Prompter for Prompt {
    fn select<T>(
        &self,
        question: &str,
        options: Vec<SelectItem<T>>,
        starting: Option<usize>,
    ) -> Result<SelectItem<T>, UserInputError> {
        let len = options.len();
        let starting = starting
            .filter(|index| *index < len)
            .unwrap_or(Select::<SelectItem<T>>::DEFAULT_STARTING_CURSOR);

        let selected = Select::new(&format!("{question}:"), options)
            .with_page_size(len)
            .with_starting_cursor(starting)
            .with_filter(&|input, option, _, _| Self::filter(input, option))
            .with_render_config(Self::get_render_config())
            .prompt()
            .map_err(|e| into_domain_error(question, e))?;

        Ok(selected)
    }

    fn text(&self, question: &TextQuestion) -> Result<Option<String>, UserInputError> {
        let message = format!("{}:", question.message);
        let mut text = Text::new(&message).with_render_config(Self::get_render_config());

        if let Some(default) = &question.default {
            text = text.with_default(default);
        }

        if let Some(help) = &question.help {
            text = text.with_help_message(help);
        }

        if let Some(validate) = question.validator {
            text = text.with_validator(
                move |input: &str| -> Result<Validation, CustomUserError> {
                    match validate(input) {
                        Ok(()) => Ok(Validation::Valid),
                        Err(reason) => Ok(Validation::Invalid(reason.into())),
                    }
                },
            );
        }

        let result = text
            .prompt()
            .map_err(|e| into_domain_error(&question.name, e))?;

        Ok(Some(result).none_if_empty())
    }
}

fn into_domain_error(name: &str, error: InquireError) -> UserInputError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            UserInputError::Cancelled
        }
        InquireError::NotTTY
        | InquireError::IO(_)
        | InquireError::Custom(_)
        | InquireError::InvalidConfiguration(_) => UserInputError::Validation {
            name: name.to_lowercase(),
            message: format!("Failed completing prompt interaction: {error}"),
        },
    }
}
