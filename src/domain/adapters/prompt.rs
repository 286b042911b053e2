use crate::domain::errors::UserInputError;

pub type Validator = fn(&str) -> Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem<T> {
    pub name: String,
    pub value: T,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct TextQuestion {
    pub name: String,
    pub message: String,
    pub help: Option<String>,
    pub default: Option<String>,
    pub validator: Option<Validator>,
}

pub trait Prompter {
    /// Pick one of `options`, with the cursor starting on `starting` when provided.
    fn select<T>(
        &self,
        question: &str,
        options: Vec<SelectItem<T>>,
        starting: Option<usize>,
    ) -> Result<SelectItem<T>, UserInputError>;

    /// Free text input, `None` when left empty.
    fn text(&self, question: &TextQuestion) -> Result<Option<String>, UserInputError>;
}
