use clap::ValueEnum;

/// Locale used for the commit type descriptions.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Locale keyed description of a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptions {
    pub en: &'static str,
    pub zh: &'static str,
}

impl Descriptions {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Zh => self.zh,
        }
    }
}
