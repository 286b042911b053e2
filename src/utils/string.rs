pub trait OptionStr<T> {
    fn none_if_empty(self) -> Option<T>;
}

impl OptionStr<String> for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        match self {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => None,
        }
    }
}
