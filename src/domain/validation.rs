use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SCOPE: Regex = Regex::new(r"^[a-z0-9]{2,20}$").unwrap();
    static ref VERSION: Regex = Regex::new(r"^[v.0-9]{6,15}$").unwrap();
}

pub fn required(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("input is empty".into());
    }

    Ok(())
}

pub fn scope(input: &str) -> Result<(), String> {
    required(input)?;

    if !SCOPE.is_match(input) {
        return Err(format!(
            "this input [{input}] not in correct format, validate regular '[a-z0-9]{{2,20}}'"
        ));
    }

    Ok(())
}

/// Parentheses would be read back as the trailing '(version-ticket)' group.
pub fn message(input: &str) -> Result<(), String> {
    required(input)?;
    no_parentheses(input)
}

pub fn version(input: &str) -> Result<(), String> {
    if input.trim().is_empty() || VERSION.is_match(input.trim()) {
        return Ok(());
    }

    Err(format!(
        "this input [{input}] not in correct format, validate regular '[v.0-9]{{6,15}}'"
    ))
}

pub fn ticket(input: &str) -> Result<(), String> {
    no_parentheses(input)
}

fn no_parentheses(input: &str) -> Result<(), String> {
    if input.contains(['(', ')']) {
        return Err(format!("this input [{input}] must not contain '(' or ')'"));
    }

    Ok(())
}
