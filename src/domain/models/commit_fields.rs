use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::{errors::Errors, validation};

lazy_static! {
    // type(scope): message(version-ticket)
    static ref SUBJECT: Regex =
        Regex::new(r"^([^(]*)\(([^)]*)\):\s([^(]*)\(([v.0-9]{6,15})-([^)]*)\)$").unwrap();
}

/// Fields making up a `type(scope): message(version-ticket)` commit subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitFields {
    pub kind: String,
    pub scope: String,
    pub message: String,
    pub version: String,
    pub ticket: String,
}

impl CommitFields {
    /// Extract every field from a commit subject, or nothing when the subject
    /// does not follow the commit grammar.
    pub fn parse(subject: &str) -> Option<CommitFields> {
        let captures = SUBJECT.captures(subject)?;
        let field = |index: usize| captures.get(index).map(|m| m.as_str().to_owned());

        Some(CommitFields {
            kind: field(1)?,
            scope: field(2)?,
            message: field(3)?,
            version: field(4)?,
            ticket: field(5)?,
        })
    }

    /// Validate the fields before formatting them into a commit subject.
    pub fn render(&self) -> Result<String, Errors> {
        let checks = [
            ("type", validation::required(&self.kind)),
            ("scope", validation::scope(&self.scope)),
            ("message", validation::message(&self.message)),
            ("version", validation::version(&self.version)),
            ("ticket", validation::ticket(&self.ticket)),
        ];

        for (name, check) in checks {
            if let Err(reason) = check {
                log::error!("invalid '{}' field: {}", name, reason);
                return Err(Errors::Render {
                    message: format!("'{name}' {reason}"),
                });
            }
        }

        let subject = self.to_string();
        log::info!("rendered commit subject '{}'", subject);

        Ok(subject)
    }
}

impl Display for CommitFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}): {}({}-{})",
            self.kind, self.scope, self.message, self.version, self.ticket
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(kind: &str, scope: &str, message: &str, version: &str, ticket: &str) -> CommitFields {
        CommitFields {
            kind: kind.into(),
            scope: scope.into(),
            message: message.into(),
            version: version.into(),
            ticket: ticket.into(),
        }
    }

    #[test]
    fn parse_extracts_every_field() {
        let actual = CommitFields::parse("feat(auth): add login(v1.2.0-TB123)");

        assert_eq!(
            Some(fields("feat", "auth", "add login", "v1.2.0", "TB123")),
            actual
        );
    }

    #[test]
    fn parse_allows_an_empty_ticket() {
        let actual = CommitFields::parse("docs(readme): typo(v0.0.1-)");

        assert_eq!(Some(fields("docs", "readme", "typo", "v0.0.1", "")), actual);
    }

    #[test]
    fn parse_splits_ticket_on_the_first_hyphen_after_the_version() {
        let actual = CommitFields::parse("fix(api): retry(1.10.0-JIRA-42)");

        assert_eq!(Some(fields("fix", "api", "retry", "1.10.0", "JIRA-42")), actual);
    }

    #[test]
    fn parse_returns_none_for_non_conforming_subjects() {
        for subject in [
            "",
            "not a conforming message",
            "feat(auth): add login",
            "feat(auth): add login(v1.2.0)",
            "feat(auth) add login(v1.2.0-TB1)",
            "feat(auth):add login(v1.2.0-TB1)",
            "feat(auth): add login(v1.0-TB1)",
            "feat(auth): add login(v1.2.0-TB1) trailing",
            "feat(auth): add (login)(v1.2.0-TB1)",
            "\"feat(auth): add login(v1.2.0-TB1)\"",
        ] {
            assert_eq!(None, CommitFields::parse(subject), "subject '{subject}'");
        }
    }

    #[test]
    fn format_renders_the_commit_grammar() {
        let actual = fields("fix", "db", "fix race", "v2.0.0", "TB9").to_string();

        assert_eq!("fix(db): fix race(v2.0.0-TB9)", actual);
    }

    #[test]
    fn format_keeps_empty_optional_slots() {
        assert_eq!(
            "chore(ci): bump(-)",
            fields("chore", "ci", "bump", "", "").to_string()
        );
    }

    #[test]
    fn formatted_fields_parse_back_to_the_same_fields() {
        let samples = [
            fields("feat", "auth", "add login", "v1.2.0", "TB123"),
            fields("fix", "db", "fix race", "v2.0.0", "TB9"),
            fields("WIP", "core2", "a: b) c", "1.2.3.4.5", ""),
            fields("perf", "io", " leading space", "v10.20.30", "X-1"),
        ];

        for expected in samples {
            assert_eq!(Some(expected.clone()), CommitFields::parse(&expected.to_string()));
        }
    }

    #[test]
    fn render_returns_the_formatted_subject_for_valid_fields() -> anyhow::Result<()> {
        let subject = fields("fix", "db", "fix race", "v2.0.0", "TB9").render()?;

        assert_eq!("fix(db): fix race(v2.0.0-TB9)", subject);

        Ok(())
    }

    #[test]
    fn render_rejects_fields_that_would_break_the_grammar() {
        for invalid in [
            fields("", "db", "msg", "", ""),
            fields("fix", "DB", "msg", "", ""),
            fields("fix", "db", "", "", ""),
            fields("fix", "db", "call foo()", "", ""),
            fields("fix", "db", "msg", "version1", ""),
            fields("fix", "db", "msg", "", "TB(9)"),
        ] {
            let err = invalid.render().unwrap_err();
            assert!(matches!(err, Errors::Render { .. }), "fields {invalid:?}");
        }
    }
}
