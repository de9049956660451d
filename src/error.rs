// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

use crate::value::Kind;

/// The main error type for lexing, parsing and binding a document.
///
/// Lookups on a parsed document never produce this type; they return `Option`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("syntax error at {line}:{column}: {message}{}", hint_suffix(.hint))]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
    },

    #[error("unexpected end of input at {line}:{column}: {message}")]
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
    },

    /// Raised when a string literal is not closed.
    #[error("unclosed string starting with '{quote}' at {line}:{column}")]
    UnclosedString {
        quote: char,
        line: usize,
        column: usize,
    },

    #[error("unexpected character '{character}' at {line}:{column}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("no option or section named '{name}' in '{section}' (line {line})")]
    UnknownName {
        name: String,
        section: String,
        line: usize,
    },

    #[error("invalid {kind} value '{text}' for '{name}' (line {line})")]
    InvalidValue {
        name: String,
        kind: Kind,
        text: String,
        line: usize,
    },

    #[error("'{name}' takes a single value, got a list (line {line})")]
    NotAList { name: String, line: usize },

    #[error("'{name}' is a section and cannot be assigned (line {line})")]
    NotASection { name: String, line: usize },

    #[error("section '{name}' requires a title (line {line})")]
    MissingTitle { name: String, line: usize },

    #[error("section '{name}' does not take a title (line {line})")]
    UnexpectedTitle { name: String, line: usize },

    #[error("mandatory '{path}' is missing")]
    MissingMandatory { path: String },

    #[error("invalid default '{literal}' declared for '{name}'")]
    InvalidDefault { name: String, literal: String },

    #[error("failed to read '{path}': {message}")]
    File { path: String, message: String },
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" (hint: {})", h))
}

impl Error {
    /// Line the error points at, when it carries one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. }
            | Error::UnexpectedEof { line, .. }
            | Error::UnclosedString { line, .. }
            | Error::UnexpectedCharacter { line, .. }
            | Error::UnknownName { line, .. }
            | Error::InvalidValue { line, .. }
            | Error::NotAList { line, .. }
            | Error::NotASection { line, .. }
            | Error::MissingTitle { line, .. }
            | Error::UnexpectedTitle { line, .. } => Some(*line),
            Error::MissingMandatory { .. } | Error::InvalidDefault { .. } | Error::File { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_formats_hint() {
        let err = Error::Syntax {
            message: "expected '='".into(),
            line: 3,
            column: 7,
            hint: Some("options are assigned with '='".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("3:7"));
        assert!(msg.contains("expected '='"));
        assert!(msg.contains("hint: options are assigned"));
    }

    #[test]
    fn invalid_value_names_kind() {
        let err = Error::InvalidValue {
            name: "age".into(),
            kind: Kind::Int,
            text: "old".into(),
            line: 2,
        };
        assert_eq!(err.to_string(), "invalid integer value 'old' for 'age' (line 2)");
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn missing_mandatory_has_no_line() {
        let err = Error::MissingMandatory { path: "server/port".into() };
        assert!(err.to_string().contains("server/port"));
        assert_eq!(err.line(), None);
    }
}
