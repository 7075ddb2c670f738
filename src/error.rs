use crate::kind::Kind;
use colored::Colorize;
use std::fmt;

/// Errors that can occur while reading a typed environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The variable is set but is not a valid literal of the requested kind
    InvalidValue {
        key: String,
        value: String,
        kind: Kind,
        reason: String,
    },
    /// The default value has a shape that cannot be parsed from a string
    UnsupportedKind {
        key: String,
        kind: Kind,
        type_name: &'static str,
    },
    /// The value parsed, but the target type refused to accept it
    Conversion {
        key: String,
        from: Kind,
        to: &'static str,
    },
}

impl EnvError {
    pub fn key(&self) -> &str {
        match self {
            EnvError::InvalidValue { key, .. }
            | EnvError::UnsupportedKind { key, .. }
            | EnvError::Conversion { key, .. } => key,
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::InvalidValue {
                key,
                value,
                kind,
                reason,
            } => {
                writeln!(
                    f,
                    "{}: Invalid value {} for {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                    kind.to_string().cyan(),
                )?;
                writeln!(f, "\tReason: {}", reason)
            }
            EnvError::UnsupportedKind {
                key,
                kind,
                type_name,
            } => writeln!(
                f,
                "{}: Cannot read a {} ({}) from the environment",
                key.magenta().bold(),
                kind,
                type_name.cyan(),
            ),
            EnvError::Conversion { key, from, to } => writeln!(
                f,
                "{}: Cannot convert {} to {}",
                key.magenta().bold(),
                from.to_string().cyan(),
                to.cyan(),
            ),
        }
    }
}

impl std::error::Error for EnvError {}

/// How a single lookup was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The variable is missing or empty, the default was returned
    Unset,
    /// The variable was parsed into the requested type
    Parsed,
    /// The variable is set but did not parse, the default was returned
    ParseFailed(EnvError),
    /// The requested type cannot be read from a string, the default was returned
    UnsupportedKind(EnvError),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    pub fn error(&self) -> Option<&EnvError> {
        match self {
            Outcome::ParseFailed(e) | Outcome::UnsupportedKind(e) => Some(e),
            Outcome::Unset | Outcome::Parsed => None,
        }
    }

    pub fn into_error(self) -> Option<EnvError> {
        match self {
            Outcome::ParseFailed(e) | Outcome::UnsupportedKind(e) => Some(e),
            Outcome::Unset | Outcome::Parsed => None,
        }
    }
}

/// Helper to format several errors into one report, e.g. for a startup panic
pub fn format_errors(errors: &[EnvError]) -> String {
    let error_summary = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("");

    format!(
        "Environment failed with {} error(s):\n{}",
        errors.len().to_string().yellow().bold(),
        error_summary
    )
}
