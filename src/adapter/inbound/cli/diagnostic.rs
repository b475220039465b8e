//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration errors are rendered with the offending part of the TOML
//! file underlined and a suggestion for fixing it.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(pennant::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>, src: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span,
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a source-annotated diagnostic for a configuration error.
///
/// Returns `None` for errors that are not about the file's content.
#[must_use]
pub fn config_diagnostic(err: &Error, src: &str) -> Option<ConfigDiagnostic> {
    let Error::Config(config_err) = err else {
        return None;
    };

    match config_err {
        ConfigError::Parse(e) => {
            let span = e.span().map(|r| SourceSpan::from((r.start, r.end - r.start)));
            Some(
                ConfigDiagnostic::new(e.message().to_string(), src, span)
                    .with_help("check the TOML syntax and the field types"),
            )
        }
        ConfigError::InvalidValue { field, reason } => {
            let span = find_key(src, field);
            Some(
                ConfigDiagnostic::new(format!("invalid value for {field}: {reason}"), src, span)
                    .with_help(help_for(field)),
            )
        }
        ConfigError::ReadFile(_) => None,
    }
}

/// Span of the first `key =` assignment in the file.
fn find_key(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, line.trim_end().len() - (start - offset))));
            }
        }
        offset += line.len();
    }
    None
}

fn help_for(field: &str) -> &'static str {
    match field {
        "big_m" => "big_m must exceed the number of games a team plays in a season",
        "min_margin" => "min_margin must be smaller than the gap between any two distinct win percentages",
        "names" => "list exactly one distinct, non-numeric name per team",
        "league" => "a league needs at least two teams, games between them, and a draw budget below the season length",
        _ => "see `pennant config show` for the effective values",
    }
}
