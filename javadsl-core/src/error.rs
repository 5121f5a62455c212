//! Error taxonomy shared by every javadsl crate.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for javadsl operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Usage errors raised while building or rendering generated code.
///
/// Every variant is a programmer error detected at the call that broke the
/// contract. None of them are retried or recovered internally.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid argument: {message}")]
    #[diagnostic(code(javadsl::invalid_argument))]
    InvalidArgument { message: String },

    #[error("invalid state: {message}")]
    #[diagnostic(
        code(javadsl::invalid_state),
        help("chain 'else if', 'else', 'catch' and 'finally' directly onto the flow they extend")
    )]
    InvalidState { message: String },

    #[error("invalid structure: {message}")]
    #[diagnostic(
        code(javadsl::invalid_structure),
        help("nested types are written as part of their top-level type")
    )]
    InvalidStructure { message: String },

    #[error("format '{format}': {message}")]
    #[diagnostic(code(javadsl::template_mismatch))]
    TemplateMismatch { format: String, message: String },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(javadsl::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
        filename: String,
    },

    #[error("I/O error on '{path}'")]
    #[diagnostic(code(javadsl::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidArgument {
            message: message.into(),
        })
    }

    /// Create an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidState {
            message: message.into(),
        })
    }

    /// Create an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidStructure {
            message: message.into(),
        })
    }

    /// Create a template mismatch error for the given format string.
    pub fn template_mismatch(format: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::TemplateMismatch {
            format: format.into(),
            message: message.into(),
        })
    }

    /// Create a config parse error from a toml error with source context.
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
            filename: filename.to_string(),
        })
    }

    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

/// Fail with [`Error::InvalidArgument`] when `name` is empty or whitespace.
pub fn require_not_blank(name: &str, what: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{what} must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_message() {
        let err = Error::invalid_state("flow is closed");
        assert_eq!(err.to_string(), "invalid state: flow is closed");
    }

    #[test]
    fn test_template_mismatch_message() {
        let err = Error::template_mismatch("$L $L", "expected 2 arguments, got 1");
        assert_eq!(
            err.to_string(),
            "format '$L $L': expected 2 arguments, got 1"
        );
    }

    #[test]
    fn test_require_not_blank() {
        assert!(require_not_blank("foo", "name").is_ok());
        let err = require_not_blank("  ", "name").unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "invalid argument: name must not be blank");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = Error::invalid_structure("nested");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("javadsl::invalid_structure"));
    }
}
