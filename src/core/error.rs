//! Error handling for YSLT
//!
//! This module provides the error types and user-friendly error reporting for
//! the transformer. The error system is built around two types:
//! - [`YsltError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Input decoding**: [`YsltError::FileRead`], [`YsltError::YamlParse`],
//!   [`YsltError::ContextConversion`]
//! - **Templating**: [`YsltError::TemplateLoad`], [`YsltError::TemplateRender`]
//!
//! The two validation failures defined by the CLI contract (missing input
//! file, missing stylesheet) are *not* errors in this sense: they print a
//! fixed message on stdout and end the run. Everything here covers the
//! unrecovered paths that abort the process with a diagnostic on stderr.
//!
//! # Examples
//!
//! ```rust,no_run
//! use yslt::core::error::{YsltError, user_friendly_error};
//!
//! fn decode() -> anyhow::Result<()> {
//!     Err(YsltError::ContextConversion {
//!         file: "data.yaml".to_string(),
//!         reason: "mapping key is not a scalar".to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = decode() {
//!     let ctx = user_friendly_error(e);
//!     ctx.display(); // Colored error with suggestion on stderr
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for YSLT operations
///
/// Each variant represents a specific failure mode in the transformation
/// pipeline and carries enough context (paths, template names, the underlying
/// library error) to produce an actionable diagnostic.
#[derive(Error, Debug)]
pub enum YsltError {
    /// A file could not be read from disk.
    #[error("Failed to read {path}")]
    FileRead {
        /// Path that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid YAML.
    #[error("Invalid YAML syntax in {file}")]
    YamlParse {
        /// Input file that failed to parse
        file: String,
        /// Underlying YAML parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// The decoded YAML document cannot be represented as a template context.
    #[error("YAML document in {file} cannot be used as a template context: {reason}")]
    ContextConversion {
        /// Input file the document was decoded from
        file: String,
        /// Why the conversion failed
        reason: String,
    },

    /// Templates under the stylesheet directory failed to load or parse.
    #[error("Failed to load templates from {root}")]
    TemplateLoad {
        /// Template root directory
        root: String,
        /// Underlying Tera error
        #[source]
        source: tera::Error,
    },

    /// The stylesheet failed to render.
    #[error("Failed to render stylesheet '{name}': {reason}")]
    TemplateRender {
        /// Template name of the stylesheet
        name: String,
        /// Formatted Tera error chain
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Error context with user-friendly messaging
///
/// Wraps a [`YsltError`] with an optional suggestion and details that help
/// the user resolve the problem. Displayed on stderr by [`ErrorContext::display`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying YSLT error
    pub error: YsltError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: YsltError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach additional details about the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error with colors on stderr.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`]
///
/// Downcasts the error to known types and attaches tailored suggestions.
/// Unknown errors fall back to a generic context that preserves the full
/// `Caused by:` chain for diagnostics.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(yslt_error) = error.downcast_ref::<YsltError>() {
        return create_error_context(yslt_error, &error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(YsltError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check file ownership and read permissions");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(YsltError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(YsltError::Other { message })
}

/// Map each [`YsltError`] variant to a context with tailored suggestions.
fn create_error_context(error: &YsltError, original: &anyhow::Error) -> ErrorContext {
    match error {
        YsltError::FileRead { path, source } => ErrorContext::new(YsltError::FileRead {
            path: path.clone(),
            source: std::io::Error::new(source.kind(), source.to_string()),
        })
        .with_suggestion("Check that the file exists and is readable")
        .with_details(source.to_string()),

        YsltError::YamlParse { file, source } => ErrorContext::new(YsltError::Other {
            message: format!("Invalid YAML syntax in {file}"),
        })
        .with_suggestion(
            "Check the YAML syntax of the input file. Verify indentation, quoting, and that \
             sequences and mappings are properly closed",
        )
        .with_details(source.to_string()),

        YsltError::ContextConversion { file, reason } => {
            ErrorContext::new(YsltError::ContextConversion {
                file: file.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Template contexts are JSON-shaped: mapping keys must be scalars")
        }

        YsltError::TemplateLoad { root, source } => ErrorContext::new(YsltError::Other {
            message: format!("Failed to load templates from {root}"),
        })
        .with_suggestion(
            "Check template syntax: variables use {{ var }}, comments use {# #}, control flow \
             uses {% %}. Every file under the stylesheet's directory is parsed as a template",
        )
        .with_details(crate::templating::format_tera_error(source)),

        YsltError::TemplateRender { name, reason } => {
            ErrorContext::new(YsltError::TemplateRender {
                name: name.clone(),
                reason: reason.clone(),
            })
            .with_suggestion(
                "Ensure all variables referenced in the stylesheet exist in the context \
                 (`context` holds the YAML document, `filename` the input file name); use \
                 {% if var is defined %} to guard optional values",
            )
        }

        _ => ErrorContext::new(YsltError::Other {
            message: original.to_string(),
        }),
    }
}
