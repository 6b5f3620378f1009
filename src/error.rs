//! Unified error types for rowdiff.
//!
//! This module provides the crate-wide error hierarchy, with context
//! chaining for debugging and user-friendly messages.

use crate::model::RowShape;
use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rowdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RowDiffError {
    /// Errors while reading rows
    #[error("Failed to read rows: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Errors during diff computation
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific diff error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiffError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Row shapes differ between sides: {a} rows vs {b} rows")]
    ShapeMismatch { a: RowShape, b: RowShape },

    #[error("Row {position} on side {side} is not a {expected} row like the rows before it")]
    InconsistentShape {
        side: char,
        position: usize,
        expected: RowShape,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for rowdiff operations
pub type Result<T> = std::result::Result<T, RowDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl RowDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a diff error
    pub fn diff(context: impl Into<String>, source: DiffError) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The diff error kind, if this is a diff error.
    #[must_use]
    pub const fn diff_kind(&self) -> Option<&DiffError> {
        match self {
            Self::Diff { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for RowDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for RowDiffError {
    fn from(err: ParseError) -> Self {
        Self::parse("", err)
    }
}

impl From<DiffError> for RowDiffError {
    fn from(err: DiffError) -> Self {
        Self::diff("", err)
    }
}

impl From<ReportError> for RowDiffError {
    fn from(err: ReportError) -> Self {
        Self::report("", err)
    }
}

impl From<serde_json::Error> for RowDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::report("JSON serialization", ReportError::from(err))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain, so the final message shows the path through the
/// code:
///
/// ```ignore
/// use rowdiff::error::ErrorContext;
///
/// let rows = read_rows(path, &options)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<RowDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: RowDiffError, new_ctx: &str) -> RowDiffError {
    match err {
        RowDiffError::Parse {
            context: existing,
            source,
        } => RowDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RowDiffError::Diff {
            context: existing,
            source,
        } => RowDiffError::Diff {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RowDiffError::Report {
            context: existing,
            source,
        } => RowDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RowDiffError::Io {
            path,
            message,
            source,
        } => RowDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        RowDiffError::Config(msg) => RowDiffError::Config(chain_context(new_ctx, &msg)),
        RowDiffError::Validation(msg) => RowDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
