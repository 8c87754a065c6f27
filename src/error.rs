//! Error types for the Pinsmith behavior compiler.
//!
//! This module provides a unified error type [`SketchError`] that covers
//! all error conditions that can occur during DSL parsing, pin reference
//! resolution, project context lookup, and sketch emission. Every error
//! maps onto one of four pipeline [`ErrorKind`] tags that callers branch
//! their reporting on.

use thiserror::Error;

/// Result type alias using [`SketchError`].
pub type Result<T> = std::result::Result<T, SketchError>;

/// Pipeline stage an error belongs to.
///
/// - `Schema`: the DSL failed to parse or failed field validation;
///   recoverable by editing the behavior text.
/// - `Semantic`: the DSL parsed but a pin or component token could not
///   be resolved against the board/project context.
/// - `Context`: the surrounding project/board state is missing or
///   inconsistent; not fixable by editing the DSL.
/// - `Emission`: an unexpected failure while rendering source from an
///   otherwise valid IR; defensive catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// DSL parse or structural validation failure
    Schema,
    /// Pin/component reference resolution failure
    Semantic,
    /// Missing or inconsistent project/board state
    Context,
    /// Failure while rendering the sketch
    Emission,
}

impl ErrorKind {
    /// Stable lowercase tag, suitable for machine-checkable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Schema => "schema",
            ErrorKind::Semantic => "semantic",
            ErrorKind::Context => "context",
            ErrorKind::Emission => "emission",
        }
    }
}

/// Unified error type for all Pinsmith operations.
#[derive(Error, Debug)]
pub enum SketchError {
    // ============ Schema Errors ============
    /// The raw text is not well-formed YAML
    #[error("failed to parse behavior DSL: {message}")]
    Syntax { message: String },

    /// The document parsed but violates the behavior schema.
    /// Every field violation across the document is collected here.
    #[error("behavior validation failed: {}", .issues.join("; "))]
    Validation { issues: Vec<String> },

    // ============ Resolution Errors ============
    /// One or more pin tokens could not be resolved against the board
    /// catalog and component assignments
    #[error("{}", .errors.join("; "))]
    Resolution { errors: Vec<String> },

    // ============ Project Context Errors ============
    /// No project exists for the given id
    #[error("Project {id} not found")]
    ProjectNotFound { id: String },

    /// The project has no board selected
    #[error("No board selected for this project. Please select a board first.")]
    NoBoardSelected,

    /// The project references a board id the catalog does not know.
    /// This is a data-integrity fault, not a user input fault.
    #[error("Board {id} not found in catalog")]
    UnknownBoard { id: String },

    // ============ Emission Errors ============
    /// Rendering the sketch from a valid IR failed
    #[error("sketch emission failed: {message}")]
    Emission { message: String },
}

impl SketchError {
    /// Create a syntax error from a deserializer message.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Create a validation error from collected field issues.
    pub fn validation(issues: Vec<String>) -> Self {
        Self::Validation { issues }
    }

    /// Create a resolution error from collected resolver failures.
    pub fn resolution(errors: Vec<String>) -> Self {
        Self::Resolution { errors }
    }

    /// Create an emission error.
    pub fn emission(message: impl Into<String>) -> Self {
        Self::Emission {
            message: message.into(),
        }
    }

    /// The pipeline stage this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } | Self::Validation { .. } => ErrorKind::Schema,
            Self::Resolution { .. } => ErrorKind::Semantic,
            Self::ProjectNotFound { .. } | Self::NoBoardSelected | Self::UnknownBoard { .. } => {
                ErrorKind::Context
            }
            Self::Emission { .. } => ErrorKind::Emission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(SketchError::syntax("bad").kind(), ErrorKind::Schema);
        assert_eq!(
            SketchError::validation(vec!["a".into()]).kind(),
            ErrorKind::Schema
        );
        assert_eq!(
            SketchError::resolution(vec!["b".into()]).kind(),
            ErrorKind::Semantic
        );
        assert_eq!(SketchError::NoBoardSelected.kind(), ErrorKind::Context);
        assert_eq!(SketchError::emission("x").kind(), ErrorKind::Emission);
        assert_eq!(ErrorKind::Semantic.as_str(), "semantic");
    }

    #[test]
    fn test_collected_messages_join() {
        let err = SketchError::resolution(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "first; second");
    }
}
