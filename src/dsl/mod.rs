//! DSL (Domain Specific Language) parser for behavior descriptions.
//!
//! This module provides a YAML-based language for describing small
//! device behaviors as an ordered sequence of steps. The DSL is
//! indentation-sensitive and human-editable.
//!
//! # Grammar Overview
//!
//! ```text
//! behavior    = { "sequence": step+ }
//! step        = blink | wait
//! blink       = { "action": "blink", "pin": token, "times": posint, "duration_ms": posint }
//! wait        = { "action": "wait", "duration_ms": posint }
//!
//! token       = non-empty string (a board pin id or a component label)
//! posint      = integer > 0
//! ```
//!
//! # Steps
//!
//! | Action | Description | Fields |
//! |--------|-------------|--------|
//! | blink | Toggle a digital pin N times | `pin`, `times`, `duration_ms` |
//! | wait | Pause the sequence | `duration_ms` |
//!
//! # Example
//!
//! ```yaml
//! # Simple LED Blink Behavior
//! sequence:
//!   - action: blink
//!     pin: "D13"
//!     times: 5
//!     duration_ms: 500
//!   - action: wait
//!     duration_ms: 1000
//! ```
//!
//! The `pin` token is either a literal board pin id (`"D13"`) or the
//! label of a project component with a pin assignment (`"RED"`); which
//! one it is gets decided later, during pin resolution.
//!
//! Validation is two-phase: the text is first deserialized into a
//! generic YAML value (a syntax fault stops here), then checked field
//! by field against the grammar. All field violations across the whole
//! document are collected and reported together, never one at a time.
//! Unknown extra fields on a step are silently ignored.

mod ast;
mod schema;

pub mod examples;

pub use ast::{Behavior, Step};
pub use schema::validate;

use crate::error::{Result, SketchError};

/// Parse a behavior DSL string into a validated [`Behavior`].
pub fn parse(input: &str) -> Result<Behavior> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(input).map_err(|e| SketchError::syntax(e.to_string()))?;
    schema::validate(&value).map_err(SketchError::validation)
}

/// Parse a behavior DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Behavior> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SketchError::syntax(format!("failed to read {}: {}", path.display(), e)))?;
    parse(&content)
}
