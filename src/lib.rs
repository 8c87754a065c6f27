//! # Pinsmith Core
//!
//! A small compiler that turns behavior descriptions into ready-to-flash
//! Arduino sketches.
//!
//! This library provides:
//! - A YAML behavior DSL (ordered sequences of `blink` and `wait` steps)
//! - Schema validation that reports every field violation in one pass
//! - Pin reference resolution against a board's pin catalog and a
//!   project's component-to-pin assignments
//! - Deterministic Arduino source emission from a small IR
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser and schema validator for the behavior language
//! - [`board`] - Board definitions and the static pin catalog
//! - [`project`] - Project snapshot model and pin assignment rules
//! - [`codegen`] - Pin resolution, IR construction, and sketch emission
//!
//! ## Usage
//!
//! ```
//! use pinsmith_core::project::{InMemoryProjectStore, Project};
//!
//! let mut store = InMemoryProjectStore::new();
//! let mut project = Project::new("p1", "Blinker");
//! project.board_id = Some("uno".to_string());
//! store.insert(project);
//!
//! let dsl = r#"
//! sequence:
//!   - action: blink
//!     pin: "D13"
//!     times: 5
//!     duration_ms: 500
//! "#;
//!
//! let result = pinsmith_core::compile(dsl, "p1", &store).unwrap();
//! assert!(result.code.contains("pinMode(D13_PIN, OUTPUT);"));
//! ```
//!
//! ## Compilation Pipeline
//!
//! A single synchronous call runs the whole pipeline:
//!
//! 1. Deserialize the raw text into a generic YAML value and validate it
//!    field by field into a typed [`dsl::Behavior`]
//! 2. Snapshot the project context and resolve every pin token against
//!    the board catalog and component assignments
//! 3. Assemble the [`codegen::IrSketch`] and render the sketch text
//!
//! Each stage can fail; failures short-circuit the rest of the pipeline
//! and carry an [`ErrorKind`] tag the caller can branch on.

pub mod board;
pub mod codegen;
pub mod dsl;
pub mod error;
pub mod project;

// Re-export main types for convenience
pub use codegen::{compile, CodeGen};
pub use dsl::Behavior;
pub use error::{ErrorKind, Result, SketchError};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSketchCompiler;

/// Numeric offset applied to analog pin ids (`A0` -> 14, `A1` -> 15, ...).
///
/// This reproduces the Uno convention where analog pins are numbered
/// after the 14 digital pins. The same offset is currently applied to
/// every board in the catalog, which is almost certainly wrong for
/// boards with a different digital pin count; changing it per board is
/// a product decision, not a bug fix.
pub const ANALOG_PIN_OFFSET: u32 = 14;

/// Idle delay in milliseconds appended after a one-shot sequence.
pub const IDLE_DELAY_MS: u32 = 1000;
