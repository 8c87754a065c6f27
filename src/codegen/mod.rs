//! Sketch generation pipeline.
//!
//! This module turns validated behavior documents into Arduino source:
//!
//! ```text
//! ┌─────────┐     ┌─────────┐     ┌─────────┐     ┌─────────┐
//! │   DSL   │────▶│ Resolve │────▶│   IR    │────▶│ Sketch  │
//! │ (YAML)  │     │  pins   │     │ (build) │     │ (emit)  │
//! └─────────┘     └─────────┘     └─────────┘     └─────────┘
//! ```
//!
//! Resolution consults the board catalog and the project's component
//! assignments; the resulting [`IrSketch`] is fully board-bound, so
//! emission is a pure, deterministic rendering step.

mod builder;
mod ir;
mod resolve;
mod templates;

pub use builder::build;
pub use ir::{
    AssignmentView, CodeGen, IrAction, IrPin, IrSketch, PinReference, ResolvedVia,
    ValidationContext,
};
pub use resolve::{pin_number, sanitize_label, PinResolver};
pub use templates::render_sketch;

use crate::dsl;
use crate::error::Result;
use crate::project::ProjectStore;

/// Compile behavior DSL text into an Arduino sketch for a project.
///
/// This is the top-level entry point: it runs schema validation, pin
/// resolution, IR construction, and emission in one synchronous call.
/// Every failure carries the pipeline kind it belongs to; nothing in
/// here panics on user input.
pub fn compile(raw: &str, project_id: &str, store: &dyn ProjectStore) -> Result<CodeGen> {
    let behavior = dsl::parse(raw)?;
    builder::build(&behavior, project_id, store)
}
