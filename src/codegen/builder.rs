//! IR construction.
//!
//! Orchestrates the project context snapshot, pin resolution, IR
//! assembly, and emission. Every failure keeps its pipeline kind so
//! callers can branch reporting on it.

use std::collections::{BTreeMap, HashSet};

use crate::board;
use crate::dsl::{Behavior, Step};
use crate::error::{Result, SketchError};
use crate::project::ProjectStore;

use super::ir::{AssignmentView, CodeGen, IrAction, IrPin, IrSketch, ValidationContext};
use super::resolve::PinResolver;
use super::templates;

/// Build the IR for a validated behavior and render the sketch.
pub fn build(behavior: &Behavior, project_id: &str, store: &dyn ProjectStore) -> Result<CodeGen> {
    let project = store
        .project(project_id)
        .ok_or_else(|| SketchError::ProjectNotFound {
            id: project_id.to_string(),
        })?;

    let board_id = project
        .board_id
        .as_deref()
        .ok_or(SketchError::NoBoardSelected)?;

    // A selected board the catalog does not know is a data-integrity
    // fault in the project, not a problem with the behavior text.
    let board = board::find_board(board_id).ok_or_else(|| SketchError::UnknownBoard {
        id: board_id.to_string(),
    })?;
    let board_pins = board::board_pins(board_id);

    let context = ValidationContext {
        project_id: project_id.to_string(),
        board_id: board_id.to_string(),
        available_pins: board_pins.iter().map(|p| p.id.clone()).collect(),
        component_assignments: project
            .assignments
            .iter()
            .map(|a| AssignmentView {
                component_id: a.component_id.clone(),
                label: project.component_label(&a.component_id).to_string(),
                pin_id: a.pin_id.clone(),
                pins_by_role: a.pins.clone(),
            })
            .collect(),
    };

    // Resolve each distinct blink token exactly once, collecting every
    // failure instead of stopping at the first.
    let mut resolver = PinResolver::new(&context, board_pins);
    let mut seen = HashSet::new();
    let mut references = Vec::new();
    let mut errors = Vec::new();
    for step in &behavior.sequence {
        let Some(token) = step.pin_token() else {
            continue;
        };
        if !seen.insert(token.to_string()) {
            continue;
        }
        match resolver.resolve(token) {
            Ok(reference) => references.push(reference),
            Err(message) => errors.push(message),
        }
    }
    if !errors.is_empty() {
        return Err(SketchError::resolution(errors));
    }

    // Unique pins in first-seen order, deduplicated by resolved pin id;
    // the bindings map keeps every token addressable at emission time.
    let mut pins: Vec<IrPin> = Vec::new();
    let mut bindings = BTreeMap::new();
    for reference in &references {
        bindings.insert(reference.source.clone(), reference.resolved.pin_id.clone());
        if !pins.iter().any(|p| p.pin_id == reference.resolved.pin_id) {
            pins.push(reference.resolved.clone());
        }
    }

    let sequence = behavior
        .sequence
        .iter()
        .map(|step| match step {
            Step::Blink {
                pin,
                times,
                duration_ms,
            } => IrAction::Blink {
                pin_token: pin.clone(),
                times: *times,
                duration_ms: *duration_ms,
            },
            Step::Wait { duration_ms } => IrAction::Wait {
                duration_ms: *duration_ms,
            },
        })
        .collect();

    let ir = IrSketch {
        board_fqbn: board.fqbn.clone(),
        pins,
        bindings,
        sequence,
        // One-shot execution is the only mode the DSL expresses today.
        loop_mode: false,
    };

    let code = templates::render_sketch(&ir)?;

    Ok(CodeGen { ir, code })
}
