//! Intermediate representation for sketch generation.
//!
//! The IR is the single artifact between pin resolution and emission:
//! a board target, the deduplicated pin list, the token bindings, and
//! the ordered action sequence. By the time an [`IrSketch`] exists,
//! every pin token has been resolved; emission cannot fail on it.

use std::collections::BTreeMap;

use serde::Serialize;

/// A declared sketch pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrPin {
    /// Sanitized identifier stem used in the generated source, e.g. "LED_1"
    pub label: String,
    /// Resolved board pin id, e.g. "D13"
    pub pin_id: String,
    /// Numeric index passed to the pin API, e.g. 13
    pub pin_number: u32,
}

/// One executable action in the sketch main routine.
///
/// Blink actions keep the original DSL token, not the resolved pin id;
/// the emitter looks the pin up through [`IrSketch::pin_for_token`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IrAction {
    /// Call the blink helper on a bound pin
    #[serde(rename_all = "camelCase")]
    Blink {
        /// Original DSL pin token
        pin_token: String,
        /// Number of on/off cycles
        times: u32,
        /// Half-cycle duration in milliseconds
        duration_ms: u32,
    },
    /// Idle for a fixed time
    #[serde(rename_all = "camelCase")]
    Wait {
        /// Pause length in milliseconds
        duration_ms: u32,
    },
}

/// The resolved, board-bound sketch model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrSketch {
    /// Fully qualified board name of the compile target
    pub board_fqbn: String,
    /// Unique pins in first-seen order, deduplicated by pin id
    pub pins: Vec<IrPin>,
    /// DSL token to resolved pin id. Two tokens may bind one pin.
    pub bindings: BTreeMap<String, String>,
    /// Ordered actions, one per DSL step
    pub sequence: Vec<IrAction>,
    /// Reserved. `false` (one-shot) is the only mode the DSL expresses.
    pub loop_mode: bool,
}

impl IrSketch {
    /// The declared pin a DSL token is bound to.
    ///
    /// `None` means the IR invariant was violated upstream; the emitter
    /// treats that as an internal fault, not a user error.
    pub fn pin_for_token(&self, token: &str) -> Option<&IrPin> {
        let pin_id = self.bindings.get(token)?;
        self.pins.iter().find(|p| &p.pin_id == pin_id)
    }
}

/// How a pin token was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedVia {
    /// The token was a board pin id
    Direct,
    /// The token was a component label with a pin assignment
    Component,
}

/// Result of resolving one pin token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinReference {
    /// Original token from the DSL
    pub source: String,
    /// Resolved pin information
    pub resolved: IrPin,
    /// Which strategy resolved it
    pub resolved_via: ResolvedVia,
}

/// Read-only snapshot of project state taken at the start of a build.
///
/// Resolution works only against this snapshot, never against the live
/// store, so concurrent builds cannot observe each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Project the build runs for
    pub project_id: String,
    /// Selected board id
    pub board_id: String,
    /// Ordered pin ids of the selected board
    pub available_pins: Vec<String>,
    /// Component assignments with display labels attached
    pub component_assignments: Vec<AssignmentView>,
}

/// One component assignment as resolution sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentView {
    /// Component instance id
    pub component_id: String,
    /// Display label, the token component references use
    pub label: String,
    /// Single-pin assignment target
    pub pin_id: Option<String>,
    /// Role map for multi-pin components
    pub pins_by_role: Option<BTreeMap<String, String>>,
}

/// Successful compilation output: the IR and the rendered sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGen {
    /// The intermediate sketch model
    pub ir: IrSketch,
    /// Complete Arduino source text
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_for_token_follows_bindings() {
        let pin = IrPin {
            label: "RED".to_string(),
            pin_id: "D5".to_string(),
            pin_number: 5,
        };
        let mut bindings = BTreeMap::new();
        bindings.insert("RED".to_string(), "D5".to_string());
        let ir = IrSketch {
            board_fqbn: "arduino:avr:uno".to_string(),
            pins: vec![pin.clone()],
            bindings,
            sequence: vec![],
            loop_mode: false,
        };

        assert_eq!(ir.pin_for_token("RED"), Some(&pin));
        assert_eq!(ir.pin_for_token("GREEN"), None);
    }
}
