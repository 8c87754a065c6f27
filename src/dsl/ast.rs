//! Abstract syntax types for the behavior DSL.

/// A validated behavior document.
///
/// Produced by [`super::validate`] and immutable afterwards;
/// the sequence is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Behavior {
    /// Ordered steps, executed top to bottom
    pub sequence: Vec<Step>,
}

/// A single step in a behavior sequence.
///
/// These are the only two legal step kinds; an unrecognized `action`
/// tag is rejected during validation and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Toggle a digital pin high/low `times` times
    Blink {
        /// Pin token: a board pin id or a component label
        pin: String,
        /// Number of on/off cycles
        times: u32,
        /// Duration of each half-cycle in milliseconds
        duration_ms: u32,
    },
    /// Pause the sequence
    Wait {
        /// Pause length in milliseconds
        duration_ms: u32,
    },
}

impl Step {
    /// The pin token referenced by this step, if any.
    pub fn pin_token(&self) -> Option<&str> {
        match self {
            Step::Blink { pin, .. } => Some(pin),
            Step::Wait { .. } => None,
        }
    }
}
