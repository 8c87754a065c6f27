//! Pin reference resolution.
//!
//! Turns DSL pin tokens into numbered board pins. Two strategies are
//! tried in order, and the order is a deliberate tie-break: a token
//! that is both a pin id and a component label resolves as the pin id.

use std::collections::HashMap;

use crate::board::{BoardPin, PinCapability};
use crate::ANALOG_PIN_OFFSET;

use super::ir::{IrPin, PinReference, ResolvedVia, ValidationContext};

/// Memoizing resolver for one build.
///
/// Each compilation owns its resolver; repeated references to the same
/// token (successful or not) resolve exactly once.
pub struct PinResolver<'a> {
    context: &'a ValidationContext,
    board_pins: &'a [BoardPin],
    cache: HashMap<String, Result<PinReference, String>>,
}

impl<'a> PinResolver<'a> {
    /// Create a resolver over a context snapshot and its board catalog.
    pub fn new(context: &'a ValidationContext, board_pins: &'a [BoardPin]) -> Self {
        Self {
            context,
            board_pins,
            cache: HashMap::new(),
        }
    }

    /// Resolve a pin token.
    ///
    /// The error string is self-contained: it enumerates the available
    /// pin ids and the component labels that have a pin assignment, so
    /// the user can correct the token without leaving the editor.
    pub fn resolve(&mut self, token: &str) -> Result<PinReference, String> {
        if let Some(hit) = self.cache.get(token) {
            return hit.clone();
        }
        let result = self.resolve_uncached(token);
        self.cache.insert(token.to_string(), result.clone());
        result
    }

    fn resolve_uncached(&self, token: &str) -> Result<PinReference, String> {
        // Strategy 1: the token is literally a board pin id.
        if self.context.available_pins.iter().any(|p| p == token) {
            let board_pin = self
                .board_pins
                .iter()
                .find(|p| p.id == token)
                .ok_or_else(|| format!("Pin {token} not found in board definition"))?;

            // Blink drives the pin as a digital output.
            if !board_pin.supports(PinCapability::Digital) {
                return Err(format!(
                    "Pin {token} does not support digital output (required for blink action)"
                ));
            }

            return Ok(PinReference {
                source: token.to_string(),
                resolved: IrPin {
                    label: sanitize_label(token),
                    pin_id: token.to_string(),
                    pin_number: pin_number(token),
                },
                resolved_via: ResolvedVia::Direct,
            });
        }

        // Strategy 2: the token is a component label with a single-pin
        // assignment. Multi-role assignments do not match here.
        if let Some(assignment) = self
            .context
            .component_assignments
            .iter()
            .find(|a| a.label == token)
        {
            if let Some(pin_id) = assignment.pin_id.as_deref() {
                let board_pin = self.board_pins.iter().find(|p| p.id == pin_id).ok_or_else(|| {
                    format!(
                        "Component {token} is assigned to pin {pin_id}, but this pin is not found on the board"
                    )
                })?;

                if !board_pin.supports(PinCapability::Digital) {
                    return Err(format!(
                        "Component {token} is assigned to pin {pin_id} which does not support digital output"
                    ));
                }

                return Ok(PinReference {
                    source: token.to_string(),
                    resolved: IrPin {
                        label: sanitize_label(token),
                        pin_id: pin_id.to_string(),
                        pin_number: pin_number(pin_id),
                    },
                    resolved_via: ResolvedVia::Component,
                });
            }
        }

        Err(self.unresolved_message(token))
    }

    fn unresolved_message(&self, token: &str) -> String {
        let labels: Vec<&str> = self
            .context
            .component_assignments
            .iter()
            .filter(|a| a.pin_id.is_some())
            .map(|a| a.label.as_str())
            .collect();

        let suggestions = if labels.is_empty() {
            " No components with pin assignments found.".to_string()
        } else {
            format!(" Available component labels: {}", labels.join(", "))
        };

        format!(
            "Pin or component \"{}\" not found. Available pins: {}.{}",
            token,
            self.context.available_pins.join(", "),
            suggestions
        )
    }
}

/// Turn a DSL token into a safe C++ identifier stem.
pub fn sanitize_label(token: &str) -> String {
    token
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Derive the numeric pin index from a pin id.
///
/// Prefix rules are tried in order; a prefixed id whose remainder is
/// not a plain integer falls through to the digit-run rule at the end.
/// Analog ids get [`ANALOG_PIN_OFFSET`] added, on every board.
pub fn pin_number(pin_id: &str) -> u32 {
    if let Some(n) = pin_id.strip_prefix('D').and_then(|rest| rest.parse().ok()) {
        return n;
    }
    if let Some(n) = pin_id
        .strip_prefix('A')
        .and_then(|rest| rest.parse::<u32>().ok())
    {
        return ANALOG_PIN_OFFSET + n;
    }
    if let Some(n) = pin_id
        .strip_prefix("GPIO")
        .and_then(|rest| rest.parse().ok())
    {
        return n;
    }
    first_digit_run(pin_id).unwrap_or(0)
}

fn first_digit_run(id: &str) -> Option<u32> {
    let start = id.find(|c: char| c.is_ascii_digit())?;
    let digits: String = id[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
