//! Arduino sketch templates.
//!
//! Renders an [`IrSketch`] into complete sketch source. Sections are
//! concatenated in a fixed order and contain nothing non-deterministic,
//! so identical IR always yields byte-identical output.

use std::fmt::Write;

use crate::error::{Result, SketchError};
use crate::IDLE_DELAY_MS;

use super::ir::{IrAction, IrPin, IrSketch};

/// Render the complete sketch for an IR.
///
/// Total for well-formed IR. The only failure path is a formatter
/// fault, surfaced as an emission error rather than a panic.
pub fn render_sketch(ir: &IrSketch) -> Result<String> {
    let mut out = String::new();
    render(ir, &mut out).map_err(|e| SketchError::emission(e.to_string()))?;
    Ok(out)
}

fn render(ir: &IrSketch, out: &mut String) -> std::fmt::Result {
    header(ir, out)?;
    pin_declarations(&ir.pins, out)?;
    helpers(out)?;
    setup(&ir.pins, out)?;
    main_loop(ir, out)
}

fn header(ir: &IrSketch, out: &mut String) -> std::fmt::Result {
    writeln!(out, "// Generated Arduino Sketch")?;
    writeln!(out, "// Board: {}", ir.board_fqbn)?;
    writeln!(out, "// Auto-generated from Pinsmith Behavior DSL")?;
    writeln!(out)
}

fn pin_declarations(pins: &[IrPin], out: &mut String) -> std::fmt::Result {
    if pins.is_empty() {
        return Ok(());
    }
    writeln!(out, "// Pin Definitions")?;
    for pin in pins {
        writeln!(
            out,
            "const int {}_PIN = {}; // {}",
            pin.label, pin.pin_number, pin.pin_id
        )?;
    }
    writeln!(out)
}

fn helpers(out: &mut String) -> std::fmt::Result {
    writeln!(out, "// Helper Functions")?;
    writeln!(out, "void blinkPin(int pin, int times, int duration) {{")?;
    writeln!(out, "  for (int i = 0; i < times; i++) {{")?;
    writeln!(out, "    digitalWrite(pin, HIGH);")?;
    writeln!(out, "    delay(duration);")?;
    writeln!(out, "    digitalWrite(pin, LOW);")?;
    writeln!(out, "    delay(duration);")?;
    writeln!(out, "  }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn setup(pins: &[IrPin], out: &mut String) -> std::fmt::Result {
    writeln!(out, "void setup() {{")?;
    if pins.is_empty() {
        writeln!(out, "  // No pins to initialize")?;
    } else {
        writeln!(out, "  // Initialize pins as outputs")?;
        for pin in pins {
            writeln!(out, "  pinMode({}_PIN, OUTPUT);", pin.label)?;
        }
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn main_loop(ir: &IrSketch, out: &mut String) -> std::fmt::Result {
    writeln!(out, "void loop() {{")?;
    if ir.loop_mode {
        // Reserved mode: re-run the sequence on every invocation.
        writeln!(out, "  // Execute behavior sequence (looping)")?;
        statements(ir, "  ", out)?;
    } else {
        writeln!(out, "  // Execute behavior sequence once")?;
        writeln!(out, "  static bool executed = false;")?;
        writeln!(out, "  if (!executed) {{")?;
        statements(ir, "    ", out)?;
        writeln!(out, "    executed = true;")?;
        writeln!(out, "  }}")?;
        writeln!(out, "  // Behavior complete - enter idle state")?;
        writeln!(out, "  delay({});", IDLE_DELAY_MS)?;
    }
    writeln!(out, "}}")
}

fn statements(ir: &IrSketch, indent: &str, out: &mut String) -> std::fmt::Result {
    for action in &ir.sequence {
        match action {
            IrAction::Blink {
                pin_token,
                times,
                duration_ms,
            } => match ir.pin_for_token(pin_token) {
                Some(pin) => writeln!(
                    out,
                    "{indent}blinkPin({}_PIN, {}, {});",
                    pin.label, times, duration_ms
                )?,
                // Unreachable when the IR came out of build(); kept
                // total so emission never aborts a valid sketch.
                None => writeln!(out, "{indent}// ERROR: pin '{pin_token}' is not bound")?,
            },
            IrAction::Wait { duration_ms } => {
                writeln!(out, "{indent}delay({});", duration_ms)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn sketch(pins: Vec<IrPin>, sequence: Vec<IrAction>, loop_mode: bool) -> IrSketch {
        let bindings = pins
            .iter()
            .map(|p| (p.pin_id.clone(), p.pin_id.clone()))
            .collect::<BTreeMap<_, _>>();
        IrSketch {
            board_fqbn: "arduino:avr:uno".to_string(),
            pins,
            bindings,
            sequence,
            loop_mode,
        }
    }

    fn d13() -> IrPin {
        IrPin {
            label: "D13".to_string(),
            pin_id: "D13".to_string(),
            pin_number: 13,
        }
    }

    #[test]
    fn test_full_sketch_layout() {
        let ir = sketch(
            vec![d13()],
            vec![
                IrAction::Blink {
                    pin_token: "D13".to_string(),
                    times: 5,
                    duration_ms: 500,
                },
                IrAction::Wait { duration_ms: 1000 },
            ],
            false,
        );

        let code = render_sketch(&ir).unwrap();
        let expected = "\
// Generated Arduino Sketch
// Board: arduino:avr:uno
// Auto-generated from Pinsmith Behavior DSL

// Pin Definitions
const int D13_PIN = 13; // D13

// Helper Functions
void blinkPin(int pin, int times, int duration) {
  for (int i = 0; i < times; i++) {
    digitalWrite(pin, HIGH);
    delay(duration);
    digitalWrite(pin, LOW);
    delay(duration);
  }
}

void setup() {
  // Initialize pins as outputs
  pinMode(D13_PIN, OUTPUT);
}

void loop() {
  // Execute behavior sequence once
  static bool executed = false;
  if (!executed) {
    blinkPin(D13_PIN, 5, 500);
    delay(1000);
    executed = true;
  }
  // Behavior complete - enter idle state
  delay(1000);
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_zero_pin_sketch_gets_noop_setup() {
        let ir = sketch(vec![], vec![IrAction::Wait { duration_ms: 250 }], false);
        let code = render_sketch(&ir).unwrap();

        assert!(code.contains("void setup() {\n  // No pins to initialize\n}"));
        assert!(!code.contains("// Pin Definitions"));
        assert!(code.contains("    delay(250);"));
    }

    #[test]
    fn test_loop_mode_drops_the_guard() {
        let ir = sketch(
            vec![d13()],
            vec![IrAction::Blink {
                pin_token: "D13".to_string(),
                times: 1,
                duration_ms: 100,
            }],
            true,
        );
        let code = render_sketch(&ir).unwrap();

        assert!(code.contains("// Execute behavior sequence (looping)"));
        assert!(!code.contains("static bool executed"));
        assert!(code.contains("  blinkPin(D13_PIN, 1, 100);"));
    }

    #[test]
    fn test_unbound_token_renders_error_comment() {
        let mut ir = sketch(
            vec![],
            vec![IrAction::Blink {
                pin_token: "GHOST".to_string(),
                times: 1,
                duration_ms: 100,
            }],
            false,
        );
        ir.bindings.clear();
        let code = render_sketch(&ir).unwrap();
        assert!(code.contains("// ERROR: pin 'GHOST' is not bound"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let ir = sketch(
            vec![d13()],
            vec![IrAction::Wait { duration_ms: 42 }],
            false,
        );
        assert_eq!(render_sketch(&ir).unwrap(), render_sketch(&ir).unwrap());
    }
}
