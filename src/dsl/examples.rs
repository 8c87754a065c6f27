//! Canonical behavior documents.
//!
//! Used by the documentation, the CLI `--example` flag, and the test
//! suite. The invalid variants exercise the two failure phases of the
//! front end (field validation and YAML syntax).

/// Simple one-LED blink sequence.
pub const SIMPLE_BLINK: &str = r#"# Simple LED Blink Behavior
sequence:
  - action: blink
    pin: "D13"
    times: 5
    duration_ms: 500
  - action: wait
    duration_ms: 1000
  - action: blink
    pin: "D13"
    times: 3
    duration_ms: 200
"#;

/// Alternating pattern across two LEDs.
pub const MULTI_LED_PATTERN: &str = r#"# Multi-LED Pattern Behavior
sequence:
  - action: blink
    pin: "D12"
    times: 2
    duration_ms: 300
  - action: blink
    pin: "D13"
    times: 2
    duration_ms: 300
  - action: wait
    duration_ms: 500
  - action: blink
    pin: "D12"
    times: 1
    duration_ms: 100
  - action: blink
    pin: "D13"
    times: 1
    duration_ms: 100
  - action: wait
    duration_ms: 2000
"#;

/// Longer sequence referencing component labels instead of pin ids.
pub const COMPLEX_SEQUENCE: &str = r#"# Complex Sequence Behavior
sequence:
  - action: blink
    pin: "LED_RED"
    times: 10
    duration_ms: 50
  - action: wait
    duration_ms: 1500
  - action: blink
    pin: "LED_GREEN"
    times: 3
    duration_ms: 800
  - action: blink
    pin: "LED_BLUE"
    times: 5
    duration_ms: 400
  - action: wait
    duration_ms: 3000
"#;

/// Parses as YAML but violates the schema in several places at once.
pub const INVALID: &str = r#"# Invalid Example - Multiple Issues
sequence:
  - action: blink
    pin: ""
    times: -1
    duration_ms: 0
  - action: invalid_action
    duration_ms: 500
  - action: wait
  - action: blink
    pin: "D13"
"#;

/// Not even YAML: a mapping value at an illegal indentation level.
pub const MALFORMED_YAML: &str = r#"# Malformed Example
sequence:
  - action: blink
    pin: "D13"
    times: 5
      duration_ms: 500
"#;

/// Default text offered to new behaviors.
pub const DEFAULT: &str = SIMPLE_BLINK;
