//! Schema validation for the behavior DSL.
//!
//! Checks a generic YAML value field by field against the grammar and
//! returns either a typed [`Behavior`] or every violation found in the
//! document. Working on the generic value (instead of deriving a
//! deserializer) is what makes collecting all errors in one pass
//! possible.

use serde_yaml::Value;

use super::ast::{Behavior, Step};

/// Validate a deserialized YAML value against the behavior schema.
///
/// On failure returns one entry per field violation, each prefixed with
/// the path of the offending field (`sequence[i].<field>: <message>`).
pub fn validate(raw: &Value) -> Result<Behavior, Vec<String>> {
    let Some(sequence) = raw.get("sequence") else {
        return Err(vec!["sequence: field is required".to_string()]);
    };

    let Some(items) = sequence.as_sequence() else {
        return Err(vec!["sequence: must be a list of steps".to_string()]);
    };

    if items.is_empty() {
        return Err(vec![
            "sequence: must contain at least one step".to_string(),
        ]);
    }

    let mut issues = Vec::new();
    let mut steps = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        if let Some(step) = validate_step(i, item, &mut issues) {
            steps.push(step);
        }
    }

    if issues.is_empty() {
        Ok(Behavior { sequence: steps })
    } else {
        Err(issues)
    }
}

/// Validate a single sequence element, pushing every violation found.
///
/// Returns the typed step only when all of its fields check out, so a
/// returned `Behavior` always matches the grammar exactly.
fn validate_step(i: usize, item: &Value, issues: &mut Vec<String>) -> Option<Step> {
    if item.as_mapping().is_none() {
        issues.push(format!("sequence[{i}]: step must be a mapping"));
        return None;
    }

    let Some(action) = item.get("action").and_then(Value::as_str) else {
        issues.push(format!(
            "sequence[{i}].action: Action must be either 'blink' or 'wait'"
        ));
        return None;
    };

    match action {
        "blink" => {
            let pin = match item.get("pin").and_then(Value::as_str) {
                Some(p) if !p.is_empty() => Some(p.to_string()),
                _ => {
                    issues.push(format!("sequence[{i}].pin: Pin is required"));
                    None
                }
            };

            let times = positive_int(item.get("times"));
            if times.is_none() {
                issues.push(format!(
                    "sequence[{i}].times: Times must be a positive integer"
                ));
            }

            let duration_ms = positive_int(item.get("duration_ms"));
            if duration_ms.is_none() {
                issues.push(format!(
                    "sequence[{i}].duration_ms: Duration must be a positive integer"
                ));
            }

            match (pin, times, duration_ms) {
                (Some(pin), Some(times), Some(duration_ms)) => Some(Step::Blink {
                    pin,
                    times,
                    duration_ms,
                }),
                _ => None,
            }
        }
        "wait" => {
            let duration_ms = positive_int(item.get("duration_ms"));
            if duration_ms.is_none() {
                issues.push(format!(
                    "sequence[{i}].duration_ms: Duration must be a positive integer"
                ));
            }
            duration_ms.map(|duration_ms| Step::Wait { duration_ms })
        }
        _ => {
            issues.push(format!(
                "sequence[{i}].action: Action must be either 'blink' or 'wait'"
            ));
            None
        }
    }
}

/// Extract a strictly positive integer, rejecting floats, strings and
/// out-of-range values alike.
fn positive_int(value: Option<&Value>) -> Option<u32> {
    let n = value?.as_i64()?;
    if n > 0 {
        u32::try_from(n).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;
    use crate::dsl::examples;
    use crate::error::SketchError;

    fn validate_str(input: &str) -> Result<Behavior, Vec<String>> {
        let value: Value = serde_yaml::from_str(input).unwrap();
        validate(&value)
    }

    #[test]
    fn test_valid_simple_blink() {
        let behavior = parse(examples::SIMPLE_BLINK).unwrap();
        assert_eq!(behavior.sequence.len(), 3);
        assert_eq!(
            behavior.sequence[0],
            Step::Blink {
                pin: "D13".to_string(),
                times: 5,
                duration_ms: 500,
            }
        );
        assert_eq!(behavior.sequence[1], Step::Wait { duration_ms: 1000 });
    }

    #[test]
    fn test_missing_sequence() {
        let errors = validate_str("steps: []").unwrap_err();
        assert_eq!(errors, vec!["sequence: field is required"]);
    }

    #[test]
    fn test_empty_sequence() {
        let errors = validate_str("sequence: []").unwrap_err();
        assert_eq!(errors, vec!["sequence: must contain at least one step"]);
    }

    #[test]
    fn test_empty_input_is_schema_failure() {
        match parse("") {
            Err(SketchError::Validation { issues }) => {
                assert_eq!(issues, vec!["sequence: field is required"]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_all_violations_collected() {
        let errors = validate_str(examples::INVALID).unwrap_err();
        // Step 0: empty pin, negative times, zero duration. Step 1:
        // unknown action. Step 2: missing duration. Step 3: missing
        // times and duration.
        assert!(errors.contains(&"sequence[0].pin: Pin is required".to_string()));
        assert!(errors.contains(&"sequence[0].times: Times must be a positive integer".to_string()));
        assert!(errors
            .contains(&"sequence[0].duration_ms: Duration must be a positive integer".to_string()));
        assert!(errors
            .contains(&"sequence[1].action: Action must be either 'blink' or 'wait'".to_string()));
        assert!(errors
            .contains(&"sequence[2].duration_ms: Duration must be a positive integer".to_string()));
        assert!(errors.contains(&"sequence[3].times: Times must be a positive integer".to_string()));
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_malformed_yaml_is_single_syntax_error() {
        match parse(examples::MALFORMED_YAML) {
            Err(SketchError::Syntax { .. }) => {}
            other => panic!("expected syntax failure, got {other:?}"),
        }
    }

    #[test]
    fn test_boundary_values() {
        let minimal = "sequence:\n  - action: blink\n    pin: \"D2\"\n    times: 1\n    duration_ms: 1";
        let behavior = validate_str(minimal).unwrap();
        assert_eq!(
            behavior.sequence[0],
            Step::Blink {
                pin: "D2".to_string(),
                times: 1,
                duration_ms: 1,
            }
        );

        let zero_times = "sequence:\n  - action: blink\n    pin: \"D2\"\n    times: 0\n    duration_ms: 1";
        let errors = validate_str(zero_times).unwrap_err();
        assert_eq!(
            errors,
            vec!["sequence[0].times: Times must be a positive integer"]
        );

        let zero_wait = "sequence:\n  - action: wait\n    duration_ms: 0";
        let errors = validate_str(zero_wait).unwrap_err();
        assert_eq!(
            errors,
            vec!["sequence[0].duration_ms: Duration must be a positive integer"]
        );
    }

    #[test]
    fn test_non_integer_fields_rejected() {
        let quoted = "sequence:\n  - action: blink\n    pin: \"D2\"\n    times: \"5\"\n    duration_ms: 1.5";
        let errors = validate_str(quoted).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "sequence[0].times: Times must be a positive integer",
                "sequence[0].duration_ms: Duration must be a positive integer",
            ]
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let extra = "sequence:\n  - action: wait\n    duration_ms: 100\n    label: \"pause\"";
        let behavior = validate_str(extra).unwrap();
        assert_eq!(behavior.sequence, vec![Step::Wait { duration_ms: 100 }]);
    }

    #[test]
    fn test_non_mapping_step() {
        let errors = validate_str("sequence:\n  - 42").unwrap_err();
        assert_eq!(errors, vec!["sequence[0]: step must be a mapping"]);
    }
}
