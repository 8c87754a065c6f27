//! Pin assignment rules.
//!
//! Capability compatibility per component kind, required roles for
//! multi-pin components, and conflict detection over a project's
//! current assignments. How conflicts are presented is the host
//! application's business; this module only finds them.

use std::collections::BTreeMap;

use crate::board::{BoardPin, PinCapability};

use super::{Assignment, ComponentInstance, ComponentKind};

/// Severity of a detected conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictLevel {
    /// Assignment set is unusable as-is
    Error,
    /// Works, but probably not what the user wants
    Warn,
}

/// A single detected assignment problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// How bad it is
    pub level: ConflictLevel,
    /// Human-readable description
    pub message: String,
    /// Component instances involved
    pub component_ids: Vec<String>,
    /// Pins involved
    pub pin_ids: Vec<String>,
}

/// Whether a pin can host a component of the given kind.
///
/// `role` narrows the check for multi-pin components ("sda" must land
/// on an I2C data pin, and so on).
pub fn is_compatible(kind: ComponentKind, pin: &BoardPin, role: Option<&str>) -> bool {
    match kind {
        ComponentKind::Led | ComponentKind::Button | ComponentKind::Ws2812 => {
            pin.supports(PinCapability::Digital)
        }
        // PWM preferred but not required
        ComponentKind::Buzzer => pin.supports(PinCapability::Digital),
        // Both trigger and echo need digital
        ComponentKind::Hcsr04 => pin.supports(PinCapability::Digital),
        ComponentKind::Mpu6050 => match role {
            Some("sda") => pin.supports(PinCapability::I2cSda),
            Some("scl") => pin.supports(PinCapability::I2cScl),
            _ => pin.supports(PinCapability::I2cSda) || pin.supports(PinCapability::I2cScl),
        },
    }
}

/// The pin roles a component kind must have assigned before it is
/// usable. Single-pin kinds have none.
pub fn required_roles(kind: ComponentKind) -> &'static [&'static str] {
    match kind {
        ComponentKind::Hcsr04 => &["trigger", "echo"],
        ComponentKind::Mpu6050 => &["sda", "scl"],
        _ => &[],
    }
}

/// Find every conflict in a project's assignment set.
///
/// Detects double-booked pins (two assignments on one pin) and I2C
/// role pairs that land on different buses.
pub fn conflicts(
    assignments: &[Assignment],
    board_pins: &[BoardPin],
    components: &[ComponentInstance],
) -> Vec<Conflict> {
    let mut found = Vec::new();

    // Group assignments by the pins they claim.
    let mut pin_usage: BTreeMap<&str, Vec<&Assignment>> = BTreeMap::new();
    for assignment in assignments {
        if let Some(pin_id) = assignment.pin_id.as_deref() {
            pin_usage.entry(pin_id).or_default().push(assignment);
        }
        if let Some(pins) = &assignment.pins {
            for pin_id in pins.values() {
                pin_usage.entry(pin_id).or_default().push(assignment);
            }
        }
    }

    for (pin_id, users) in &pin_usage {
        if users.len() > 1 {
            let component_ids: Vec<String> =
                users.iter().map(|a| a.component_id.clone()).collect();
            let labels: Vec<&str> = component_ids
                .iter()
                .map(|id| label_of(components, id))
                .collect();
            found.push(Conflict {
                level: ConflictLevel::Error,
                message: format!(
                    "Pin {} is used by multiple components: {}",
                    pin_id,
                    labels.join(", ")
                ),
                component_ids,
                pin_ids: vec![pin_id.to_string()],
            });
        }
    }

    // I2C role pins of one component must share a bus.
    for assignment in assignments {
        let is_imu = components
            .iter()
            .any(|c| c.id == assignment.component_id && c.kind == ComponentKind::Mpu6050);
        let Some(pins) = assignment.pins.as_ref().filter(|_| is_imu) else {
            continue;
        };
        let (Some(sda_id), Some(scl_id)) = (pins.get("sda"), pins.get("scl")) else {
            continue;
        };
        let sda = board_pins.iter().find(|p| &p.id == sda_id);
        let scl = board_pins.iter().find(|p| &p.id == scl_id);
        if let (Some(sda), Some(scl)) = (sda, scl) {
            if sda.bus != scl.bus {
                found.push(Conflict {
                    level: ConflictLevel::Error,
                    message: format!(
                        "{} SDA and SCL pins must be on the same I2C bus",
                        label_of(components, &assignment.component_id)
                    ),
                    component_ids: vec![assignment.component_id.clone()],
                    pin_ids: vec![sda_id.clone(), scl_id.clone()],
                });
            }
        }
    }

    found
}

fn label_of<'a>(components: &'a [ComponentInstance], component_id: &'a str) -> &'a str {
    components
        .iter()
        .find(|c| c.id == component_id)
        .map(|c| c.label.as_str())
        .unwrap_or(component_id)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::board::board_pins;

    fn led(id: &str, label: &str) -> ComponentInstance {
        ComponentInstance {
            id: id.to_string(),
            kind: ComponentKind::Led,
            label: label.to_string(),
        }
    }

    fn single(id: &str, component_id: &str, pin_id: &str) -> Assignment {
        Assignment {
            id: id.to_string(),
            project_id: "p1".to_string(),
            component_id: component_id.to_string(),
            pin_id: Some(pin_id.to_string()),
            pins: None,
        }
    }

    #[test]
    fn test_compatibility() {
        let pins = board_pins("uno");
        let d13 = pins.iter().find(|p| p.id == "D13").unwrap();
        let a4 = pins.iter().find(|p| p.id == "A4").unwrap();

        assert!(is_compatible(ComponentKind::Led, d13, None));
        assert!(is_compatible(ComponentKind::Mpu6050, a4, Some("sda")));
        assert!(!is_compatible(ComponentKind::Mpu6050, d13, Some("sda")));
        assert!(!is_compatible(ComponentKind::Mpu6050, a4, Some("scl")));
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(required_roles(ComponentKind::Hcsr04), ["trigger", "echo"]);
        assert_eq!(required_roles(ComponentKind::Mpu6050), ["sda", "scl"]);
        assert!(required_roles(ComponentKind::Led).is_empty());
    }

    #[test]
    fn test_double_booked_pin() {
        let components = vec![led("c1", "RED"), led("c2", "GREEN")];
        let assignments = vec![single("a1", "c1", "D5"), single("a2", "c2", "D5")];

        let found = conflicts(&assignments, board_pins("uno"), &components);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].level, ConflictLevel::Error);
        assert_eq!(
            found[0].message,
            "Pin D5 is used by multiple components: RED, GREEN"
        );
        assert_eq!(found[0].pin_ids, ["D5"]);
    }

    #[test]
    fn test_i2c_bus_mismatch() {
        let components = vec![ComponentInstance {
            id: "c1".to_string(),
            kind: ComponentKind::Mpu6050,
            label: "IMU".to_string(),
        }];
        let mut pins = BTreeMap::new();
        pins.insert("sda".to_string(), "A4".to_string());
        pins.insert("scl".to_string(), "D13".to_string()); // SPI0, not I2C0
        let assignments = vec![Assignment {
            id: "a1".to_string(),
            project_id: "p1".to_string(),
            component_id: "c1".to_string(),
            pin_id: None,
            pins: Some(pins),
        }];

        let found = conflicts(&assignments, board_pins("uno"), &components);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            "IMU SDA and SCL pins must be on the same I2C bus"
        );
        assert_eq!(found[0].pin_ids, ["A4", "D13"]);
    }

    #[test]
    fn test_clean_assignments_have_no_conflicts() {
        let components = vec![led("c1", "RED"), led("c2", "GREEN")];
        let assignments = vec![single("a1", "c1", "D5"), single("a2", "c2", "D6")];
        assert!(conflicts(&assignments, board_pins("uno"), &components).is_empty());
    }
}
