//! Project snapshot model and the store seam.
//!
//! The compiler never reaches into ambient application state. It reads
//! one project through the [`ProjectStore`] trait and derives a
//! per-build context snapshot from it; the surrounding product owns all
//! mutation. [`InMemoryProjectStore`] exists so the compiler can be
//! driven (and tested) without standing up the full application.

pub mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kinds of components a project can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Single LED
    #[serde(rename = "LED")]
    Led,
    /// Momentary push button
    Button,
    /// WS2812 addressable LED strip
    #[serde(rename = "WS2812")]
    Ws2812,
    /// Piezo buzzer
    Buzzer,
    /// HC-SR04 ultrasonic distance sensor
    #[serde(rename = "HCSR04")]
    Hcsr04,
    /// MPU-6050 6-axis IMU
    #[serde(rename = "MPU6050")]
    Mpu6050,
}

/// A component instance placed in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    /// Stable instance id
    pub id: String,
    /// What the component is
    pub kind: ComponentKind,
    /// User-chosen label, referenced from behavior DSL pin tokens
    pub label: String,
}

/// Binding of a component instance to one or more physical pins.
///
/// Single-pin components use `pin_id`; multi-pin components use the
/// role map (`pins`) instead. The two are mutually exclusive in
/// practice but the snapshot format does not enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Stable assignment id
    pub id: String,
    /// Owning project
    pub project_id: String,
    /// Component instance this assignment binds
    pub component_id: String,
    /// Single-pin assignment target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_id: Option<String>,
    /// Role name to pin id, for multi-pin components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pins: Option<BTreeMap<String, String>>,
}

/// One project as the external store snapshots it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable project id
    pub id: String,
    /// Project name
    pub name: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Selected target board, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    /// Last saved behavior DSL text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior_dsl: Option<String>,
    /// Placed component instances
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
    /// Component pin assignments
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Project {
    /// Create an empty project with no board selected.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            board_id: None,
            behavior_dsl: None,
            components: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// The label of a component instance, falling back to its id when
    /// the instance is missing from the snapshot.
    pub fn component_label<'a>(&'a self, component_id: &'a str) -> &'a str {
        self.components
            .iter()
            .find(|c| c.id == component_id)
            .map(|c| c.label.as_str())
            .unwrap_or(component_id)
    }
}

/// Read-only lookup seam between the compiler and the project store.
pub trait ProjectStore {
    /// Fetch a project snapshot by id.
    fn project(&self, id: &str) -> Option<&Project>;
}

/// A plain in-memory project store.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: Vec<Project>,
}

impl InMemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project, replacing any existing project with the same id.
    pub fn insert(&mut self, project: Project) {
        self.projects.retain(|p| p.id != project.id);
        self.projects.push(project);
    }

    /// Select a board for a project. No-op for unknown projects.
    pub fn select_board(&mut self, project_id: &str, board_id: &str) {
        if let Some(p) = self.project_mut(project_id) {
            p.board_id = Some(board_id.to_string());
        }
    }

    /// Place a component instance in a project.
    pub fn add_component(&mut self, project_id: &str, component: ComponentInstance) {
        if let Some(p) = self.project_mut(project_id) {
            p.components.push(component);
        }
    }

    /// Record a pin assignment in a project.
    pub fn assign(&mut self, project_id: &str, assignment: Assignment) {
        if let Some(p) = self.project_mut(project_id) {
            p.assignments.push(assignment);
        }
    }

    fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Snapshot file format: a list of projects.
#[cfg(any(feature = "cli", feature = "wasm"))]
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    projects: Vec<Project>,
}

#[cfg(any(feature = "cli", feature = "wasm"))]
impl InMemoryProjectStore {
    /// Load a store from a JSON snapshot (`{"projects": [...]}`).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let snapshot: SnapshotFile = serde_json::from_str(json)?;
        Ok(Self {
            projects: snapshot.projects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut store = InMemoryProjectStore::new();
        store.insert(Project::new("p1", "Blinker"));
        store.select_board("p1", "uno");

        let project = store.project("p1").unwrap();
        assert_eq!(project.board_id.as_deref(), Some("uno"));
        assert!(store.project("p2").is_none());
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut store = InMemoryProjectStore::new();
        store.insert(Project::new("p1", "First"));
        store.insert(Project::new("p1", "Second"));
        assert_eq!(store.project("p1").unwrap().name, "Second");
    }

    #[test]
    fn test_component_label_fallback() {
        let mut project = Project::new("p1", "Blinker");
        project.components.push(ComponentInstance {
            id: "c1".to_string(),
            kind: ComponentKind::Led,
            label: "RED".to_string(),
        });
        assert_eq!(project.component_label("c1"), "RED");
        assert_eq!(project.component_label("c9"), "c9");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_snapshot_round_trip() {
        let json = r#"{
            "projects": [{
                "id": "p1",
                "name": "Blinker",
                "boardId": "uno",
                "components": [{"id": "c1", "kind": "LED", "label": "RED"}],
                "assignments": [{
                    "id": "a1",
                    "projectId": "p1",
                    "componentId": "c1",
                    "pinId": "D5"
                }]
            }]
        }"#;
        let store = InMemoryProjectStore::from_json(json).unwrap();
        let project = store.project("p1").unwrap();
        assert_eq!(project.board_id.as_deref(), Some("uno"));
        assert_eq!(project.components[0].kind, ComponentKind::Led);
        assert_eq!(project.assignments[0].pin_id.as_deref(), Some("D5"));

        // Field names survive a trip back out.
        let out = serde_json::to_string(project).unwrap();
        assert!(out.contains("\"boardId\":\"uno\""));
        assert!(out.contains("\"pinId\":\"D5\""));
        assert!(!out.contains("\"description\""));
    }
}
