//! Sprint configuration document, the persisted state of one sprint.

use super::Workstream;
use serde::{Deserialize, Serialize};

/// The sprint store document: one active sprint per project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintConfig {
    /// Sprint name, derived from the backlog file stem
    pub sprint: String,
    /// Ordered workstream records
    pub workstreams: Vec<Workstream>,
}

impl SprintConfig {
    pub fn new(sprint: impl Into<String>, workstreams: Vec<Workstream>) -> Self {
        Self {
            sprint: sprint.into(),
            workstreams,
        }
    }

    /// Find a workstream by name
    pub fn workstream(&self, name: &str) -> Option<&Workstream> {
        self.workstreams.iter().find(|ws| ws.name == name)
    }

    /// Find a workstream by name, mutably
    pub fn workstream_mut(&mut self, name: &str) -> Option<&mut Workstream> {
        self.workstreams.iter_mut().find(|ws| ws.name == name)
    }

    /// All workstream names, in store order
    pub fn names(&self) -> Vec<String> {
        self.workstreams.iter().map(|ws| ws.name.clone()).collect()
    }
}
