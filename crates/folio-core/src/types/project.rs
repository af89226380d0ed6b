//! Project detail records shown in the project modal.

use serde::{Deserialize, Serialize};

/// Pre-rendered detail markup for one project.
///
/// Owned by the page content; the modal only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetailRecord {
    pub project_id: String,
    /// HTML fragment copied into the modal content area
    pub markup: String,
}

impl ProjectDetailRecord {
    pub fn new(project_id: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            markup: markup.into(),
        }
    }
}
