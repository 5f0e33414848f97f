//! Data models for TickTick API entities

use serde::{Deserialize, Serialize};

/// Main task entity as returned by the TickTick v2 API
///
/// Subtasks arrive nested in `items` and share this shape. Only one level of
/// nesting is meaningful for export; anything deeper is never descended into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    #[serde(default)]
    pub id: String,
    /// Owning project identifier
    #[serde(default)]
    pub project_id: String,
    /// Task title
    pub title: String,
    /// Optional notes
    #[serde(default)]
    pub content: Option<String>,
    /// Due date in TickTick timestamp format, e.g. `2023-01-01T05:00:00.000+0000`
    #[serde(default)]
    pub due_date: Option<String>,
    /// IANA timezone identifier the task was scheduled in
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Recurrence rule, e.g. `RRULE:FREQ=WEEKLY;INTERVAL=2`
    #[serde(default)]
    pub repeat_flag: Option<String>,
    /// Nested subtasks
    #[serde(default)]
    pub items: Vec<Task>,
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

impl Task {
    /// Copy of this task with the subtask list cleared
    ///
    /// Used when flattening: the emitted parent row carries no children of
    /// its own, the children follow as separate rows.
    #[must_use]
    pub fn without_items(&self) -> Self {
        Self {
            items: Vec::new(),
            ..self.clone()
        }
    }

    /// Notes text, empty string when absent
    #[must_use]
    pub fn notes(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Due date string, empty string when absent
    #[must_use]
    pub fn due(&self) -> &str {
        self.due_date.as_deref().unwrap_or("")
    }

    /// Recurrence rule string, empty string when absent
    #[must_use]
    pub fn repeat(&self) -> &str {
        self.repeat_flag.as_deref().unwrap_or("")
    }
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Display name; also used as the output file stem
    pub name: String,
    /// Whether the authenticated user owns this project
    #[serde(default)]
    pub is_owner: bool,
    /// Whether the project has been archived
    #[serde(default)]
    pub closed: Option<bool>,
}

impl Project {
    /// Whether this project should be included in an export run
    #[must_use]
    pub fn is_exportable(&self) -> bool {
        self.is_owner && !self.closed.unwrap_or(false)
    }
}
