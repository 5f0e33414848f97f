//! Test utilities and mock data for export tests

use crate::models::{Project, Task};

/// Create a bare task with only a title set
#[must_use]
pub fn mock_task(title: &str) -> Task {
    Task {
        id: format!("task-{title}"),
        project_id: "project-1".to_string(),
        title: title.to_string(),
        content: None,
        due_date: None,
        time_zone: "UTC".to_string(),
        repeat_flag: None,
        items: Vec::new(),
    }
}

/// Create a representative mixed task list
///
/// Covers the shapes an export run sees: a plain task, a task with notes,
/// a scheduled recurring task, and a parent with two subtasks.
#[must_use]
pub fn create_mock_tasks() -> Vec<Task> {
    let plain = mock_task("Water plants");

    let with_notes = Task {
        content: Some("renew before March".to_string()),
        ..mock_task("Update passport")
    };

    let scheduled = Task {
        due_date: Some("2023-06-15T18:00:00.000+0000".to_string()),
        time_zone: "America/Chicago".to_string(),
        repeat_flag: Some("RRULE:FREQ=WEEKLY;INTERVAL=1".to_string()),
        ..mock_task("Take out recycling")
    };

    let parent = Task {
        items: vec![mock_task("Book flights"), mock_task("Reserve hotel")],
        ..mock_task("Plan trip")
    };

    vec![plain, with_notes, scheduled, parent]
}

/// Create a small owned/shared/archived project mix
#[must_use]
pub fn create_mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-1".to_string(),
            name: "Home".to_string(),
            is_owner: true,
            closed: None,
        },
        Project {
            id: "project-2".to_string(),
            name: "Team board".to_string(),
            is_owner: false,
            closed: None,
        },
        Project {
            id: "project-3".to_string(),
            name: "2019 move".to_string(),
            is_owner: true,
            closed: Some(true),
        },
    ]
}
