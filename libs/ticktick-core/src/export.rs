//! Todoist CSV row building from TickTick task lists
//!
//! Todoist and TickTick model subtasks differently: TickTick nests them
//! inside the parent record, the Todoist import format wants a flat row
//! sequence with an indent column. Flattening emits each parent followed
//! immediately by its children, children at indent 2, and everything else
//! about a row is derived field by field from the source task.

use crate::due_date::localize_due_date;
use crate::error::Result;
use crate::models::Task;
use crate::recurrence::naturalize;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Indent level for top-level tasks
pub const INDENT_TOP: u8 = 1;
/// Indent level for subtasks
pub const INDENT_SUB: u8 = 2;

/// A task paired with its indentation level after flattening
#[derive(Debug, Clone)]
pub struct FlatTask {
    pub task: Task,
    pub indent: u8,
}

/// One row of the Todoist CSV import format
///
/// Field order matches the column order Todoist expects; serde renames
/// supply the exact header names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoistRow {
    #[serde(rename = "TYPE")]
    pub row_type: String,
    #[serde(rename = "CONTENT")]
    pub content: String,
    #[serde(rename = "PRIORITY")]
    pub priority: u8,
    #[serde(rename = "INDENT")]
    pub indent: u8,
    #[serde(rename = "AUTHOR")]
    pub author: String,
    #[serde(rename = "RESPONSIBLE")]
    pub responsible: String,
    #[serde(rename = "DATE")]
    pub date: String,
    #[serde(rename = "DATE_LANG")]
    pub date_lang: String,
    #[serde(rename = "TIMEZONE")]
    pub timezone: String,
}

impl TodoistRow {
    /// Build one output row from a flattened task
    ///
    /// Notes fold into the content column ("title - notes") since the import
    /// format has no notes field. The date column combines the localized due
    /// date with the recurrence phrase; the timezone column stays empty
    /// because localization is already baked into the date.
    ///
    /// # Errors
    /// Returns an error if the task carries an invalid recurrence rule or an
    /// unknown timezone identifier.
    pub fn from_task(task: &Task, indent: u8) -> Result<Self> {
        let due = localize_due_date(task.due(), &task.time_zone)?;
        let repeat = naturalize(task.repeat())?;

        Ok(Self {
            row_type: "task".to_string(),
            content: compose_content(&task.title, task.notes()),
            priority: 1,
            indent,
            author: String::new(),
            responsible: String::new(),
            date: compose_date(&due, &repeat),
            date_lang: "en".to_string(),
            timezone: String::new(),
        })
    }
}

/// Flatten a two-level task tree into an ordered row sequence
///
/// Top-level order is preserved; a task's subtasks follow it immediately, in
/// their original order. An emitted parent carries no children of its own.
#[must_use]
pub fn flatten(tasks: &[Task]) -> Vec<FlatTask> {
    let mut flat = Vec::new();
    for task in tasks {
        if task.items.is_empty() {
            flat.push(FlatTask {
                task: task.clone(),
                indent: INDENT_TOP,
            });
        } else {
            flat.push(FlatTask {
                task: task.without_items(),
                indent: INDENT_TOP,
            });
            for item in &task.items {
                flat.push(FlatTask {
                    task: item.clone(),
                    indent: INDENT_SUB,
                });
            }
        }
    }
    flat
}

/// Convert one project's task list into Todoist CSV rows
///
/// # Errors
/// Returns the first recurrence or timezone error encountered; missing
/// optional fields never fail.
pub fn to_rows(tasks: &[Task]) -> Result<Vec<TodoistRow>> {
    flatten(tasks)
        .iter()
        .map(|flat| TodoistRow::from_task(&flat.task, flat.indent))
        .collect()
}

/// Write rows as CSV, header first, with RFC 4180 quoting
///
/// # Errors
/// Returns an error if serialization or the underlying writer fails.
pub fn write_csv<W: Write>(rows: &[TodoistRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn compose_content(title: &str, notes: &str) -> String {
    if notes.is_empty() {
        title.to_string()
    } else {
        format!("{title} - {notes}")
    }
}

fn compose_date(due: &str, repeat: &str) -> String {
    match (due.is_empty(), repeat.is_empty()) {
        (false, false) => format!("{due} {repeat}"),
        (false, true) => due.to_string(),
        (true, false) => repeat.to_string(),
        (true, true) => String::new(),
    }
}
