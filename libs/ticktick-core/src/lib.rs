//! TickTick Core - models, API client, and Todoist CSV row building
//!
//! This library backs the `ticktick-export` CLI: it fetches hierarchical
//! task records from the TickTick v2 API and transforms them into the CSV
//! row format Todoist's importer understands.
//!
//! The interesting work is the transformation pipeline:
//!
//! - **Recurrence phrasing**: `RRULE:` strings become natural-language
//!   phrases ("on the 1st Saturday of every month")
//! - **Due-date localization**: UTC timestamps become calendar dates in the
//!   task's own timezone
//! - **Flattening**: the two-level task/subtask tree becomes a flat row
//!   sequence with indent markers
//!
//! # Quick Start
//!
//! ```no_run
//! use ticktick_core::{ExportConfig, TickTickClient};
//!
//! # fn example() -> ticktick_core::Result<()> {
//! let config = ExportConfig::default();
//! let client = TickTickClient::login(&config, "someone@example.com", "secret")?;
//!
//! let tasks = client.inbox_tasks()?;
//! let rows = ticktick_core::to_rows(&tasks)?;
//! println!("Inbox flattens into {} rows", rows.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Features
//!
//! - `test-utils`: Enable mock data builders (for testing only)

pub mod client;
pub mod config;
pub mod due_date;
pub mod error;
pub mod export;
pub mod models;
pub mod recurrence;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::TickTickClient;
pub use config::{ExportConfig, DEFAULT_BASE_URL};
pub use due_date::localize_due_date;
pub use error::{ExportError, Result};
pub use export::{flatten, to_rows, write_csv, FlatTask, TodoistRow, INDENT_SUB, INDENT_TOP};
pub use models::{Project, Task};
pub use recurrence::{naturalize, ordinalize, weekday_name};
