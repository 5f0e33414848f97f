//! Due-date localization for export
//!
//! TickTick due dates arrive as millisecond-precision timestamps with a
//! numeric UTC offset, e.g. `2023-01-01T05:00:00.000+0000`. Todoist's CSV
//! import wants a bare calendar date in the task's own timezone, so the
//! instant is shifted into the task's IANA zone and the time of day dropped.

use crate::error::{ExportError, Result};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

/// Exact shape of a TickTick due-date string. Anything else is treated as
/// "no due date" rather than an error.
static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}[+-]\d{4}$")
        .expect("due date pattern is valid")
});

/// Convert a TickTick due-date string to a local calendar date
///
/// The wall-clock portion is read as UTC (TickTick emits the `+0000` offset
/// alongside a separate `timeZone` field, which is the one that matters),
/// converted into `tz`, and formatted as `YYYY-MM-DD`. A string that does
/// not match the due-date shape degrades to an empty string.
///
/// # Errors
/// Returns `ExportError::InvalidTimezone` if a due date is present and `tz`
/// is not a known IANA timezone identifier.
pub fn localize_due_date(due: &str, tz: &str) -> Result<String> {
    if !DUE_DATE_RE.is_match(due) {
        return Ok(String::new());
    }

    let zone: Tz = tz
        .parse()
        .map_err(|_| ExportError::invalid_timezone(tz))?;

    // The shape check above guarantees the offset parses; a residual
    // calendar impossibility like month 13 still degrades to "no due date".
    let Ok(parsed) = DateTime::parse_from_str(due, "%Y-%m-%dT%H:%M:%S%.3f%z") else {
        return Ok(String::new());
    };

    let utc = Utc.from_utc_datetime(&parsed.naive_local());
    Ok(utc.with_timezone(&zone).format("%Y-%m-%d").to_string())
}
