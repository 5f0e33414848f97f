//! Natural-language phrasing of TickTick recurrence rules
//!
//! TickTick stores repetition as an iCalendar-style `RRULE:` string, e.g.
//! `RRULE:FREQ=MONTHLY;INTERVAL=1;BYDAY=1SA`. Todoist's CSV import expects a
//! plain English phrase instead ("on the 1st Saturday of every month"), so
//! the rule grammar is re-rendered here. Only the small grammar TickTick
//! actually emits is handled; this is not a general recurrence engine.

use crate::error::{ExportError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Prefix marking a recurrence rule string
const RULE_MARKER: &str = "RRULE:";

/// Optional leading ordinal (nth weekday of month) plus a weekday code.
/// A comma-separated list of weekdays does not match and is rejected.
static BYDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([1-5])?([A-Z]{2})$").expect("BYDAY pattern is valid"));

/// English ordinal form of an integer
///
/// Uses the simplified suffix rule carried over from the original exporter:
/// 1st, 2nd, 3rd, everything else "th". 21 renders as "21th"; ordinals that
/// large never occur in the supported grammar, so the exceptions for
/// 11/12/13 and 21+ are deliberately not handled.
#[must_use]
pub fn ordinalize(number: u32) -> String {
    match number {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{number}th"),
    }
}

/// Full English weekday name for a two-letter RRULE weekday code
///
/// # Errors
/// Returns `ExportError::InvalidRecurrence` for an unknown code.
pub fn weekday_name(code: &str) -> Result<&'static str> {
    match code {
        "MO" => Ok("Monday"),
        "TU" => Ok("Tuesday"),
        "WE" => Ok("Wednesday"),
        "TH" => Ok("Thursday"),
        "FR" => Ok("Friday"),
        "SA" => Ok("Saturday"),
        "SU" => Ok("Sunday"),
        _ => Err(ExportError::invalid_recurrence(
            code,
            "unknown weekday code",
        )),
    }
}

/// Render a recurrence rule as a natural-language phrase
///
/// A string without the leading `RRULE:` marker carries no recurrence and
/// produces an empty phrase. Recognized clauses:
///
/// - `FREQ` (required): DAILY, WEEKLY, MONTHLY, or YEARLY
/// - `INTERVAL` (default 1): "every week" vs "every 2 weeks"
/// - `BYDAY` (optional): with a leading ordinal, "on the 1st Saturday of
///   every month"; a bare weekday code adds nothing to the phrase
///
/// # Errors
/// Returns `ExportError::InvalidRecurrence` for a malformed clause, a
/// missing or unrecognized `FREQ`, a non-positive `INTERVAL`, or an
/// unsupported `BYDAY` shape (including multi-day lists).
pub fn naturalize(rule: &str) -> Result<String> {
    let Some(body) = rule.strip_prefix(RULE_MARKER) else {
        return Ok(String::new());
    };

    let mut clauses = HashMap::new();
    for clause in body.split(';') {
        let (key, value) = clause.split_once('=').ok_or_else(|| {
            ExportError::invalid_recurrence(rule, format!("clause '{clause}' is not KEY=VALUE"))
        })?;
        clauses.insert(key, value);
    }

    let noun = match clauses.get("FREQ").copied() {
        Some("DAILY") => "day",
        Some("WEEKLY") => "week",
        Some("MONTHLY") => "month",
        Some("YEARLY") => "year",
        Some(other) => {
            return Err(ExportError::invalid_recurrence(
                rule,
                format!("unrecognized FREQ '{other}'"),
            ))
        }
        None => return Err(ExportError::invalid_recurrence(rule, "missing FREQ")),
    };

    let interval: u32 = match clauses.get("INTERVAL") {
        Some(raw) => raw.parse().map_err(|_| {
            ExportError::invalid_recurrence(
                rule,
                format!("INTERVAL '{raw}' is not a positive integer"),
            )
        })?,
        None => 1,
    };
    if interval == 0 {
        return Err(ExportError::invalid_recurrence(rule, "INTERVAL must be positive"));
    }

    let period = if interval > 1 {
        format!("every {interval} {noun}s")
    } else {
        format!("every {noun}")
    };

    let Some(byday) = clauses.get("BYDAY").copied() else {
        return Ok(period);
    };

    let caps = BYDAY_RE.captures(byday).ok_or_else(|| {
        ExportError::invalid_recurrence(rule, format!("unsupported BYDAY '{byday}'"))
    })?;

    // A leading digit means the nth weekday of the period, e.g. "1SA".
    // A bare code like "SA" means the weekly anchor day, which the period
    // phrase already expresses.
    match caps.get(1) {
        Some(ordinal) => {
            let nth: u32 = ordinal.as_str().parse().map_err(|_| {
                ExportError::invalid_recurrence(rule, "BYDAY ordinal is not a digit")
            })?;
            let weekday = weekday_name(&caps[2])?;
            Ok(format!(
                "on the {} {} of {}",
                ordinalize(nth),
                weekday,
                period
            ))
        }
        None => Ok(period),
    }
}
