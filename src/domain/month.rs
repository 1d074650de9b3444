//! Year-month helpers used for dues schedules

use crate::error::{LedgerError, Result};
use chrono::{Datelike, Local, NaiveDate};

/// Current local month as `YYYY-MM`
pub fn current_month() -> String {
    format_month(Local::now().date_naive())
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Parse a `YYYY-MM` string into the first day of that month
pub fn parse_month(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    // Reject "2025-1" and similar; the stored form is always zero padded
    if trimmed.len() != 7 {
        return Err(LedgerError::InvalidMonth(input.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidMonth(input.to_string()))
}

/// Number of billable months from `start` through `end`, both inclusive.
/// Zero when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let index = |d: NaiveDate| d.year() as i64 * 12 + d.month0() as i64;
    let span = index(end) - index(start) + 1;
    span.max(0) as u32
}
