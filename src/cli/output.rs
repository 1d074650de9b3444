//! Output formatting utilities

use crate::application::BalanceSummary;
use crate::domain::ReadMap;
use serde::Serialize;

/// Pretty JSON for display; serialization of plain records cannot fail
/// in practice, so errors degrade to `null`.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

/// Format a read map as `item  marker` lines
pub fn format_read_map(map: &ReadMap) -> String {
    if map.is_empty() {
        return "No items read".to_string();
    }

    let mut output = String::new();
    for (item, marker) in map {
        output.push_str(&format!("{}  {}\n", item, marker));
    }
    output
}

pub fn format_summary(summary: &BalanceSummary) -> String {
    format!(
        "opening  {:.2}\nincome   {:.2}\nexpense  {:.2}\ncurrent  {:.2}\n",
        summary.opening, summary.income, summary.expense, summary.current
    )
}
