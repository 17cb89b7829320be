//! Ranks suggestions into chart-ready records by weekly hours saved.

use std::cmp::Ordering;

use crate::suggest::{parse_weekly_hours, ChartRecord, Suggestion};

/// Maps suggestions to [`ChartRecord`]s sorted descending by hours saved.
///
/// Suggestions whose benefit text yields zero hours are dropped. The sort is
/// stable: ties keep their original relative order. Pure function; empty
/// input yields empty output.
#[must_use]
pub fn rank(suggestions: &[Suggestion]) -> Vec<ChartRecord> {
    let mut records: Vec<ChartRecord> = suggestions
        .iter()
        .map(|s| ChartRecord {
            area: s.area.clone(),
            hours_saved: parse_weekly_hours(&s.benefit),
        })
        .filter(|r| r.hours_saved > 0.0)
        .collect();

    // Parsed hours are always finite, so the fallback never fires.
    records.sort_by(|a, b| {
        b.hours_saved.partial_cmp(&a.hours_saved).unwrap_or(Ordering::Equal)
    });
    records
}
