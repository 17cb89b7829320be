//! Terminal bar chart for ranked hours-saved records.

use std::fmt::Write as _;

use crate::suggest::ChartRecord;

/// Maximum label length before truncation.
pub const MAX_LABEL_CHARS: usize = 20;

/// Width in cells of the longest bar.
const BAR_WIDTH: usize = 40;

/// Label column width: the longest truncated label plus its ellipsis.
const LABEL_COLUMN: usize = MAX_LABEL_CHARS + 3;

/// Truncates a chart label to [`MAX_LABEL_CHARS`], appending an ellipsis.
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let cut: String = label.chars().take(MAX_LABEL_CHARS).collect();
        format!("{cut}...")
    }
}

/// Renders records as a horizontal text bar chart, one line per record.
///
/// Bars are scaled to the largest value. Empty input renders an empty
/// string. Labels are truncated before display.
#[must_use]
pub fn render(records: &[ChartRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let max = records.iter().map(|r| r.hours_saved).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for record in records {
        let filled = if max > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            #[allow(clippy::cast_precision_loss)]
            let cells = ((record.hours_saved / max) * BAR_WIDTH as f64).round() as usize;
            cells.max(1)
        } else {
            1
        };
        let _ = writeln!(
            out,
            "{:<LABEL_COLUMN$} | {} {:.1} h/week",
            truncate_label(&record.area),
            "#".repeat(filled),
            record.hours_saved
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_label("emails"), "emails");
    }

    #[test]
    fn exactly_twenty_chars_is_kept() {
        let label = "a".repeat(20);
        assert_eq!(truncate_label(&label), label);
    }

    #[test]
    fn long_labels_are_cut_with_ellipsis() {
        let label = "weekly status report generation";
        let truncated = truncate_label(label);
        assert_eq!(truncated, "weekly status report...");
        assert_eq!(truncated.chars().count(), 23);
    }

    #[test]
    fn empty_records_render_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn largest_value_gets_the_full_bar() {
        let records = vec![
            ChartRecord { area: "big".into(), hours_saved: 10.0 },
            ChartRecord { area: "small".into(), hours_saved: 5.0 },
        ];
        let chart = render(&records);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&"#".repeat(40)));
        assert!(lines[0].contains("10.0 h/week"));
        assert!(lines[1].contains(&"#".repeat(20)));
        assert!(!lines[1].contains(&"#".repeat(21)));
    }

    #[test]
    fn bar_columns_align_for_short_and_truncated_labels() {
        let records = vec![
            ChartRecord { area: "ci".into(), hours_saved: 4.0 },
            ChartRecord {
                area: "weekly status report generation".into(),
                hours_saved: 2.0,
            },
        ];
        let chart = render(&records);
        let separators: Vec<usize> =
            chart.lines().map(|line| line.find(" | ").unwrap()).collect();
        assert_eq!(separators[0], separators[1]);
        assert_eq!(separators[0], MAX_LABEL_CHARS + 3);
    }

    #[test]
    fn tiny_values_still_get_one_cell() {
        let records = vec![
            ChartRecord { area: "huge".into(), hours_saved: 100.0 },
            ChartRecord { area: "tiny".into(), hours_saved: 0.1 },
        ];
        let chart = render(&records);
        let tiny_line = chart.lines().nth(1).unwrap();
        assert!(tiny_line.contains('#'));
    }
}
