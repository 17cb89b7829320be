//! Automation suggestions: data model, benefit parsing, ranking, prompts.

pub mod benefit;
pub mod prompt;
pub mod rank;

use serde::{Deserialize, Serialize};

pub use benefit::parse_weekly_hours;
pub use rank::rank;

/// A single automation suggestion returned by the AI service.
///
/// Immutable once parsed from the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// The part of the user's work being automated.
    pub area: String,
    /// A specific tool or service to use.
    pub tool: String,
    /// Free-text description of the time saved (e.g. "Saves 2 hours per day").
    pub benefit: String,
    /// Ordered setup steps.
    pub steps: Vec<String>,
}

/// A chart-ready record derived from a [`Suggestion`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    /// Suggestion area, used as the bar label.
    pub area: String,
    /// Estimated hours saved per week; always non-negative.
    pub hours_saved: f64,
}
