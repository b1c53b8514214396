//! Textual comparison summary

use crate::stats::comparison::{ComparisonSummary, SideSummary};

/// Format the two human-readable comparison lines for a memory report.
///
/// Implementation 1 is the open-addressing side, Implementation 2 the
/// closed-table side; both percentages are rendered with one decimal place.
pub fn summary_lines(summary: &ComparisonSummary) -> [String; 2] {
    [
        format_side(1, &summary.open),
        format_side(2, &summary.closed),
    ]
}

fn format_side(number: u8, side: &SideSummary) -> String {
    format!(
        "Implementation {number} takes up more space {:.1}% of the time, by {:.1}%",
        side.bigger_fraction * 100.0,
        side.average_excess * 100.0
    )
}
