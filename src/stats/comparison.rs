//! Pairwise size comparison of the open and closed implementations

use crate::core::types::TabularDataset;

/// Aggregates for the rows where one side is the strictly bigger one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideSummary {
    /// Fraction of all rows where this side strictly exceeds the other
    pub bigger_fraction: f64,
    /// Mean of (bigger/smaller − 1) over this side's winning rows
    pub average_excess: f64,
}

/// The two per-side aggregates for the open vs closed comparison.
///
/// The reference implementation is shown on charts only and never enters
/// this summary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComparisonSummary {
    /// Rows where the open-addressing value was bigger
    pub open: SideSummary,
    /// Rows where the closed-table value was bigger
    pub closed: SideSummary,
}

/// Compare the open and closed series of a dataset row by row.
///
/// Rows where the two values are exactly equal contribute to neither side.
/// An empty dataset yields all-zero aggregates rather than a division
/// fault.
pub fn compare_open_closed(dataset: &TabularDataset) -> ComparisonSummary {
    let mut open_ratios = Vec::new();
    let mut closed_ratios = Vec::new();

    for row in dataset.rows() {
        if row.open > row.closed {
            open_ratios.push(row.open / row.closed);
        } else if row.closed > row.open {
            closed_ratios.push(row.closed / row.open);
        }
        // exact ties land in neither bucket
    }

    ComparisonSummary {
        open: summarize_side(&open_ratios, dataset.len()),
        closed: summarize_side(&closed_ratios, dataset.len()),
    }
}

fn summarize_side(ratios: &[f64], total_rows: usize) -> SideSummary {
    if ratios.is_empty() || total_rows == 0 {
        return SideSummary::default();
    }

    let ratio_sum: f64 = ratios.iter().sum();
    SideSummary {
        bigger_fraction: ratios.len() as f64 / total_rows as f64,
        average_excess: ratio_sum / ratios.len() as f64 - 1.0,
    }
}
