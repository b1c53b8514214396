//! Chart rendering
//!
//! This module renders the comparison charts with plotters. Every chart is
//! an explicit per-chart context: its drawing area is constructed, drawn,
//! and finalized within a single call, so figures can never contaminate
//! each other's curves.

pub mod memory;
pub mod speed;
pub mod style;

// Re-export commonly used items
pub use memory::render_memory_chart;
pub use speed::render_speed_charts;

use crate::core::error::BenchPlotError;

/// Convert a charting backend error into the crate error type.
///
/// plotters errors are generic over the drawing backend, so they are
/// stringified at this boundary instead of being carried in the enum.
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> BenchPlotError {
    BenchPlotError::Render(err.to_string())
}
