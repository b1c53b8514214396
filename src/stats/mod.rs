//! Comparative statistics
//!
//! This module computes the pairwise "who is bigger and by how much"
//! summary over a memory dataset.

pub mod comparison;

// Re-export commonly used items
pub use comparison::{ComparisonSummary, SideSummary, compare_open_closed};
