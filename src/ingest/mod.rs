//! Benchmark input ingestion
//!
//! This module handles parsing the two benchmark-result encodings:
//! whitespace-delimited memory tables and JSON speed reports. Both loaders
//! are pure text-to-dataset functions with thin file-reading wrappers.

pub mod speed;
pub mod tabular;

// Re-export commonly used items
pub use speed::{load_speed_file, parse_speed_report};
pub use tabular::{load_tabular_file, parse_tabular};
