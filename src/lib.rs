//! benchplot - compare hash-table benchmark results and render charts
//!
//! This crate ingests benchmark measurements for three hash-table
//! implementations (a `dense_hash_map`-style reference, a second
//! open-addressing variant, and a chained "close table"), computes pairwise
//! size statistics, and renders comparison charts as PNG images.
//!
//! The pipeline is strictly sequential: an input file is loaded into an
//! in-memory dataset, the statistics and the charts are produced from that
//! dataset, and the process exits. There is no shared mutable state and no
//! background work.

pub mod config;
pub mod core;
pub mod ingest;
pub mod render;
pub mod reporting;
pub mod stats;
pub mod ui;

// Re-export commonly used items at the crate root
pub use crate::config::Config;
pub use crate::core::error::{BenchPlotError, Result};
pub use crate::core::types::{
    Implementation, MeasurementRow, ReportKind, ScenarioSeries, SpeedReport, SpeedSeries,
    TabularDataset,
};
