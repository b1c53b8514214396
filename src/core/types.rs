use std::collections::BTreeMap;
use std::fmt;

use crate::core::constants::{implementations, report_kinds};

/// The three hash-table implementations under comparison.
///
/// The reference implementation is shown on charts for visual comparison but
/// is excluded from the numeric summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Implementation {
    /// `dense_hash_map`-style open-addressing reference table
    Dense,
    /// Open-addressing table
    Open,
    /// Chained ("close") table
    Closed,
}

impl Implementation {
    /// All implementations, in rendering order (reference first so the
    /// colored curves are drawn on top of the gray baseline).
    pub const ALL: [Implementation; 3] = [
        Implementation::Dense,
        Implementation::Open,
        Implementation::Closed,
    ];

    /// Key naming this implementation in speed-report input
    pub fn key(self) -> &'static str {
        match self {
            Implementation::Dense => implementations::DENSE_KEY,
            Implementation::Open => implementations::OPEN_KEY,
            Implementation::Closed => implementations::CLOSED_KEY,
        }
    }

    /// Human-readable legend label for this implementation
    pub fn label(self) -> &'static str {
        match self {
            Implementation::Dense => implementations::DENSE_LABEL,
            Implementation::Open => implementations::OPEN_LABEL,
            Implementation::Closed => implementations::CLOSED_LABEL,
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One measured table size: an entry count paired with one value per
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    /// Number of entries in the tables when the measurement was taken
    pub entries: f64,
    /// Measured value for the reference implementation
    pub dense: f64,
    /// Measured value for the open-addressing implementation
    pub open: f64,
    /// Measured value for the chained implementation
    pub closed: f64,
}

impl MeasurementRow {
    /// Measured value for the given implementation
    pub fn value(&self, implementation: Implementation) -> f64 {
        match implementation {
            Implementation::Dense => self.dense,
            Implementation::Open => self.open,
            Implementation::Closed => self.closed,
        }
    }
}

/// An ordered sequence of measurement rows sharing one index domain.
///
/// Constructed once by the tabular loader and immutable afterwards; both the
/// statistics and the memory chart consume it read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    rows: Vec<MeasurementRow>,
}

impl TabularDataset {
    pub fn new(rows: Vec<MeasurementRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (entries, value) points for one implementation's curve
    pub fn series_points(&self, implementation: Implementation) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.entries, row.value(implementation)))
            .collect()
    }
}

/// An ordered sequence of (operation count, elapsed seconds) pairs for one
/// implementation under one scenario. Throughput is derived, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedSeries {
    points: Vec<(f64, f64)>,
}

impl SpeedSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Raw (operations, elapsed seconds) measurement pairs
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// (operations, operations/second) pairs.
    ///
    /// Pairs with a non-positive elapsed time have no finite throughput and
    /// are dropped.
    pub fn throughput_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|(_, elapsed)| *elapsed > 0.0)
            .map(|(operations, elapsed)| (*operations, operations / elapsed))
            .collect()
    }

    /// Largest derived throughput in this series, 0 when none is finite
    pub fn max_throughput(&self) -> f64 {
        self.throughput_points()
            .iter()
            .map(|(_, throughput)| *throughput)
            .filter(|throughput| throughput.is_finite())
            .fold(0.0_f64, f64::max)
    }
}

/// The three required speed series of one benchmark scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioSeries {
    pub dense: SpeedSeries,
    pub open: SpeedSeries,
    pub closed: SpeedSeries,
}

impl ScenarioSeries {
    /// Series for the given implementation
    pub fn series(&self, implementation: Implementation) -> &SpeedSeries {
        match implementation {
            Implementation::Dense => &self.dense,
            Implementation::Open => &self.open,
            Implementation::Closed => &self.closed,
        }
    }

    /// Largest derived throughput across all three series
    pub fn max_throughput(&self) -> f64 {
        Implementation::ALL
            .iter()
            .map(|implementation| self.series(*implementation).max_throughput())
            .fold(0.0_f64, f64::max)
    }
}

/// A mapping from scenario name to that scenario's three speed series.
///
/// Scenarios are kept in a `BTreeMap` so chart files are produced in a
/// deterministic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedReport {
    scenarios: BTreeMap<String, ScenarioSeries>,
}

impl SpeedReport {
    pub fn new(scenarios: BTreeMap<String, ScenarioSeries>) -> Self {
        Self { scenarios }
    }

    pub fn scenarios(&self) -> impl Iterator<Item = (&str, &ScenarioSeries)> {
        self.scenarios
            .iter()
            .map(|(name, series)| (name.as_str(), series))
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioSeries> {
        self.scenarios.get(name)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Which memory framing a tabular dataset represents.
///
/// The two framings are structurally identical; the kind only selects the
/// title and y-axis text of the rendered chart. It is an explicit parameter
/// rather than something inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Bytes of memory allocated
    MemoryAllocated,
    /// Bytes of memory written
    MemoryWritten,
}

impl ReportKind {
    /// Chart title for this framing
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::MemoryAllocated => report_kinds::ALLOCATED_TITLE,
            ReportKind::MemoryWritten => report_kinds::WRITTEN_TITLE,
        }
    }

    /// Y-axis label for this framing
    pub fn y_label(self) -> &'static str {
        match self {
            ReportKind::MemoryAllocated => report_kinds::ALLOCATED_Y_LABEL,
            ReportKind::MemoryWritten => report_kinds::WRITTEN_Y_LABEL,
        }
    }

    /// Parse a CLI kind value (`allocated` / `written`)
    pub fn from_cli_value(value: &str) -> Option<Self> {
        match value {
            report_kinds::ALLOCATED => Some(ReportKind::MemoryAllocated),
            report_kinds::WRITTEN => Some(ReportKind::MemoryWritten),
            _ => None,
        }
    }

    /// Infer the framing from one of the known upstream harness file names
    pub fn from_known_file_name(file_name: &str) -> Option<Self> {
        match file_name {
            report_kinds::ALLOCATED_SOURCE_FILE => Some(ReportKind::MemoryAllocated),
            report_kinds::WRITTEN_SOURCE_FILE => Some(ReportKind::MemoryWritten),
            _ => None,
        }
    }
}
