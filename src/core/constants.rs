/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Implementation key and label constants
pub mod implementations {
    /// Input key for the `dense_hash_map` reference implementation
    pub const DENSE_KEY: &str = "DenseTable";
    /// Input key for the open-addressing implementation
    pub const OPEN_KEY: &str = "OpenTable";
    /// Input key for the chained (closed) implementation
    pub const CLOSED_KEY: &str = "CloseTable";

    /// Legend label for the reference implementation
    pub const DENSE_LABEL: &str = "dense_hash_map (open addressing)";
    /// Legend label for the open-addressing implementation
    pub const OPEN_LABEL: &str = "open addressing";
    /// Legend label for the chained implementation
    pub const CLOSED_LABEL: &str = "Close table";

    /// Implementation keys every speed-report scenario must provide
    pub const REQUIRED_KEYS: [&str; 3] = [DENSE_KEY, OPEN_KEY, CLOSED_KEY];
}

/// Memory report kind constants
pub mod report_kinds {
    /// Report kind covering bytes allocated
    pub const ALLOCATED: &str = "allocated";
    /// Report kind covering bytes written
    pub const WRITTEN: &str = "written";

    /// All valid report kinds
    pub const ALL: [&str; 2] = [ALLOCATED, WRITTEN];

    /// Chart title for the allocated framing
    pub const ALLOCATED_TITLE: &str = "Memory allocated (log/log plot)";
    /// Y-axis label for the allocated framing
    pub const ALLOCATED_Y_LABEL: &str = "bytes of memory allocated";
    /// Chart title for the written framing
    pub const WRITTEN_TITLE: &str = "Memory written (log/log plot)";
    /// Y-axis label for the written framing
    pub const WRITTEN_Y_LABEL: &str = "bytes of memory written";
    /// Shared x-axis label for both framings
    pub const X_LABEL: &str = "number of entries";

    /// Upstream harness file name the allocated framing is inferred from
    pub const ALLOCATED_SOURCE_FILE: &str = "figure-1-data.txt";
    /// Upstream harness file name the written framing is inferred from
    pub const WRITTEN_SOURCE_FILE: &str = "figure-2-data.txt";
}

/// Speed report constants
pub mod speed {
    /// X-axis label for scenario throughput charts
    pub const X_LABEL: &str = "number of operations";
    /// Y-axis label for scenario throughput charts
    pub const Y_LABEL: &str = "speed (operations/second)";
    /// Fixed y-axis headroom above the maximum observed throughput
    pub const HEADROOM_FACTOR: f64 = 1.2;
    /// Suffix appended to a scenario name to form its output file name
    pub const FILE_SUFFIX: &str = "-speed.png";
}

/// Chart geometry constants
pub mod chart {
    /// Default chart width in pixels
    pub const DEFAULT_WIDTH: u32 = 800;
    /// Default chart height in pixels
    pub const DEFAULT_HEIGHT: u32 = 600;
    /// Minimum configurable chart dimension in pixels
    pub const MIN_DIMENSION: u32 = 100;
    /// Maximum configurable chart dimension in pixels
    pub const MAX_DIMENSION: u32 = 10_000;
    /// Fallback axis bound used when a dataset has no drawable points
    pub const FALLBACK_AXIS_MAX: f64 = 10.0;
}

/// Tabular input constants
pub mod tabular {
    /// Fields per data row: entry count plus one value per implementation
    pub const FIELDS_PER_ROW: usize = 4;
    /// Prefix marking an annotation line to skip
    pub const COMMENT_PREFIX: char = '#';
}
