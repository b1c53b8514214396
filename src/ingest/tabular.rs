//! Whitespace-delimited memory table parsing

use std::fs;
use std::path::Path;

use crate::core::constants::tabular;
use crate::core::error::{BenchPlotError, Result};
use crate::core::types::{MeasurementRow, TabularDataset};

/// Read and parse a memory table file.
///
/// The path is checked for existence first so a missing input surfaces as
/// `FileNotFound` rather than a bare IO error.
pub fn load_tabular_file<P: AsRef<Path>>(path: P) -> Result<TabularDataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BenchPlotError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_tabular(&content)
}

/// Parse a memory table from text.
///
/// Each data line carries exactly four whitespace-delimited numeric fields:
/// entry count, then one value per implementation (dense, open, closed).
/// Blank lines and `#`-prefixed annotation lines are skipped; the upstream
/// harness interleaves those with data rows. There is no header row.
pub fn parse_tabular(content: &str) -> Result<TabularDataset> {
    let mut rows = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(tabular::COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != tabular::FIELDS_PER_ROW {
            return Err(BenchPlotError::MalformedInput(format!(
                "line {}: expected {} fields, found {}",
                index + 1,
                tabular::FIELDS_PER_ROW,
                fields.len()
            )));
        }

        let mut values = [0.0_f64; tabular::FIELDS_PER_ROW];
        for (slot, token) in values.iter_mut().zip(&fields) {
            *slot = token.parse().map_err(|_| {
                BenchPlotError::MalformedInput(format!(
                    "line {}: non-numeric field '{token}'",
                    index + 1
                ))
            })?;
        }

        rows.push(MeasurementRow {
            entries: values[0],
            dense: values[1],
            open: values[2],
            closed: values[3],
        });
    }

    Ok(TabularDataset::new(rows))
}
