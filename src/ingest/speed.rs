//! JSON speed report parsing

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::constants::implementations;
use crate::core::error::{BenchPlotError, Result};
use crate::core::types::{ScenarioSeries, SpeedReport, SpeedSeries};

/// Shape of the raw input: scenario name -> implementation key -> pairs.
///
/// The `[f64; 2]` element type makes serde enforce the exactly-two-numbers
/// contract on every pair.
type RawReport = BTreeMap<String, BTreeMap<String, Vec<[f64; 2]>>>;

/// Read and parse a speed report file.
pub fn load_speed_file<P: AsRef<Path>>(path: P) -> Result<SpeedReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BenchPlotError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_speed_report(&content)
}

/// Parse a speed report from JSON text.
///
/// The top level maps scenario name to a map of implementation name to an
/// ordered list of (operation count, elapsed seconds) pairs. Every scenario
/// must provide all three implementation keys; unrecognized keys are
/// ignored. Syntax errors surface as `Json`, structural violations as
/// `MalformedInput`.
pub fn parse_speed_report(content: &str) -> Result<SpeedReport> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let raw: RawReport = serde_json::from_value(value)
        .map_err(|e| BenchPlotError::MalformedInput(e.to_string()))?;

    let mut scenarios = BTreeMap::new();
    for (name, mut series_by_key) in raw {
        let scenario = ScenarioSeries {
            dense: take_series(&mut series_by_key, &name, implementations::DENSE_KEY)?,
            open: take_series(&mut series_by_key, &name, implementations::OPEN_KEY)?,
            closed: take_series(&mut series_by_key, &name, implementations::CLOSED_KEY)?,
        };
        scenarios.insert(name, scenario);
    }

    Ok(SpeedReport::new(scenarios))
}

fn take_series(
    series_by_key: &mut BTreeMap<String, Vec<[f64; 2]>>,
    scenario: &str,
    key: &str,
) -> Result<SpeedSeries> {
    let pairs = series_by_key.remove(key).ok_or_else(|| {
        BenchPlotError::MalformedInput(format!(
            "scenario '{scenario}': missing implementation key '{key}'"
        ))
    })?;

    Ok(SpeedSeries::new(
        pairs.into_iter().map(|[x, y]| (x, y)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"{
        "InsertTest": {
            "DenseTable": [[100, 1.0], [200, 1.5]],
            "OpenTable": [[100, 2.0]],
            "CloseTable": [[100, 4.0]]
        }
    }"#;

    #[test]
    fn test_parse_valid_report() {
        let report = parse_speed_report(VALID).unwrap();

        assert_eq!(report.len(), 1);
        let scenario = report.get("InsertTest").unwrap();
        assert_eq!(scenario.dense.points(), &[(100.0, 1.0), (200.0, 1.5)]);
        assert_eq!(scenario.open.points(), &[(100.0, 2.0)]);
        assert_eq!(scenario.closed.points(), &[(100.0, 4.0)]);
    }

    #[test]
    fn test_parse_rejects_missing_implementation_key() {
        let content = r#"{"t1": {"DenseTable": [], "OpenTable": []}}"#;
        let result = parse_speed_report(content);

        match result {
            Err(BenchPlotError::MalformedInput(msg)) => {
                assert!(msg.contains("scenario 't1'"));
                assert!(msg.contains("missing implementation key 'CloseTable'"));
            }
            _ => panic!("Expected MalformedInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_pair_arity() {
        let content = r#"{"t1": {
            "DenseTable": [[100, 1.0, 9.0]],
            "OpenTable": [],
            "CloseTable": []
        }}"#;
        let result = parse_speed_report(content);

        match result {
            Err(BenchPlotError::MalformedInput(_)) => {} // Expected
            _ => panic!("Expected MalformedInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_pair() {
        let content = r#"{"t1": {
            "DenseTable": [[100, "fast"]],
            "OpenTable": [],
            "CloseTable": []
        }}"#;
        let result = parse_speed_report(content);

        match result {
            Err(BenchPlotError::MalformedInput(_)) => {} // Expected
            _ => panic!("Expected MalformedInput error"),
        }
    }

    #[test]
    fn test_parse_syntax_error_is_json() {
        let result = parse_speed_report("{not json");
        match result {
            Err(BenchPlotError::Json(_)) => {} // Expected
            _ => panic!("Expected Json error"),
        }
    }

    #[test]
    fn test_parse_ignores_unrecognized_implementation_keys() {
        let content = r#"{"t1": {
            "DenseTable": [[100, 1.0]],
            "OpenTable": [[100, 2.0]],
            "CloseTable": [[100, 4.0]],
            "ExperimentalTable": [[100, 8.0]]
        }}"#;
        let report = parse_speed_report(content).unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_parse_empty_object_is_empty_report() {
        let report = parse_speed_report("{}").unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_parse_scenarios_sorted_by_name() {
        let content = r#"{
            "b": {"DenseTable": [], "OpenTable": [], "CloseTable": []},
            "a": {"DenseTable": [], "OpenTable": [], "CloseTable": []}
        }"#;
        let report = parse_speed_report(content).unwrap();
        let names: Vec<&str> = report.scenarios().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_load_missing_file_is_file_not_found() {
        let result = load_speed_file("/nonexistent/speeds.json");
        match result {
            Err(BenchPlotError::FileNotFound(_)) => {} // Expected
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let report = load_speed_file(file.path()).unwrap();
        assert_eq!(report.len(), 1);
    }
}
