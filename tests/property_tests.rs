//! Property-based tests for benchplot using proptest
//!
//! These tests generate random inputs to test edge cases and ensure
//! robustness across a wide range of potential inputs.

use proptest::prelude::*;

use benchplot::ingest::parse_tabular;
use benchplot::stats::compare_open_closed;
use benchplot::{MeasurementRow, TabularDataset};

/// Generate one measurement row with positive finite values
fn row_strategy() -> impl Strategy<Value = MeasurementRow> {
    (1u32..1_000_000, 0.001f64..1e9, 0.001f64..1e9, 0.001f64..1e9).prop_map(
        |(entries, dense, open, closed)| MeasurementRow {
            entries: f64::from(entries),
            dense,
            open,
            closed,
        },
    )
}

/// Generate a dataset of random rows, including the empty dataset
fn dataset_strategy() -> impl Strategy<Value = TabularDataset> {
    prop::collection::vec(row_strategy(), 0..50).prop_map(TabularDataset::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))] // Default is 256...

    #[test]
    fn test_fractions_are_bounded(dataset in dataset_strategy()) {
        let summary = compare_open_closed(&dataset);

        prop_assert!((0.0..=1.0).contains(&summary.open.bigger_fraction));
        prop_assert!((0.0..=1.0).contains(&summary.closed.bigger_fraction));
        // The two sides partition the non-tie rows, so their fractions can
        // never sum past one (tiny float slack for the two divisions).
        prop_assert!(
            summary.open.bigger_fraction + summary.closed.bigger_fraction <= 1.0 + 1e-9
        );
    }

    #[test]
    fn test_average_excess_is_non_negative(dataset in dataset_strategy()) {
        let summary = compare_open_closed(&dataset);

        prop_assert!(summary.open.average_excess >= 0.0);
        prop_assert!(summary.closed.average_excess >= 0.0);
    }

    #[test]
    fn test_open_always_bigger_degenerates_to_one_and_zero(
        closed_values in prop::collection::vec(0.001f64..1e6, 1..30),
        factor in 1.5f64..10.0,
    ) {
        let rows: Vec<MeasurementRow> = closed_values
            .iter()
            .enumerate()
            .map(|(i, &closed)| MeasurementRow {
                entries: i as f64 + 1.0,
                dense: 0.0,
                open: closed * factor,
                closed,
            })
            .collect();
        let summary = compare_open_closed(&TabularDataset::new(rows));

        prop_assert_eq!(summary.open.bigger_fraction, 1.0);
        prop_assert_eq!(summary.closed.bigger_fraction, 0.0);
        prop_assert_eq!(summary.closed.average_excess, 0.0);
        prop_assert!(summary.open.average_excess > 0.0);
    }

    #[test]
    fn test_all_ties_yield_zero_aggregates(
        values in prop::collection::vec(0.001f64..1e6, 1..30)
    ) {
        let rows: Vec<MeasurementRow> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| MeasurementRow {
                entries: i as f64 + 1.0,
                dense: 0.0,
                open: value,
                closed: value,
            })
            .collect();
        let summary = compare_open_closed(&TabularDataset::new(rows));

        prop_assert_eq!(summary.open.bigger_fraction, 0.0);
        prop_assert_eq!(summary.open.average_excess, 0.0);
        prop_assert_eq!(summary.closed.bigger_fraction, 0.0);
        prop_assert_eq!(summary.closed.average_excess, 0.0);
    }

    #[test]
    fn test_reference_series_never_affects_summary(
        dataset in dataset_strategy(),
        dense_override in 0.0f64..1e12,
    ) {
        let overridden = TabularDataset::new(
            dataset
                .rows()
                .iter()
                .map(|row| MeasurementRow { dense: dense_override, ..*row })
                .collect(),
        );

        prop_assert_eq!(
            compare_open_closed(&dataset),
            compare_open_closed(&overridden)
        );
    }

    #[test]
    fn test_tabular_parser_accepts_generated_tables(
        dataset in dataset_strategy(),
        use_tabs in any::<bool>(),
    ) {
        let separator = if use_tabs { "\t" } else { "   " };
        let text: String = dataset
            .rows()
            .iter()
            .map(|row| {
                format!(
                    "{}{sep}{}{sep}{}{sep}{}\n",
                    row.entries, row.dense, row.open, row.closed,
                    sep = separator
                )
            })
            .collect();

        let parsed = parse_tabular(&text).expect("generated table must parse");
        prop_assert_eq!(parsed.len(), dataset.len());
    }
}
