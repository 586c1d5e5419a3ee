//! Property-based tests for the crop engine.
//!
//! Inputs are sorted columns of numbers or timestamp-like strings, matching
//! the non-decreasing crop column the engine assumes.

use proptest::prelude::*;

use snip_tsv::{crop, CropSpec, FieldKey, Result, Row};

// =============================================================================
// Test Strategies
// =============================================================================

/// Sorted integer keys, possibly with repeats.
fn sorted_numbers() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..60).prop_map(|mut v| {
        v.sort();
        v
    })
}

/// Sorted fixed-width timestamps, which order the same as text and as time.
fn sorted_timestamps() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0u32..24, 0u32..60), 0..60).prop_map(|v| {
        let mut v: Vec<String> = v
            .into_iter()
            .map(|(h, m)| format!("2024-03-01T{h:02}:{m:02}"))
            .collect();
        v.sort();
        v
    })
}

fn to_rows(keys: &[String]) -> Vec<Result<Row>> {
    keys.iter()
        .enumerate()
        .map(|(i, k)| Ok(Row::new(i as u64 + 1, vec![k.clone(), i.to_string()])))
        .collect()
}

fn run_crop(rows: Vec<Result<Row>>, spec: &CropSpec) -> Vec<Row> {
    crop(rows, spec.clone())
        .collect::<Result<Vec<_>>>()
        .expect("well-formed rows never fail")
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// On sorted input the engine keeps exactly the rows in [start, end).
    #[test]
    fn prop_matches_range_test(keys in sorted_numbers(), a in -1100i32..1100, b in -1100i32..1100) {
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let spec = CropSpec::new(0, a.to_string()).with_end(b.to_string());

        let out = run_crop(to_rows(&keys), &spec);
        let expected: Vec<&String> = keys
            .iter()
            .filter(|k| i64::from(a) <= k.parse::<i64>().unwrap() && k.parse::<i64>().unwrap() < i64::from(b))
            .collect();

        let got: Vec<&String> = out.iter().map(|r| &r.fields()[0]).collect();
        prop_assert_eq!(got, expected);
    }

    /// Output rows appear in input order and are contiguous.
    #[test]
    fn prop_preserves_order(keys in sorted_timestamps(), start in sorted_timestamps()) {
        let start = start.first().cloned().unwrap_or_default();
        let spec = CropSpec::new(0, start);
        let out = run_crop(to_rows(&keys), &spec);

        let positions: Vec<usize> = out
            .iter()
            .map(|r| r.fields()[1].parse().unwrap())
            .collect();
        for pair in positions.windows(2) {
            prop_assert_eq!(pair[0] + 1, pair[1]);
        }
        // Unbounded end: everything from the first kept row to the last input row.
        if let Some(&first) = positions.first() {
            prop_assert_eq!(positions.len(), keys.len() - first);
        }
    }

    /// Cropping twice with the same bounds changes nothing.
    #[test]
    fn prop_idempotent(keys in sorted_timestamps(), bounds in sorted_timestamps()) {
        let (start, end) = match bounds.as_slice() {
            [s, .., e] => (s.clone(), e.clone()),
            _ => return Ok(()),
        };
        let spec = CropSpec::new(0, start).with_end(end);

        let once = run_crop(to_rows(&keys), &spec);
        let twice = run_crop(once.iter().cloned().map(Ok).collect(), &spec);
        prop_assert_eq!(once, twice);
    }

    /// Whatever the input order, the first kept row is inside [start, end)
    /// and no kept row is at or past end.
    #[test]
    fn prop_first_row_in_range(values in prop::collection::vec("[0-9a-c.]{0,4}", 0..40), start in "[0-9a-c.]{0,3}", end in "[0-9a-c.]{0,3}") {
        let spec = CropSpec::new(0, start).with_end(end);
        let out = run_crop(to_rows(&values), &spec);
        if let Some(first) = out.first() {
            prop_assert!(spec.contains(&FieldKey::parse(&first.fields()[0])));
        }
        for row in &out {
            prop_assert!(!spec.is_past_end(&FieldKey::parse(&row.fields()[0])));
        }
    }
}

#[test]
fn numeric_precedence_example() {
    let spec = CropSpec::new(0, "1").with_end("9");
    let keys = vec!["2".to_string(), "10".to_string()];
    let out = run_crop(to_rows(&keys), &spec);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].fields()[0], "2");
}
