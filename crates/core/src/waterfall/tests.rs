//! Property-based tests for the waterfall reducers.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use super::{MrrBucket, baseline, last_period_breakdown, pivot};
use crate::dataset::{BUCKET_FIELD, Dataset};
use crate::selection::Selection;

const MONTHS: [&str; 4] = ["2024-01", "2024-02", "2024-03", "2024-04"];
const PLANS: [&str; 3] = ["basic", "pro", "team"];

/// Largest `Decimal` mantissa (96 bits).
const MAX_MANTISSA: i128 = (1 << 96) - 1;

/// Records generated per dataset, upper bound.
const MAX_RECORDS: usize = 40;

/// (month, bucket, plan, cents)
type Record = (usize, usize, usize, i128);

/// Strategy for one record with a 2-decimal money value.
fn record() -> impl Strategy<Value = Record> {
    (0..MONTHS.len(), 0..6usize, 0..PLANS.len(), 0i128..10_000_000)
}

/// Records whose combined magnitude sits just inside the decimal range.
fn large_record() -> impl Strategy<Value = Record> {
    let bound = MAX_MANTISSA / MAX_RECORDS as i128;
    (0..MONTHS.len(), 0..6usize, 0..PLANS.len(), -bound..=bound)
}

fn build(records: &[Record]) -> Dataset {
    let labels = MrrBucket::labels();
    Dataset::from_json_value(json!({
        "month": records.iter().map(|r| MONTHS[r.0]).collect::<Vec<_>>(),
        "bucket": records.iter().map(|r| labels[r.1]).collect::<Vec<_>>(),
        "plan": records.iter().map(|r| PLANS[r.2]).collect::<Vec<_>>(),
        "value": records
            .iter()
            .map(|r| Decimal::from_i128_with_scale(r.3, 2).to_string())
            .collect::<Vec<_>>(),
    }))
    .unwrap()
}

/// Non-empty subset of plans.
fn plan_subset() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(PLANS.to_vec(), 1..=PLANS.len())
        .prop_map(|plans| plans.into_iter().map(str::to_string).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Running the pivot twice on the same inputs gives the same output.
    #[test]
    fn prop_pivot_idempotent(
        records in proptest::collection::vec(record(), 0..MAX_RECORDS),
        plans in plan_subset(),
    ) {
        let dataset = build(&records);
        let selection = Selection::new("plan", plans);

        let first = pivot(&dataset, BUCKET_FIELD, &MrrBucket::labels(), Some(&selection));
        let second = pivot(&dataset, BUCKET_FIELD, &MrrBucket::labels(), Some(&selection));
        prop_assert_eq!(first, second);
    }

    /// A filtered pivot never exceeds the unfiltered one (non-negative
    /// values), and equals it when every observed value is selected.
    #[test]
    fn prop_filter_subset(
        records in proptest::collection::vec(record(), 0..MAX_RECORDS),
        plans in plan_subset(),
    ) {
        let dataset = build(&records);
        let labels = MrrBucket::labels();
        let unfiltered = pivot(&dataset, BUCKET_FIELD, &labels, None).total();

        let partial = Selection::new("plan", plans);
        let filtered = pivot(&dataset, BUCKET_FIELD, &labels, Some(&partial)).total();
        prop_assert!(filtered <= unfiltered);

        let full = Selection::for_dimension(&dataset, "plan");
        let covered = pivot(&dataset, BUCKET_FIELD, &labels, Some(&full)).total();
        prop_assert_eq!(covered, unfiltered);
    }

    /// Permuting records leaves every total unchanged.
    #[test]
    fn prop_order_invariance(
        (records, shuffled) in proptest::collection::vec(record(), 0..MAX_RECORDS)
            .prop_flat_map(|records| (Just(records.clone()), Just(records).prop_shuffle())),
        plans in plan_subset(),
    ) {
        let original = build(&records);
        let permuted = build(&shuffled);
        let labels = MrrBucket::labels();
        let selection = Selection::new("plan", plans);

        prop_assert_eq!(
            pivot(&original, BUCKET_FIELD, &labels, Some(&selection)),
            pivot(&permuted, BUCKET_FIELD, &labels, Some(&selection))
        );
        prop_assert_eq!(baseline(&original), baseline(&permuted));
        prop_assert_eq!(
            last_period_breakdown(&original, &selection),
            last_period_breakdown(&permuted, &selection)
        );
    }

    /// The baseline equals the unfiltered pivot's Ending MRR row, month by month.
    #[test]
    fn prop_baseline_matches_unfiltered_ending_row(
        records in proptest::collection::vec(record(), 0..MAX_RECORDS),
    ) {
        let dataset = build(&records);
        let totals = pivot(&dataset, BUCKET_FIELD, &MrrBucket::labels(), None);
        let expected: Vec<Decimal> = dataset
            .months()
            .iter()
            .map(|month| totals.value_or_zero(MrrBucket::Ending.label(), month))
            .collect();

        prop_assert_eq!(baseline(&dataset), expected);
    }

    /// The breakdown only ever sees the greatest month.
    #[test]
    fn prop_breakdown_uses_last_month_only(
        records in proptest::collection::vec(record(), 1..MAX_RECORDS),
    ) {
        let dataset = build(&records);
        let selection = Selection::for_dimension(&dataset, "plan");
        let last = dataset.last_month().unwrap().to_string();
        let breakdown = last_period_breakdown(&dataset, &selection);
        prop_assert_eq!(breakdown.values.len(), selection.bucket_values().len());

        for (value, total) in selection.bucket_values().iter().zip(&breakdown.values) {
            let expected: Decimal = (0..dataset.len())
                .filter(|&i| dataset.month(i) == Some(last.as_str()))
                .filter(|&i| dataset.bucket(i) == Some(MrrBucket::Ending.label()))
                .filter(|&i| dataset.text("plan", i) == Some(value.as_str()))
                .map(|i| dataset.amount(i))
                .sum();
            prop_assert_eq!(*total, expected);
        }
    }

    /// Values near the decimal limit, of either sign, aggregate exactly.
    #[test]
    fn prop_large_values_aggregate_exactly(
        records in proptest::collection::vec(large_record(), 1..MAX_RECORDS),
    ) {
        let dataset = build(&records);
        let expected: Decimal = (0..dataset.len()).map(|i| dataset.amount(i)).sum();
        let totals = pivot(&dataset, BUCKET_FIELD, &MrrBucket::labels(), None);
        prop_assert_eq!(totals.total(), expected);

        let selection = Selection::for_dimension(&dataset, "plan");
        prop_assert_eq!(last_period_breakdown(&dataset, &selection).values.len(),
            selection.bucket_values().len());
        prop_assert_eq!(baseline(&dataset).len(), dataset.months().len());
    }
}

#[test]
fn test_range_limit_totals() {
    // |a| + |b| + |c| is exactly Decimal::MAX
    let dataset = Dataset::from_json_value(json!({
        "month": ["2024-01", "2024-01", "2024-02"],
        "bucket": ["6. Ending MRR", "6. Ending MRR", "6. Ending MRR"],
        "plan": ["pro", "basic", "pro"],
        "value": [
            "39614081257132168796771975167",
            "-39614081257132168796771975167",
            "1"
        ]
    }))
    .unwrap();

    assert_eq!(baseline(&dataset), vec![Decimal::ZERO, Decimal::ONE]);

    let selection = Selection::new("plan", ["pro"]);
    let totals = pivot(&dataset, BUCKET_FIELD, &MrrBucket::labels(), Some(&selection));
    assert_eq!(
        totals.get(MrrBucket::Ending.label(), "2024-01"),
        Some(Decimal::from_str_exact("39614081257132168796771975167").unwrap())
    );
}
