//! Last-period Ending MRR breakdown by the selected dimension.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bucket::ENDING_MRR;
use super::round_money;
use crate::dataset::Dataset;
use crate::selection::Selection;

/// Ending MRR of the last month, one total per selected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Dimension the totals are grouped by.
    pub dimension: String,
    /// Totals aligned to the selection's `bucket_values`.
    pub values: Vec<Decimal>,
}

/// Sums Ending MRR for the last month, grouped by the selection's dimension.
///
/// "Last month" is the greatest month string in the dataset, not the month
/// of the last record. Output order follows `selection.bucket_values()`;
/// values without matching records stay at zero. An empty value set yields
/// an empty breakdown.
#[must_use]
pub fn last_period_breakdown(dataset: &Dataset, selection: &Selection) -> Breakdown {
    let dimension = selection.bucket_name().to_string();
    let mut totals = vec![Decimal::ZERO; selection.bucket_values().len()];

    if let Some(last_month) = dataset.last_month() {
        for index in 0..dataset.len() {
            if dataset.month(index) != Some(last_month) || dataset.bucket(index) != Some(ENDING_MRR)
            {
                continue;
            }
            let Some(value) = dataset.text(&dimension, index) else {
                continue;
            };
            if let Some(slot) = selection.bucket_values().iter().position(|v| v == value) {
                totals[slot] += dataset.amount(index);
            }
        }
    }

    Breakdown {
        dimension,
        values: totals.into_iter().map(round_money).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::from_json_value(json!({
            "month": ["2024-01", "2024-01", "2024-02"],
            "bucket": ["6. Ending MRR", "6. Ending MRR", "6. Ending MRR"],
            "plan": ["pro", "basic", "pro"],
            "value": [100, 50, 120]
        }))
        .unwrap()
    }

    #[test]
    fn test_breakdown_aligned_to_selection() {
        let selection = Selection::new("plan", ["pro", "basic"]);
        let result = last_period_breakdown(&dataset(), &selection);

        assert_eq!(result.dimension, "plan");
        assert_eq!(result.values, vec![dec!(120), dec!(0)]);
    }

    #[test]
    fn test_breakdown_keeps_selection_order() {
        let selection = Selection::new("plan", ["basic", "pro"]);
        let result = last_period_breakdown(&dataset(), &selection);
        assert_eq!(result.values, vec![dec!(0), dec!(120)]);
    }

    #[test]
    fn test_breakdown_empty_values() {
        let selection = Selection::new("plan", Vec::<String>::new());
        let result = last_period_breakdown(&dataset(), &selection);
        assert_eq!(result.dimension, "plan");
        assert!(result.values.is_empty());
    }

    #[test]
    fn test_last_month_is_lexicographic_max_not_last_record() {
        let dataset = Dataset::from_json_value(json!({
            "month": ["2024-03", "2024-03", "2024-01"],
            "bucket": ["6. Ending MRR", "6. Ending MRR", "6. Ending MRR"],
            "plan": ["pro", "basic", "pro"],
            "value": [30, 10, 999]
        }))
        .unwrap();
        let selection = Selection::new("plan", ["pro", "basic"]);

        let result = last_period_breakdown(&dataset, &selection);
        assert_eq!(result.values, vec![dec!(30), dec!(10)]);
    }

    #[test]
    fn test_breakdown_only_counts_ending_mrr() {
        let dataset = Dataset::from_json_value(json!({
            "month": ["2024-02", "2024-02", "2024-02"],
            "bucket": ["6. Ending MRR", "1. New MRR", "5. Churn MRR"],
            "plan": ["pro", "pro", "pro"],
            "value": [10, 5, -3]
        }))
        .unwrap();
        let selection = Selection::new("plan", ["pro"]);

        assert_eq!(last_period_breakdown(&dataset, &selection).values, vec![dec!(10)]);
    }

    #[test]
    fn test_breakdown_rounds_to_cents() {
        let dataset = Dataset::from_json_value(json!({
            "month": ["2024-02", "2024-02"],
            "bucket": ["6. Ending MRR", "6. Ending MRR"],
            "plan": ["pro", "pro"],
            "value": [10.005, 0.0]
        }))
        .unwrap();
        let selection = Selection::new("plan", ["pro"]);

        assert_eq!(
            last_period_breakdown(&dataset, &selection).values,
            vec![dec!(10.01)]
        );
    }

    #[test]
    fn test_breakdown_empty_dataset() {
        let selection = Selection::new("plan", ["pro"]);
        let result = last_period_breakdown(&Dataset::default(), &selection);
        assert_eq!(result.values, vec![Decimal::ZERO]);
    }

    #[test]
    fn test_breakdown_unseen_value_is_zero() {
        let selection = Selection::new("plan", ["enterprise"]);
        let result = last_period_breakdown(&dataset(), &selection);
        assert_eq!(result.values, vec![Decimal::ZERO]);
    }
}
