//! Company-wide Ending MRR baseline.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::bucket::ENDING_MRR;
use super::round_money;
use crate::dataset::Dataset;

/// Ending MRR per month over the whole dataset, ignoring any selection.
///
/// One entry per distinct month (ascending), rounded to cents on output.
/// Months without Ending MRR records yield zero so the series stays aligned
/// with [`Dataset::months`].
#[must_use]
pub fn baseline(dataset: &Dataset) -> Vec<Decimal> {
    let totals = (0..dataset.len())
        .filter(|&index| dataset.bucket(index) == Some(ENDING_MRR))
        .fold(BTreeMap::<&str, Decimal>::new(), |mut acc, index| {
            if let Some(month) = dataset.month(index) {
                *acc.entry(month).or_default() += dataset.amount(index);
            }
            acc
        });

    dataset
        .months()
        .iter()
        .map(|month| round_money(totals.get(month.as_str()).copied().unwrap_or_default()))
        .collect()
}
