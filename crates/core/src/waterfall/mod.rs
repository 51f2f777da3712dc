//! MRR waterfall aggregation engine.
//!
//! Three reducers run over the same immutable dataset:
//! - [`pivot`]: bucket x month totals under an optional selection
//! - [`baseline`]: Ending MRR per month, selection-independent
//! - [`last_period_breakdown`]: last-month Ending MRR per selected value
//!
//! Every reducer is a pure fold over record order and returns a fresh value.

pub mod baseline;
pub mod breakdown;
pub mod bucket;
pub mod pivot;

#[cfg(test)]
mod tests;

pub use baseline::baseline;
pub use breakdown::{Breakdown, last_period_breakdown};
pub use bucket::{ENDING_MRR, MrrBucket};
pub use pivot::{Pivot, pivot};

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on output.
pub const MONEY_DP: u32 = 2;

/// Rounds an accumulated total to cents, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}
