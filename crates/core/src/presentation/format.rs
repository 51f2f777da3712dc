//! Display formatting for revenue figures (en-US).

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits shown in grid cells.
const GRID_MAX_FRACTION_DIGITS: u32 = 3;

/// Fraction digits shown in compact axis labels.
const COMPACT_MAX_FRACTION_DIGITS: u32 = 2;

/// Compact notation tiers: (power of ten, suffix).
const COMPACT_UNITS: [(u32, &str); 5] = [(0, ""), (3, "K"), (6, "M"), (9, "B"), (12, "T")];

const THOUSANDS_SEP: char = ',';

/// Formats an amount with thousands separators and up to three fraction
/// digits, dropping trailing zeros: `1234567.5 -> "1,234,567.5"`.
#[must_use]
pub fn format_grouped(amount: Decimal) -> String {
    render(round_half_away(amount, GRID_MAX_FRACTION_DIGITS))
}

/// Short compact notation used for chart axes: `1234 -> "1.23K"`.
#[must_use]
pub fn format_compact(amount: Decimal) -> String {
    let magnitude = amount.abs();
    let mut tier = COMPACT_UNITS
        .iter()
        .rposition(|(exp, _)| magnitude >= pow10(*exp))
        .unwrap_or(0);

    let mut scaled = scale(magnitude, tier);
    // 999_999 rounds to 1000K and moves up to 1M
    while scaled >= Decimal::ONE_THOUSAND && tier + 1 < COMPACT_UNITS.len() {
        tier += 1;
        scaled = scale(magnitude, tier);
    }

    let signed = if amount.is_sign_negative() { -scaled } else { scaled };
    format!("{}{}", render(signed), COMPACT_UNITS[tier].1)
}

fn scale(magnitude: Decimal, tier: usize) -> Decimal {
    round_half_away(magnitude / pow10(COMPACT_UNITS[tier].0), COMPACT_MAX_FRACTION_DIGITS)
}

fn pow10(exp: u32) -> Decimal {
    Decimal::from(10_u64.pow(exp))
}

fn round_half_away(amount: Decimal, dp: u32) -> Decimal {
    amount
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Renders an already-rounded amount with grouped integer digits.
fn render(amount: Decimal) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let digits = amount.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if amount.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, THOUSANDS_SEP));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        let pos_from_end = len - i;
        out.push(ch);
        if pos_from_end > 1 && pos_from_end % 3 == 1 {
            out.push(sep);
        }
    }
    out
}
