//! Subscription lifecycle simulation.
//!
//! Each subscription starts in a random month, then every month may churn,
//! expand, downgrade or (once churned) reactivate. Every active subscription
//! also reports its Ending MRR, so the output satisfies the waterfall
//! identity: ending = previous ending + the month's movements.

use anyhow::Context;
use cascade_core::waterfall::MrrBucket;
use chrono::{Months, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;
use serde_json::{Value, json};

/// (plan, monthly price per seat)
const PLANS: [(&str, i64); 4] = [("basic", 29), ("pro", 99), ("team", 249), ("enterprise", 999)];

const REGIONS: [&str; 4] = ["na", "emea", "apac", "latam"];

// monthly odds, percent
const CHURN_PCT: u32 = 4;
const EXPANSION_PCT: u32 = 8;
const DOWNGRADE_PCT: u32 = 4;
const REACTIVATION_PCT: u32 = 6;

/// Generator parameters.
#[derive(Debug, Clone, Copy)]
pub struct SeedParams {
    /// First month of the series.
    pub start: NaiveDate,
    /// Number of months.
    pub months: u32,
    /// Number of subscriptions.
    pub subscriptions: u32,
    /// RNG seed.
    pub seed: u64,
}

struct Subscription {
    id: String,
    plan: &'static str,
    region: &'static str,
    cohort: String,
    start: usize,
    mrr: Decimal,
    active: bool,
}

impl Subscription {
    fn draw(index: u32, months: &[String], rng: &mut StdRng) -> Self {
        let (plan, price) = PLANS[rng.random_range(0..PLANS.len())];
        let seats = rng.random_range(1..=5_i64);
        let start = rng.random_range(0..months.len());

        Self {
            id: format!("sub_{:05}", index + 1),
            plan,
            region: REGIONS[rng.random_range(0..REGIONS.len())],
            cohort: months[start].clone(),
            start,
            mrr: Decimal::from(price * seats),
            active: false,
        }
    }

    /// Advances one month and returns the movement, if any.
    fn step(&mut self, month: usize, rng: &mut StdRng) -> Option<(MrrBucket, Decimal)> {
        if month < self.start {
            return None;
        }
        if month == self.start {
            self.active = true;
            return Some((MrrBucket::New, self.mrr));
        }

        let roll = rng.random_range(0..100_u32);
        if !self.active {
            // churned subscriptions come back at their last price
            return (roll < REACTIVATION_PCT).then(|| {
                self.active = true;
                (MrrBucket::Reactivation, self.mrr)
            });
        }

        if roll < CHURN_PCT {
            self.active = false;
            return Some((MrrBucket::Churn, -self.mrr));
        }
        let roll = roll - CHURN_PCT;
        if roll < EXPANSION_PCT {
            let delta = self.delta(rng);
            self.mrr += delta;
            return Some((MrrBucket::Expansion, delta));
        }
        if roll < EXPANSION_PCT + DOWNGRADE_PCT {
            let delta = self.delta(rng);
            self.mrr -= delta;
            return Some((MrrBucket::Downgrade, -delta));
        }
        None
    }

    /// 10% to 40% of the current MRR, in cents.
    fn delta(&self, rng: &mut StdRng) -> Decimal {
        let pct = rng.random_range(10..=40_i64);
        (self.mrr * Decimal::new(pct, 2)).round_dp(2)
    }
}

/// Generated dataset, column by column.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Columns {
    month: Vec<String>,
    subscription_id: Vec<String>,
    bucket: Vec<&'static str>,
    value: Vec<Decimal>,
    plan: Vec<&'static str>,
    region: Vec<&'static str>,
    cohort: Vec<String>,
}

impl Columns {
    fn push(&mut self, month: &str, sub: &Subscription, bucket: MrrBucket, value: Decimal) {
        self.month.push(month.to_string());
        self.subscription_id.push(sub.id.clone());
        self.bucket.push(bucket.label());
        self.value.push(value);
        self.plan.push(sub.plan);
        self.region.push(sub.region);
        self.cohort.push(sub.cohort.clone());
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.month.len()
    }

    /// Whether nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.month.is_empty()
    }

    /// Columnar JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "month": self.month,
            "subscription_id": self.subscription_id,
            "bucket": self.bucket,
            "value": self.value,
            "plan": self.plan,
            "region": self.region,
            "cohort": self.cohort,
        })
    }
}

/// `YYYY-MM` labels for `count` months from `start`.
fn month_labels(start: NaiveDate, count: u32) -> anyhow::Result<Vec<String>> {
    (0..count)
        .map(|offset| {
            start
                .checked_add_months(Months::new(offset))
                .map(|date| date.format("%Y-%m").to_string())
                .context("Month out of range")
        })
        .collect()
}

/// Runs the simulation.
pub fn generate(params: &SeedParams) -> anyhow::Result<Columns> {
    let months = month_labels(params.start, params.months)?;
    let mut columns = Columns::default();
    if months.is_empty() {
        return Ok(columns);
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut subscriptions: Vec<Subscription> = (0..params.subscriptions)
        .map(|index| Subscription::draw(index, &months, &mut rng))
        .collect();

    for (index, month) in months.iter().enumerate() {
        for sub in &mut subscriptions {
            if let Some((bucket, value)) = sub.step(index, &mut rng) {
                columns.push(month, sub, bucket, value);
            }
            if sub.active {
                let mrr = sub.mrr;
                columns.push(month, sub, MrrBucket::Ending, mrr);
            }
        }
    }

    Ok(columns)
}
