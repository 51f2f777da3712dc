//! Canonical MRR waterfall buckets.

use serde::{Deserialize, Serialize};

/// The six waterfall categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MrrBucket {
    /// Revenue from new subscriptions.
    New,
    /// Upsell on existing subscriptions.
    Expansion,
    /// Returning churned subscriptions.
    Reactivation,
    /// Downsell on existing subscriptions.
    Downgrade,
    /// Lost subscriptions.
    Churn,
    /// Closing MRR for the month.
    Ending,
}

impl MrrBucket {
    /// All buckets in canonical order.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Expansion,
        Self::Reactivation,
        Self::Downgrade,
        Self::Churn,
        Self::Ending,
    ];

    /// Label as it appears in the dataset's `bucket` column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "1. New MRR",
            Self::Expansion => "2. Expansion MRR",
            Self::Reactivation => "3. Reactivation MRR",
            Self::Downgrade => "4. Downgrade MRR",
            Self::Churn => "5. Churn MRR",
            Self::Ending => "6. Ending MRR",
        }
    }

    /// Bucket for a dataset label, if canonical.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }

    /// Canonical labels in display order.
    #[must_use]
    pub fn labels() -> [&'static str; 6] {
        Self::ALL.map(Self::label)
    }
}

impl std::fmt::Display for MrrBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of the closing-MRR bucket.
pub const ENDING_MRR: &str = MrrBucket::Ending.label();
