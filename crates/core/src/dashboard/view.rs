//! Full recomputation of the dashboard for one selection.

use serde::{Deserialize, Serialize};

use crate::dataset::{BUCKET_FIELD, Dataset};
use crate::presentation::{BarChart, ChartSeries, Grid, LineChart, segment_series_name};
use crate::selection::Selection;
use crate::waterfall::{MrrBucket, baseline, last_period_breakdown, pivot};

/// Render payload for the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Distinct months, ascending.
    pub months: Vec<String>,
    /// Ending MRR over time: baseline first, then the selected segment.
    pub line_chart: LineChart,
    /// Last-month breakdown; present only for a non-empty selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_chart: Option<BarChart>,
    /// Waterfall grid under the selection.
    pub grid: Grid,
    /// Selection the view was computed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
}

impl DashboardView {
    /// Recomputes every aggregate from scratch.
    ///
    /// Without a selection the grid shows the unfiltered pivot and only the
    /// baseline is plotted.
    #[must_use]
    pub fn compute(dataset: &Dataset, selection: Option<&Selection>) -> Self {
        let months = dataset.months();
        let totals = pivot(dataset, BUCKET_FIELD, &MrrBucket::labels(), selection);

        let mut series = vec![ChartSeries::baseline(baseline(dataset))];
        let active = selection.filter(|s| !s.is_empty());
        if let Some(selection) = active {
            series.extend(ChartSeries::from_ending_row(
                &totals,
                &months,
                segment_series_name(selection),
            ));
        }

        let bar_chart = active.map(|selection| {
            BarChart::from_breakdown(selection, last_period_breakdown(dataset, selection))
        });

        Self {
            grid: Grid::from_pivot(&totals, &months),
            line_chart: LineChart::new(months.clone(), series),
            bar_chart,
            months,
            selection: selection.cloned(),
        }
    }
}
