//! Chart payloads for the line and horizontal bar charts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::selection::Selection;
use crate::waterfall::{Breakdown, ENDING_MRR, Pivot, round_money};

/// Name of the company-wide baseline series.
pub const BASELINE_SERIES_NAME: &str = "Ending MRR";

/// One named data series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series name shown in the legend.
    pub name: String,
    /// Values, aligned to the chart's category axis.
    pub data: Vec<Decimal>,
}

impl ChartSeries {
    /// Creates a series.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<Decimal>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// The baseline series.
    #[must_use]
    pub fn baseline(data: Vec<Decimal>) -> Self {
        Self::new(BASELINE_SERIES_NAME, data)
    }

    /// The pivot's Ending MRR row as a series over `months`.
    ///
    /// Missing months are zero; values are rounded to cents. Returns `None`
    /// when no record contributed to Ending MRR.
    #[must_use]
    pub fn from_ending_row(pivot: &Pivot, months: &[String], name: impl Into<String>) -> Option<Self> {
        pivot.row(ENDING_MRR)?;
        let data = months
            .iter()
            .map(|month| round_money(pivot.value_or_zero(ENDING_MRR, month)))
            .collect();
        Some(Self::new(name, data))
    }
}

/// Legend name of the selected-segment series, e.g. `Ending MRR - pro, basic`.
#[must_use]
pub fn segment_series_name(selection: &Selection) -> String {
    format!("{BASELINE_SERIES_NAME} - {}", selection.label())
}

/// Time-series line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    /// Months on the category axis.
    pub x_axis_data: Vec<String>,
    /// Series plotted over the months.
    pub y_axis_data_series: Vec<ChartSeries>,
    /// Value axis floor: 99% of the smallest plotted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_start: Option<Decimal>,
}

impl LineChart {
    /// Builds the chart and its axis floor.
    #[must_use]
    pub fn new(months: Vec<String>, series: Vec<ChartSeries>) -> Self {
        let y_axis_start = series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .min()
            .map(|min| min * Decimal::new(99, 2));

        Self {
            x_axis_data: months,
            y_axis_data_series: series,
            y_axis_start,
        }
    }
}

/// Horizontal bar chart: categories on the y axis, one series of totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    /// Category labels, index-aligned with `x_axis_data_series.data`.
    pub y_axis_data: Vec<String>,
    /// Totals per category.
    pub x_axis_data_series: ChartSeries,
}

impl BarChart {
    /// Bar chart of a last-period breakdown.
    #[must_use]
    pub fn from_breakdown(selection: &Selection, breakdown: Breakdown) -> Self {
        Self {
            y_axis_data: selection.bucket_values().to_vec(),
            x_axis_data_series: ChartSeries::new(breakdown.dimension, breakdown.values),
        }
    }
}
