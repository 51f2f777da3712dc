//! Presentation adapters.
//!
//! Pure transforms from engine outputs to the shapes the chart and grid
//! widgets consume:
//! - Line chart of Ending MRR (baseline and selected segment)
//! - Horizontal bar chart of the last-period breakdown
//! - Waterfall grid with pre-formatted cells

pub mod chart;
pub mod format;
pub mod grid;

pub use chart::{BASELINE_SERIES_NAME, BarChart, ChartSeries, LineChart, segment_series_name};
pub use format::{format_compact, format_grouped};
pub use grid::{ColumnKind, Grid, GridColumn, GridRow, grid_columns, grid_rows};
