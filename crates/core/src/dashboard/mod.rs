//! Dashboard view: everything the page renders for one selection.
//!
//! This module ties the reducers and adapters together:
//! - Month axis and baseline series
//! - Selected-segment series and grid
//! - Last-period breakdown bar chart

pub mod view;

pub use view::DashboardView;
