//! Core aggregation logic for Cascade.
//!
//! This crate contains pure aggregation logic with ZERO web or io dependencies.
//! The dataset model, reducers and render adapters all live here.
//!
//! # Modules
//!
//! - `dataset` - Columnar subscription records and their validation
//! - `selection` - Segment selection and the segment picker
//! - `waterfall` - Pivot, baseline and last-period breakdown reducers
//! - `presentation` - Chart payloads, grid rows and number formatting
//! - `dashboard` - One-shot recomputation of everything the page renders

pub mod dashboard;
pub mod dataset;
pub mod presentation;
pub mod selection;
pub mod waterfall;
