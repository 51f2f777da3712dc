//! Dataset loading for Cascade.
//!
//! This crate provides:
//! - `DatasetSource`, the bundled file or the single remote endpoint
//! - One-shot loading and validation into a core `Dataset`

pub mod error;
pub mod source;

pub use error::LoadError;
pub use source::{DatasetSource, load};
