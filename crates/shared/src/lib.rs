//! Shared errors and configuration for Cascade.
//!
//! This crate provides what the outer crates have in common:
//! - Application-wide error types with their HTTP mapping
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
