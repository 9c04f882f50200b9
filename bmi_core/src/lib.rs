#![forbid(unsafe_code)]

//! Core domain model and business logic for the BMI tracking system.
//!
//! This crate provides:
//! - Domain types (records, readings, classifications)
//! - The BMI computation engine
//! - SQLite-backed history store
//! - CSV export
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod engine;
pub mod store;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use engine::{classify, compute, height_to_meters, parse_measurement};
pub use store::HistoryStore;
pub use export::history_to_csv;
pub use config::Config;
