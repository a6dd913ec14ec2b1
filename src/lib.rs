//! FinFlow - personal finance tracking for the terminal
//!
//! This library provides the core of the FinFlow finance tracker: a
//! transaction log, per-category monthly budgets, and the aggregations that
//! derive every report from the log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, categories, money)
//! - `storage`: JSON file storage layer
//! - `reports`: Aggregation engine and reports built on it
//! - `services`: Business logic layer, including budget reconciliation
//! - `display`: Plain-text formatting for the terminal
//! - `cli`: Command handlers for the `finflow` binary
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use finflow::config::{FinflowPaths, Settings};
//! use finflow::storage::Storage;
//!
//! let paths = FinflowPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::FinflowError;
