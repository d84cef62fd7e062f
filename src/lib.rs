//! spendlog - local-first personal expense tracker
//!
//! Records dated, categorised expenses, tracks them against a monthly budget
//! and optional per-category budgets, and reports spending by day, by month
//! and by category.
//!
//! # Architecture
//!
//! - `models`: expenses, budgets, the category registry, money and periods
//! - `storage`: key-value persistence and the expense and budget stores
//! - `services`: period selection, budget status and the history view
//! - `reports`: spending aggregation by category
//! - `display`: terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `config`: paths and user settings
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::SpendPaths, settings::Settings};
//! use spendlog::storage::Storage;
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult};
