#![forbid(unsafe_code)]

//! Core domain model and business logic for the Stockr inventory ledger.
//!
//! This crate provides:
//! - Domain types (inventory, adjustments, activity log)
//! - Ledger operations with validation and pruning
//! - Diagnostic reporting
//! - Persistence (JSON inventory file)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod diagnostics;
pub mod ledger;
pub mod store;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, LedgerError, Result, Severity};
pub use types::*;
pub use diagnostics::{RecordingReporter, Reporter, TracingReporter};
pub use ledger::Ledger;
pub use store::{load, load_or_default, save, DEFAULT_INVENTORY_FILE};
pub use report::Report;
pub use config::Config;
