//! Recovering ledger session.
//!
//! [`Ledger`] owns an [`Inventory`] for the length of a run and applies
//! operations to it. Rejected operations leave the inventory untouched and
//! are passed to the ledger's [`Reporter`]; callers only learn whether the
//! operation took effect.

use crate::{
    store, ActivityLog, Adjustment, Inventory, LedgerError, Report, Reporter, Result,
    TracingReporter,
};
use serde_json::Value;
use std::path::Path;

pub struct Ledger<R: Reporter = TracingReporter> {
    inventory: Inventory,
    activity: ActivityLog,
    reporter: R,
}

impl Ledger<TracingReporter> {
    /// Wrap an inventory, reporting through `tracing`
    pub fn new(inventory: Inventory) -> Self {
        Self::with_reporter(inventory, TracingReporter)
    }
}

impl<R: Reporter> Ledger<R> {
    pub fn with_reporter(inventory: Inventory, reporter: R) -> Self {
        Self {
            inventory,
            activity: ActivityLog::new(),
            reporter,
        }
    }

    /// Open the inventory stored at `path`.
    ///
    /// A missing or corrupt file is reported and replaced by an empty
    /// inventory.
    pub fn open(path: &Path, mut reporter: R) -> Self {
        let inventory = store::load_or_default(path, &mut reporter);
        Self::with_reporter(inventory, reporter)
    }

    /// Load the ledger at `path`, run `f` against it and save the result.
    pub fn update<F>(path: &Path, reporter: R, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Self),
    {
        let mut ledger = Self::open(path, reporter);
        f(&mut ledger);
        ledger.save(path)?;
        Ok(ledger)
    }

    /// Add `quantity` of `item`, logging the addition. Returns whether the
    /// inventory changed.
    pub fn add(&mut self, item: &str, quantity: i64) -> bool {
        let outcome = self.inventory.add(item, quantity, Some(&mut self.activity));
        self.settle(outcome)
    }

    pub fn apply(&mut self, adjustment: &Adjustment) -> bool {
        self.add(&adjustment.item, adjustment.quantity)
    }

    /// Add from untyped values, rejecting anything that is not a string
    /// item and an integer quantity.
    pub fn add_values(&mut self, item: &Value, quantity: &Value) -> bool {
        match Adjustment::from_values(item, quantity) {
            Ok(adjustment) => self.apply(&adjustment),
            Err(diagnostic) => self.settle::<()>(Err(diagnostic)),
        }
    }

    /// Add from a `{"item": ..., "quantity": ...}` record.
    pub fn apply_record(&mut self, record: &Value) -> bool {
        match Adjustment::from_record(record) {
            Ok(adjustment) => self.apply(&adjustment),
            Err(diagnostic) => self.settle::<()>(Err(diagnostic)),
        }
    }

    /// Remove `quantity` of `item`, pruning it at zero or below. Returns
    /// whether the inventory changed.
    pub fn remove(&mut self, item: &str, quantity: i64) -> bool {
        let outcome = self.inventory.remove(item, quantity);
        self.settle(outcome)
    }

    pub fn quantity(&self, item: &str) -> i64 {
        self.inventory.quantity(item)
    }

    pub fn low_items(&self, threshold: i64) -> Vec<&str> {
        self.inventory.low_items(threshold)
    }

    pub fn report(&self) -> Report<'_> {
        Report::new(&self.inventory)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save(&self.inventory, path)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_parts(self) -> (Inventory, ActivityLog, R) {
        (self.inventory, self.activity, self.reporter)
    }

    fn settle<T>(&mut self, outcome: std::result::Result<T, LedgerError>) -> bool {
        match outcome {
            Ok(_) => true,
            Err(diagnostic) => {
                self.reporter.report(&diagnostic);
                false
            }
        }
    }
}
