//! Core domain types for the Stockr inventory ledger.
//!
//! This module defines the fundamental types used throughout the system:
//! - The inventory mapping and its mutation rules
//! - Untyped adjustments coming from external input
//! - The per-run activity log

use crate::LedgerError;
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Items strictly below this quantity are considered low on stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

// ============================================================================
// Inventory
// ============================================================================

/// Mapping from item name to quantity, iterated in insertion order.
///
/// Updating an existing item keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Iterate `(item, quantity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Add `quantity` (which may be negative) to `item`.
    ///
    /// An empty item name is rejected without touching the mapping. Entries
    /// are never pruned here, so a negative delta can leave a zero or
    /// negative quantity behind until the next [`Inventory::remove`].
    ///
    /// Returns the item's new quantity.
    pub fn add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut ActivityLog>,
    ) -> Result<i64, LedgerError> {
        if item.is_empty() {
            return Err(LedgerError::EmptyItemName);
        }

        let entry = self.items.entry(item.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
        let updated = *entry;

        if let Some(log) = log {
            log.record_addition(item, quantity);
        }

        tracing::debug!("Added {} of {} (now {})", quantity, item, updated);
        Ok(updated)
    }

    /// Subtract `quantity` from an existing item.
    ///
    /// The entry is deleted once it drops to zero or below. Returns the
    /// remaining quantity, or `None` if the entry was pruned.
    pub fn remove(&mut self, item: &str, quantity: i64) -> Result<Option<i64>, LedgerError> {
        let current = self
            .items
            .get_mut(item)
            .ok_or_else(|| LedgerError::NotFound(item.to_string()))?;

        *current = current.saturating_sub(quantity);
        if *current <= 0 {
            self.items.shift_remove(item);
            tracing::debug!("Removed {} of {} (pruned)", quantity, item);
            return Ok(None);
        }

        let remaining = *current;
        tracing::debug!("Removed {} of {} (now {})", quantity, item, remaining);
        Ok(Some(remaining))
    }

    /// Current quantity of `item`, or 0 if it is not stocked.
    pub fn quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_items(&self, threshold: i64) -> Vec<&str> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// Adjustments
// ============================================================================

/// A typed `(item, quantity)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub item: String,
    pub quantity: i64,
}

impl Adjustment {
    pub fn new(item: impl Into<String>, quantity: i64) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    /// Build an adjustment from untyped JSON values.
    ///
    /// The item must be a JSON string and the quantity a JSON integer.
    /// Anything else (numbers with a fraction, booleans, null) is an
    /// [`LedgerError::InvalidType`].
    pub fn from_values(item: &Value, quantity: &Value) -> Result<Self, LedgerError> {
        match (item.as_str(), quantity.as_i64()) {
            (Some(name), Some(qty)) => Ok(Self::new(name, qty)),
            _ => Err(LedgerError::InvalidType {
                item: display_value(item),
                quantity: display_value(quantity),
            }),
        }
    }

    /// Build an adjustment from a `{"item": ..., "quantity": ...}` record.
    ///
    /// Missing fields are treated as `null`.
    pub fn from_record(record: &Value) -> Result<Self, LedgerError> {
        Self::from_values(
            record.get("item").unwrap_or(&Value::Null),
            record.get("quantity").unwrap_or(&Value::Null),
        )
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Activity Log
// ============================================================================

/// Append-only record of additions made during one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an addition stamped with the current local time.
    pub fn record_addition(&mut self, item: &str, quantity: i64) {
        self.record_addition_at(Local::now(), item, quantity);
    }

    /// Record an addition with an explicit timestamp.
    pub fn record_addition_at(&mut self, at: DateTime<Local>, item: &str, quantity: i64) {
        self.entries.push(format!(
            "{}: Added {} of {}",
            at.format("%Y-%m-%d %H:%M:%S%.6f"),
            quantity,
            item
        ));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
