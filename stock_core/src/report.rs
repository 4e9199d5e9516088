//! Plain-text items report.

use crate::Inventory;
use std::fmt;

/// Header line printed before the item lines
pub const REPORT_HEADER: &str = "Items Report";

/// Borrowed view of an inventory that renders as the items report:
///
/// ```text
/// Items Report
/// apple -> 7
/// banana -> -2
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    inventory: &'a Inventory,
}

impl<'a> Report<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// One `<item> -> <quantity>` line per entry, without the header.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        self.inventory
            .iter()
            .map(|(item, qty)| format!("{} -> {}", item, qty))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
