//! Reporting of recoverable ledger conditions.
//!
//! Ledger operations never abort on a [`LedgerError`]; they hand it to a
//! [`Reporter`] and carry on with a safe state.

use crate::{LedgerError, Severity};

/// Reporter trait for surfacing ledger diagnostics
pub trait Reporter {
    fn report(&mut self, diagnostic: &LedgerError);
}

/// Reporter that forwards diagnostics to `tracing` by severity
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: &LedgerError) {
        match diagnostic.severity() {
            Severity::Debug => tracing::debug!("{}", diagnostic),
            Severity::Warning => tracing::warn!("{}", diagnostic),
            Severity::Error => tracing::error!("{}", diagnostic),
        }
    }
}

/// Reporter that keeps every diagnostic in memory
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    diagnostics: Vec<LedgerError>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[LedgerError] {
        &self.diagnostics
    }

    /// Diagnostics at or above `severity`.
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &LedgerError> + '_ {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity() >= severity)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, diagnostic: &LedgerError) {
        self.diagnostics.push(diagnostic.clone());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: &LedgerError) {
        (**self).report(diagnostic);
    }
}
