//! Incremental aggregation of outcomes into a [`Report`].

use crate::foundation::{Outcome, Report};

/// How a [`Collector`] treats failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Visit every outcome and collect every failure.
    All,
    /// Stop at the first failing outcome. Later outcomes are not tracked.
    First,
}

// ============================================================================
// COLLECTOR
// ============================================================================

/// Folds outcomes into a [`Report`] one at a time.
///
/// In [`Mode::First`] the failing outcome is still recorded in the applied
/// map; everything pushed after it is ignored.
///
/// # Examples
///
/// ```
/// use nebula_check::combinators::Collector;
/// use nebula_check::Validation;
///
/// let mut collector = Collector::first();
/// assert!(collector.push(Validation::pass("a", "required")));
/// assert!(!collector.push(Validation::fail("b", "is invalid", "email")));
/// assert!(!collector.push(Validation::pass("c", "min")));
///
/// let report = collector.finish();
/// assert!(report.was_validated("b"));
/// assert!(!report.was_validated("c"));
/// ```
#[derive(Debug, Clone)]
pub struct Collector {
    mode: Mode,
    report: Report,
    stopped: bool,
}

impl Collector {
    /// Creates a collector in the given mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            report: Report::new(),
            stopped: false,
        }
    }

    /// Creates a collector that visits everything.
    #[must_use]
    pub fn all() -> Self {
        Self::new(Mode::All)
    }

    /// Creates a collector that stops at the first failure.
    #[must_use]
    pub fn first() -> Self {
        Self::new(Mode::First)
    }

    /// Returns the collection mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true once a `First` collector has seen a failure.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Folds `outcome` in. Returns whether further pushes will be recorded.
    pub fn push(&mut self, outcome: impl Outcome) -> bool {
        if self.stopped {
            return false;
        }
        let failed = outcome.fold_into(&mut self.report);
        if failed && self.mode == Mode::First {
            self.stopped = true;
        }
        !self.stopped
    }

    /// Returns the aggregate.
    #[must_use]
    pub fn finish(self) -> Report {
        tracing::trace!(
            mode = ?self.mode,
            fields = self.report.applied().len(),
            failures = self.report.field_errors().len(),
            "aggregation finished"
        );
        self.report
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::all()
    }
}

impl<O: Outcome> Extend<O> for Collector {
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        for outcome in iter {
            if !self.push(outcome) {
                break;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
