//! FIRST combinator - fail-fast aggregation

use super::Collector;
use crate::foundation::{Report, Validation};

/// Aggregates outcomes until the first failure.
///
/// The iterator is consumed lazily: items after the first failing outcome
/// are never produced, so they never appear in the applied map. The failing
/// outcome itself is recorded.
///
/// # Examples
///
/// ```
/// use nebula_check::combinators::first;
/// use nebula_check::Validation;
///
/// let report = first([
///     Validation::pass("a", "required"),
///     Validation::fail("b", "is invalid", "email"),
///     Validation::pass("c", "min"),
/// ]);
///
/// assert!(report.was_validated("a"));
/// assert!(report.was_validated("b"));
/// assert!(!report.was_validated("c"));
/// ```
pub fn first<I>(outcomes: I) -> Report
where
    I: IntoIterator,
    I::Item: Into<Option<Validation>>,
{
    let mut collector = Collector::first();
    for outcome in outcomes {
        if !collector.push(Into::<Option<Validation>>::into(outcome)) {
            break;
        }
    }
    collector.finish()
}
