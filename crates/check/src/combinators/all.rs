//! ALL combinator - full-form aggregation

use super::Collector;
use crate::foundation::{Report, Validation};

/// Aggregates every outcome, collecting every failure.
///
/// Absent outcomes are skipped. Nothing short-circuits: the applied map
/// contains every present outcome, passing or failing.
///
/// # Examples
///
/// ```
/// use nebula_check::combinators::all;
/// use nebula_check::Validation;
///
/// let report = all([
///     Some(Validation::pass("a", "required")),
///     None,
///     Some(Validation::fail("b", "is invalid", "email")),
/// ]);
///
/// assert!(report.was_validated("a"));
/// assert_eq!(report.field_names(), vec!["b"]);
/// ```
pub fn all<I>(outcomes: I) -> Report
where
    I: IntoIterator,
    I::Item: Into<Option<Validation>>,
{
    let mut collector = Collector::all();
    for outcome in outcomes {
        collector.push(Into::<Option<Validation>>::into(outcome));
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_empty_passes() {
        assert!(all(Vec::<Validation>::new()).is_ok());
        assert!(all([None::<Validation>, None]).is_ok());
    }

    #[test]
    fn test_all_tracks_every_outcome() {
        let report = all([
            Validation::pass("a", "required"),
            Validation::fail("b", "is invalid", "email"),
            Validation::pass("c", "min"),
        ]);

        assert!(report.was_validated("a"));
        assert!(report.was_validated("b"));
        assert!(report.was_validated("c"));
        assert_eq!(report.err().map(ToString::to_string).unwrap(), "b: is invalid");
    }

    #[test]
    fn test_all_joins_messages_in_order() {
        let report = all([
            Validation::fail("a", "one", "x"),
            Validation::fail("b", "two", "y"),
        ]);
        assert_eq!(report.err().unwrap().to_string(), "a: one; b: two");
    }
}
