//! MERGE combinator - joins independent reports

use super::Collector;
use crate::foundation::Report;

/// Concatenates reports in order.
///
/// Applied lists are concatenated per field; failures are flattened in
/// report order, then in order within each report.
///
/// # Examples
///
/// ```
/// use nebula_check::combinators::{all, merge};
/// use nebula_check::Validation;
///
/// let user = all([Validation::fail("email", "is required", "required")]);
/// let address = all([Validation::fail("zip", "is required", "required")]);
///
/// let report = merge([user, address]);
/// assert_eq!(report.field_names(), vec!["email", "zip"]);
/// ```
pub fn merge<I>(reports: I) -> Report
where
    I: IntoIterator<Item = Report>,
{
    let mut collector = Collector::all();
    collector.extend(reports);
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::all;
    use crate::foundation::Validation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_empty_passes() {
        assert!(merge(Vec::new()).is_ok());
    }

    #[test]
    fn test_merge_concatenates_applied_lists() {
        let left = all([Validation::pass("name", "required")]);
        let right = all([Validation::fail("name", "is too short", "min")]);

        let report = merge([left, right]);
        assert_eq!(report.validators("name"), ["required", "min"]);
        assert_eq!(report.err().unwrap().to_string(), "name: is too short");
    }

    #[test]
    fn test_merge_passing_reports_stay_passing() {
        let report = merge([
            all([Validation::pass("a", "x")]),
            all([Validation::pass("b", "y")]),
        ]);
        assert!(report.is_ok());
        assert!(report.was_validated("b"));
    }
}
