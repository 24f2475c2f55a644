//! The aggregate produced by combining outcomes.

use std::borrow::Cow;

use indexmap::IndexMap;

use super::error::{Errors, Failure, FieldError};
use super::validation::Validation;

/// Field name → validator identifiers evaluated for that field.
///
/// Insertion-ordered; duplicates are kept because this is tracking, not a set.
pub type AppliedMap = IndexMap<Cow<'static, str>, Vec<Cow<'static, str>>>;

// ============================================================================
// REPORT
// ============================================================================

/// The result of aggregating many outcomes.
///
/// Holds the collected failures (absent when everything passed) and the
/// map of validators applied per field. The applied map includes passing
/// outcomes, which is what makes "was field X validated at all" queries
/// possible.
///
/// # Examples
///
/// ```
/// use nebula_check::all;
/// use nebula_check::validators::{numeric, text};
///
/// let report = all!(
///     text::required("", "email"),
///     numeric::between(5, 13, 120, "age"),
/// );
///
/// assert!(report.failed());
/// assert!(report.has_field_error("email"));
/// assert!(report.has_validator("age", "max"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    errors: Option<Errors>,
    applied: AppliedMap,
}

impl Report {
    /// Creates an empty, passing report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a report from parts. An empty error set counts as passing.
    #[must_use]
    pub fn from_parts(errors: Errors, applied: AppliedMap) -> Self {
        Self {
            errors: (!errors.is_empty()).then_some(errors),
            applied,
        }
    }

    /// Returns the collected failures, or `None` if everything passed.
    #[must_use]
    pub fn err(&self) -> Option<&Errors> {
        self.errors.as_ref()
    }

    /// Returns true if everything passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_none()
    }

    /// Returns true if anything failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.errors.is_some()
    }

    /// Converts the report into a `Result`, dropping the applied map.
    pub fn into_result(self) -> Result<(), Errors> {
        match self.errors {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    /// Consumes the report into `(errors, applied)`.
    pub fn into_parts(self) -> (Option<Errors>, AppliedMap) {
        (self.errors, self.applied)
    }

    /// Returns the validators applied per field.
    #[must_use]
    pub fn applied(&self) -> &AppliedMap {
        &self.applied
    }

    /// Returns the validators applied to `field`, empty if it was never checked.
    #[must_use]
    pub fn validators(&self, field: &str) -> &[Cow<'static, str>] {
        self.applied.get(field).map_or(&[], Vec::as_slice)
    }

    /// Returns true if any validator was applied to `field`.
    #[must_use]
    pub fn was_validated(&self, field: &str) -> bool {
        self.applied.contains_key(field)
    }

    /// Returns true if `validator` was applied to `field`.
    #[must_use]
    pub fn has_validator(&self, field: &str, validator: &str) -> bool {
        self.validators(field).iter().any(|v| v == validator)
    }

    /// Returns true if any failure targets `field`.
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.as_ref().is_some_and(|e| e.has_field(field))
    }

    /// Returns the field path of every failure, one entry per failure.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.errors
            .as_ref()
            .map(Errors::field_names)
            .unwrap_or_default()
    }

    /// Returns every failure as a flat slice.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        self.errors.as_ref().map_or(&[], Errors::as_slice)
    }

    /// Appends applied validators for `field`.
    pub(crate) fn track<I>(&mut self, field: Cow<'static, str>, validators: I)
    where
        I: IntoIterator<Item = Cow<'static, str>>,
    {
        self.applied.entry(field).or_default().extend(validators);
    }

    /// Appends a failure, flattening sets.
    pub(crate) fn push_failure(&mut self, failure: Failure) {
        self.errors.get_or_insert_with(Errors::new).push_failure(failure);
    }

    /// Folds a validation in; returns true if it carried a failure.
    pub(crate) fn absorb_validation(&mut self, validation: Validation) -> bool {
        let (error, field, validators) = validation.into_parts();
        self.track(field, validators);
        match error {
            Some(failure) => {
                self.push_failure(failure);
                true
            }
            None => false,
        }
    }

    /// Folds another report in; returns true if it carried failures.
    pub(crate) fn absorb_report(&mut self, other: Report) -> bool {
        let (errors, applied) = other.into_parts();
        for (field, validators) in applied {
            self.track(field, validators);
        }
        match errors {
            Some(errors) => {
                self.errors.get_or_insert_with(Errors::new).append(errors);
                true
            }
            None => false,
        }
    }
}

impl From<Validation> for Report {
    fn from(validation: Validation) -> Self {
        let mut report = Report::new();
        report.absorb_validation(validation);
        report
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Anything that can be folded into a [`Report`].
///
/// Implemented for [`Validation`], `Option<Validation>` (absent is a no-op),
/// [`Report`] (its failures are flattened and its applied map is
/// concatenated) and every builder (through its terminal `build()`).
pub trait Outcome {
    /// Folds `self` into `report`, returning true if it carried a failure.
    fn fold_into(self, report: &mut Report) -> bool;
}

impl Outcome for Validation {
    fn fold_into(self, report: &mut Report) -> bool {
        report.absorb_validation(self)
    }
}

impl Outcome for Option<Validation> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.is_some_and(|v| report.absorb_validation(v))
    }
}

impl Outcome for Report {
    fn fold_into(self, report: &mut Report) -> bool {
        report.absorb_report(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_report_passes() {
        let report = Report::new();
        assert!(report.is_ok());
        assert!(report.err().is_none());
        assert!(report.field_errors().is_empty());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_from_parts_normalises_empty_errors() {
        let report = Report::from_parts(Errors::new(), AppliedMap::new());
        assert!(report.is_ok());
    }

    #[test]
    fn test_absorb_tracks_passing_validations() {
        let mut report = Report::new();
        assert!(!report.absorb_validation(Validation::pass("name", "required")));
        assert!(report.absorb_validation(Validation::fail("age", "too young", "min")));

        assert!(report.was_validated("name"));
        assert!(report.has_validator("age", "min"));
        assert!(!report.has_validator("age", "max"));
        assert_eq!(report.field_names(), vec!["age"]);
        assert!(!report.has_field_error("name"));
    }

    #[test]
    fn test_validators_for_unknown_field_is_empty() {
        let report = Report::new();
        assert!(report.validators("ghost").is_empty());
        assert!(!report.was_validated("ghost"));
    }

    #[test]
    fn test_absorb_report_concatenates() {
        let mut left = Report::from(Validation::pass("name", "required"));
        let right = Report::from(Validation::fail("name", "too short", "min"));

        assert!(left.absorb_report(right));
        assert_eq!(left.validators("name"), ["required", "min"]);
        assert_eq!(left.field_errors().len(), 1);
    }

    #[test]
    fn test_option_outcome_none_is_noop() {
        let mut report = Report::new();
        assert!(!None::<Validation>.fold_into(&mut report));
        assert!(report.applied().is_empty());
    }
}
