//! Number builders
//!
//! [`NumBuilder`] covers anything ordered and printable, floats included.
//! [`IntBuilder`] adds the sign, zero and divisibility checks that only make
//! sense for [`Integer`] types.

use std::borrow::Cow;
use std::fmt::Display;

use super::Checks;
use crate::foundation::{Outcome, Report, Validation};
use crate::validators::numeric::{self, Integer};

// ============================================================================
// NUMBER BUILDER
// ============================================================================

/// Chains ordering checks on one number.
///
/// ```
/// use nebula_check::builders::number;
///
/// let v = number(150, "age").between(0, 120).build().unwrap();
/// assert!(v.failed());
///
/// let v = number(25, "age").between(0, 120).build().unwrap();
/// assert_eq!(v.validators(), ["min", "max"]);
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct NumBuilder<T> {
    value: T,
    checks: Checks,
}

impl<T> NumBuilder<T>
where
    T: PartialOrd + Display + Copy,
{
    /// Starts a chain for `value`.
    pub fn new(value: T, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            checks: Checks::new(field),
        }
    }

    /// Returns the value under validation.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        self.checks.field_name()
    }

    /// Applies `chain` only when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(self, condition: bool, chain: impl FnOnce(Self) -> Self) -> Self {
        if condition { chain(self) } else { self }
    }

    /// Runs an arbitrary check with the value and field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(mut self, check: impl FnOnce(T, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        let outcome = check(self.value, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::min`].
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: T) -> Self {
        self.checks.record(numeric::min(self.value, min, self.checks.field()));
        self
    }

    /// See [`numeric::max`].
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: T) -> Self {
        self.checks.record(numeric::max(self.value, max, self.checks.field()));
        self
    }

    /// See [`numeric::between`].
    #[must_use = "builder methods must be chained or built"]
    pub fn between(mut self, min: T, max: T) -> Self {
        let outcome = numeric::between(self.value, min, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::between_exclusive`].
    #[must_use = "builder methods must be chained or built"]
    pub fn between_exclusive(mut self, min: T, max: T) -> Self {
        let outcome = numeric::between_exclusive(self.value, min, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::greater_than`].
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than(mut self, threshold: T) -> Self {
        let outcome = numeric::greater_than(self.value, threshold, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::less_than`].
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than(mut self, threshold: T) -> Self {
        let outcome = numeric::less_than(self.value, threshold, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::greater_than_or_equal`].
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than_or_equal(mut self, threshold: T) -> Self {
        let outcome = numeric::greater_than_or_equal(self.value, threshold, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::less_than_or_equal`].
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than_or_equal(mut self, threshold: T) -> Self {
        let outcome = numeric::less_than_or_equal(self.value, threshold, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::one_of`].
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of(mut self, allowed: &[T]) -> Self {
        let outcome = numeric::one_of(&self.value, allowed, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::not_one_of`].
    #[must_use = "builder methods must be chained or built"]
    pub fn not_one_of(mut self, disallowed: &[T]) -> Self {
        let outcome = numeric::not_one_of(&self.value, disallowed, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// Merges every recorded outcome; `None` if nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.checks.build()
    }
}

impl<T> Outcome for NumBuilder<T>
where
    T: PartialOrd + Display + Copy,
{
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts a [`NumBuilder`].
pub fn number<T>(value: T, field: impl Into<Cow<'static, str>>) -> NumBuilder<T>
where
    T: PartialOrd + Display + Copy,
{
    NumBuilder::new(value, field)
}

// ============================================================================
// INTEGER BUILDER
// ============================================================================

/// Chains integer checks on one value.
///
/// ```
/// use nebula_check::builders::integer;
///
/// let v = integer(7, "batch").positive().multiple_of(4).build().unwrap();
/// assert_eq!(v.validators(), ["gt", "multipleof"]);
/// assert_eq!(v.error().unwrap().to_string(), "batch: must be a multiple of 4");
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct IntBuilder<T> {
    value: T,
    checks: Checks,
}

impl<T: Integer> IntBuilder<T> {
    /// Starts a chain for `value`.
    pub fn new(value: T, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            checks: Checks::new(field),
        }
    }

    /// Returns the value under validation.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        self.checks.field_name()
    }

    /// Applies `chain` only when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(self, condition: bool, chain: impl FnOnce(Self) -> Self) -> Self {
        if condition { chain(self) } else { self }
    }

    /// Runs an arbitrary check with the value and field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(mut self, check: impl FnOnce(T, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        let outcome = check(self.value, self.checks.field());
        self.checks.record(outcome);
        self
    }

    leaf_methods! {
        /// See [`numeric::positive`].
        positive => numeric::positive;
        /// See [`numeric::negative`].
        negative => numeric::negative;
        /// See [`numeric::non_negative`].
        non_negative => numeric::non_negative;
        /// See [`numeric::non_positive`].
        non_positive => numeric::non_positive;
        /// See [`numeric::zero`].
        zero => numeric::zero;
        /// See [`numeric::non_zero`].
        non_zero => numeric::non_zero;
        /// See [`numeric::even`].
        even => numeric::even;
        /// See [`numeric::odd`].
        odd => numeric::odd;
    }

    /// See [`numeric::min`].
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: T) -> Self {
        self.checks.record(numeric::min(self.value, min, self.checks.field()));
        self
    }

    /// See [`numeric::max`].
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: T) -> Self {
        self.checks.record(numeric::max(self.value, max, self.checks.field()));
        self
    }

    /// See [`numeric::between`].
    #[must_use = "builder methods must be chained or built"]
    pub fn between(mut self, min: T, max: T) -> Self {
        let outcome = numeric::between(self.value, min, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`numeric::multiple_of`]. A zero divisor fails the field.
    #[must_use = "builder methods must be chained or built"]
    pub fn multiple_of(mut self, divisor: T) -> Self {
        let outcome = numeric::multiple_of(self.value, divisor, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// Merges every recorded outcome; `None` if nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.checks.build()
    }
}

impl<T: Integer> Outcome for IntBuilder<T> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts an [`IntBuilder`].
pub fn integer<T: Integer>(value: T, field: impl Into<Cow<'static, str>>) -> IntBuilder<T> {
    IntBuilder::new(value, field)
}

// ============================================================================
// OPTIONAL FORMS
// ============================================================================

/// A [`NumBuilder`] over a value that may be absent.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct OptNumBuilder<T> {
    inner: Option<NumBuilder<T>>,
}

impl<T> OptNumBuilder<T>
where
    T: PartialOrd + Display + Copy,
{
    /// Starts a chain for an optional `value`.
    pub fn new(value: Option<T>, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: value.map(|v| NumBuilder::new(v, field)),
        }
    }

    /// Applies `chain` only when the value is present and `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(self, condition: bool, chain: impl FnOnce(NumBuilder<T>) -> NumBuilder<T>) -> Self {
        Self {
            inner: self.inner.map(|b| b.when(condition, chain)),
        }
    }

    /// Runs an arbitrary check when the value is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(self, check: impl FnOnce(T, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        Self {
            inner: self.inner.map(|b| b.check(check)),
        }
    }

    optional_methods! {
        /// See [`NumBuilder::min`].
        min(min: T);
        /// See [`NumBuilder::max`].
        max(max: T);
        /// See [`NumBuilder::between`].
        between(min: T, max: T);
        /// See [`NumBuilder::between_exclusive`].
        between_exclusive(min: T, max: T);
        /// See [`NumBuilder::greater_than`].
        greater_than(threshold: T);
        /// See [`NumBuilder::less_than`].
        less_than(threshold: T);
        /// See [`NumBuilder::greater_than_or_equal`].
        greater_than_or_equal(threshold: T);
        /// See [`NumBuilder::less_than_or_equal`].
        less_than_or_equal(threshold: T);
        /// See [`NumBuilder::one_of`].
        one_of(allowed: &[T]);
        /// See [`NumBuilder::not_one_of`].
        not_one_of(disallowed: &[T]);
    }

    /// Merges every recorded outcome; `None` if absent or nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.inner.and_then(NumBuilder::build)
    }
}

impl<T> Outcome for OptNumBuilder<T>
where
    T: PartialOrd + Display + Copy,
{
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts an [`OptNumBuilder`].
pub fn opt_number<T>(value: Option<T>, field: impl Into<Cow<'static, str>>) -> OptNumBuilder<T>
where
    T: PartialOrd + Display + Copy,
{
    OptNumBuilder::new(value, field)
}

/// An [`IntBuilder`] over a value that may be absent.
///
/// ```
/// use nebula_check::builders::opt_integer;
///
/// let retries: Option<u32> = None;
/// assert!(opt_integer(retries, "retries").max(10).build().is_none());
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct OptIntBuilder<T> {
    inner: Option<IntBuilder<T>>,
}

impl<T: Integer> OptIntBuilder<T> {
    /// Starts a chain for an optional `value`.
    pub fn new(value: Option<T>, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: value.map(|v| IntBuilder::new(v, field)),
        }
    }

    /// Applies `chain` only when the value is present and `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(self, condition: bool, chain: impl FnOnce(IntBuilder<T>) -> IntBuilder<T>) -> Self {
        Self {
            inner: self.inner.map(|b| b.when(condition, chain)),
        }
    }

    /// Runs an arbitrary check when the value is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(self, check: impl FnOnce(T, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        Self {
            inner: self.inner.map(|b| b.check(check)),
        }
    }

    optional_methods! {
        /// See [`IntBuilder::min`].
        min(min: T);
        /// See [`IntBuilder::max`].
        max(max: T);
        /// See [`IntBuilder::between`].
        between(min: T, max: T);
        /// See [`IntBuilder::positive`].
        positive();
        /// See [`IntBuilder::negative`].
        negative();
        /// See [`IntBuilder::non_negative`].
        non_negative();
        /// See [`IntBuilder::non_positive`].
        non_positive();
        /// See [`IntBuilder::zero`].
        zero();
        /// See [`IntBuilder::non_zero`].
        non_zero();
        /// See [`IntBuilder::multiple_of`].
        multiple_of(divisor: T);
        /// See [`IntBuilder::even`].
        even();
        /// See [`IntBuilder::odd`].
        odd();
    }

    /// Merges every recorded outcome; `None` if absent or nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.inner.and_then(IntBuilder::build)
    }
}

impl<T: Integer> Outcome for OptIntBuilder<T> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts an [`OptIntBuilder`].
pub fn opt_integer<T: Integer>(
    value: Option<T>,
    field: impl Into<Cow<'static, str>>,
) -> OptIntBuilder<T> {
    OptIntBuilder::new(value, field)
}

// ============================================================================
// TESTS
// ============================================================================
