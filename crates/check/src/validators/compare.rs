//! Equality and cross-field comparison validators
//!
//! The `*_field` forms compare against another field's value and name that
//! field in the message, e.g. `"password_confirm: must equal password"`.

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::Validation;

/// Validates `value == expected`.
pub fn equal<T>(value: &T, expected: &T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialEq + Display + ?Sized,
{
    Validation::check(value == expected, field, &["eq"], || {
        format!("must equal {expected}")
    })
}

/// Validates `value != other`.
pub fn not_equal<T>(value: &T, other: &T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialEq + Display + ?Sized,
{
    Validation::check(value != other, field, &["ne"], || {
        format!("must not equal {other}")
    })
}

// ============================================================================
// CROSS-FIELD
// ============================================================================

/// Validates that `value` equals the value of `other_field`.
///
/// ```
/// use nebula_check::validators::compare::equal_field;
///
/// let v = equal_field("hunter2", "hunter3", "password_confirm", "password");
/// assert_eq!(
///     v.error().unwrap().to_string(),
///     "password_confirm: must equal password",
/// );
/// ```
pub fn equal_field<T>(
    value: T,
    other: T,
    field: impl Into<Cow<'static, str>>,
    other_field: &str,
) -> Validation
where
    T: PartialEq,
{
    Validation::check(value == other, field, &["eqfield"], || {
        format!("must equal {other_field}")
    })
}

/// Validates that `value` differs from the value of `other_field`.
pub fn not_equal_field<T>(
    value: T,
    other: T,
    field: impl Into<Cow<'static, str>>,
    other_field: &str,
) -> Validation
where
    T: PartialEq,
{
    Validation::check(value != other, field, &["nefield"], || {
        format!("must not equal {other_field}")
    })
}

/// Validates that `value` is greater than the value of `other_field`.
pub fn greater_than_field<T>(
    value: T,
    other: T,
    field: impl Into<Cow<'static, str>>,
    other_field: &str,
) -> Validation
where
    T: PartialOrd,
{
    Validation::check(value > other, field, &["gtfield"], || {
        format!("must be greater than {other_field}")
    })
}

/// Validates that `value` is less than the value of `other_field`.
pub fn less_than_field<T>(
    value: T,
    other: T,
    field: impl Into<Cow<'static, str>>,
    other_field: &str,
) -> Validation
where
    T: PartialOrd,
{
    Validation::check(value < other, field, &["ltfield"], || {
        format!("must be less than {other_field}")
    })
}

/// Validates that `value` is at least the value of `other_field`.
pub fn greater_than_or_equal_field<T>(
    value: T,
    other: T,
    field: impl Into<Cow<'static, str>>,
    other_field: &str,
) -> Validation
where
    T: PartialOrd,
{
    Validation::check(value >= other, field, &["gtefield"], || {
        format!("must be greater than or equal to {other_field}")
    })
}

/// Validates that `value` is at most the value of `other_field`.
pub fn less_than_or_equal_field<T>(
    value: T,
    other: T,
    field: impl Into<Cow<'static, str>>,
    other_field: &str,
) -> Validation
where
    T: PartialOrd,
{
    Validation::check(value <= other, field, &["ltefield"], || {
        format!("must be less than or equal to {other_field}")
    })
}
