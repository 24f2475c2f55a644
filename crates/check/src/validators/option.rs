//! Validators for optional values
//!
//! [`required_then`] is the one place where two checks merge into a single
//! outcome: the inner check's identifiers are recorded behind `"required"`
//! so "was this field's presence checked" can be answered from one entry.

use std::borrow::Cow;

use crate::foundation::Validation;

/// Validates that a value is present.
pub fn present<T>(value: Option<&T>, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.is_some(), field, &["required"], || "must be provided")
}

/// Validates that a value is absent.
pub fn absent<T>(value: Option<&T>, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.is_none(), field, &["absent"], || "must not be provided")
}

/// Runs `check` only when the value is present; an absent value records nothing.
///
/// ```
/// use nebula_check::validators::{option, text};
///
/// let middle: Option<&str> = None;
/// assert!(option::optional(middle, |m| text::max_len(m, 100, "middle_name")).is_none());
/// ```
pub fn optional<T, R>(value: Option<T>, check: impl FnOnce(T) -> R) -> Option<Validation>
where
    R: Into<Option<Validation>>,
{
    value.and_then(|v| check(v).into())
}

/// Like [`optional`], passing `field` through to `check`.
pub fn optional_field<T, R>(
    value: Option<T>,
    check: impl FnOnce(T, Cow<'static, str>) -> R,
    field: impl Into<Cow<'static, str>>,
) -> Option<Validation>
where
    R: Into<Option<Validation>>,
{
    value.and_then(|v| check(v, field.into()).into())
}

/// Requires a value, then validates it.
///
/// - absent: fails with `"is required"`, identifiers `["required"]`; `check`
///   is not invoked
/// - present, `check` records nothing: passes with `["required"]`
/// - present otherwise: `check`'s failure is kept and `"required"` is put in
///   front of its identifiers
///
/// ```
/// use nebula_check::validators::{numeric, option};
///
/// let age = Some(-3);
/// let v = option::required_then(age, |a| numeric::positive(a, "age"), "age");
/// assert_eq!(v.validators(), ["required", "gt"]);
/// assert!(v.failed());
/// ```
pub fn required_then<T, R>(
    value: Option<T>,
    check: impl FnOnce(T) -> R,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    R: Into<Option<Validation>>,
{
    let field = field.into();
    match value {
        None => Validation::fail(field, "is required", "required"),
        Some(v) => finish_required(check(v).into(), field),
    }
}

/// Like [`required_then`], passing `field` through to `check`.
pub fn required_then_field<T, R>(
    value: Option<T>,
    check: impl FnOnce(T, Cow<'static, str>) -> R,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    R: Into<Option<Validation>>,
{
    let field = field.into();
    match value {
        None => Validation::fail(field, "is required", "required"),
        Some(v) => finish_required(check(v, field.clone()).into(), field),
    }
}

fn finish_required(inner: Option<Validation>, field: Cow<'static, str>) -> Validation {
    match inner {
        None => Validation::pass(field, "required"),
        Some(inner) => {
            let (error, _, applied) = inner.into_parts();
            Validation::with_validators(error, field, "required", applied)
        }
    }
}

/// Validates `value`, or `default` when it is absent.
pub fn default_or<T, R>(value: Option<T>, default: T, check: impl FnOnce(T) -> R) -> R {
    check(value.unwrap_or(default))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{numeric, text};

    #[test]
    fn test_present_and_absent() {
        assert!(present(Some(&1), "f").passed());
        let v = present::<i32>(None, "f");
        assert_eq!(v.error().unwrap().to_string(), "f: must be provided");
        assert_eq!(v.validators(), ["required"]);
        assert!(absent::<i32>(None, "f").passed());
        assert!(absent(Some(&1), "f").failed());
    }

    #[test]
    fn test_optional_skips_absent_without_calling() {
        let v = optional(None::<i32>, |_| -> Validation { panic!("called on absent value") });
        assert!(v.is_none());

        let v = optional(Some(0), |n| numeric::positive(n, "n"));
        assert!(v.unwrap().failed());
    }

    #[test]
    fn test_optional_field_passes_field() {
        let v = optional_field(Some("x"), |s, f| text::min_len(s, 3, f), "name").unwrap();
        assert_eq!(v.field(), "name");
        assert!(v.failed());
    }

    #[test]
    fn test_required_then_absent() {
        let v = required_then(None::<i32>, |_| -> Validation { panic!("not called") }, "age");
        assert_eq!(v.validators(), ["required"]);
        assert_eq!(v.error().unwrap().to_string(), "age: is required");
        assert_eq!(v.error().unwrap().len(), 1);
    }

    #[test]
    fn test_required_then_inner_passes() {
        let v = required_then(Some(5), |a| numeric::positive(a, "age"), "age");
        assert!(v.passed());
        assert_eq!(v.validators(), ["required", "gt"]);
    }

    #[test]
    fn test_required_then_inner_records_nothing() {
        let v = required_then(Some(5), |_| None::<Validation>, "age");
        assert!(v.passed());
        assert_eq!(v.validators(), ["required"]);
    }

    #[test]
    fn test_required_then_inner_fails() {
        let v = required_then(Some(-1), |a| numeric::positive(a, "age"), "age");
        assert_eq!(v.validators(), ["required", "gt"]);
        assert_eq!(v.error().unwrap().to_string(), "age: must be positive");
    }

    #[test]
    fn test_required_then_field() {
        let v = required_then_field(Some("ab"), |s, f| text::min_len(s, 3, f), "code");
        assert_eq!(v.validators(), ["required", "min"]);
        assert!(v.failed());
    }

    #[test]
    fn test_default_or() {
        let v = default_or(None, 10, |n| numeric::max(n, 5, "limit"));
        assert!(v.failed());
        let v = default_or(Some(3), 10, |n| numeric::max(n, 5, "limit"));
        assert!(v.passed());
    }
}
