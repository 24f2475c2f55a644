//! Numeric validators
//!
//! Generic over the [`Number`] / [`Integer`] / [`Float`] taxonomy, which is
//! implemented for every primitive numeric type. Ordering checks only need
//! `PartialOrd + Display` so they also accept non-primitive ordered types.

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::Validation;

// ============================================================================
// NUMERIC TRAITS
// ============================================================================

/// A primitive numeric type.
pub trait Number: Copy + PartialOrd + Display {
    /// Additive identity.
    const ZERO: Self;
    /// One hundred, the upper bound of a percentage.
    const HUNDRED: Self;
}

/// A primitive integer type.
pub trait Integer: Number + Eq {
    /// Two, for parity checks.
    const TWO: Self;

    /// Remainder that returns `None` instead of panicking on a zero divisor
    /// or on overflow (`MIN % -1`).
    fn checked_rem(self, rhs: Self) -> Option<Self>;
}

/// A primitive floating-point type.
pub trait Float: Number {
    /// Returns true if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// Returns true if the value is NaN.
    fn is_nan(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const HUNDRED: Self = 100;
        }

        impl Integer for $t {
            const TWO: Self = 2;

            #[inline]
            fn checked_rem(self, rhs: Self) -> Option<Self> {
                <$t>::checked_rem(self, rhs)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const HUNDRED: Self = 100.0;
        }

        impl Float for $t {
            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

// ============================================================================
// BOUNDS
// ============================================================================

/// Validates `value >= min`.
pub fn min<T>(value: T, min: T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value >= min, field, &["min"], || {
        format!("must be at least {min}")
    })
}

/// Validates `value <= max`.
pub fn max<T>(value: T, max: T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value <= max, field, &["max"], || {
        format!("must be at most {max}")
    })
}

/// Validates `min <= value <= max`. Records both `min` and `max`.
///
/// ```
/// use nebula_check::validators::numeric::between;
///
/// let v = between(150, 0, 120, "age");
/// assert_eq!(v.error().unwrap().to_string(), "age: must be between 0 and 120");
/// ```
pub fn between<T>(value: T, min: T, max: T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value >= min && value <= max, field, &["min", "max"], || {
        format!("must be between {min} and {max}")
    })
}

/// Validates `min < value < max`. Records `gt` and `lt`.
pub fn between_exclusive<T>(
    value: T,
    min: T,
    max: T,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value > min && value < max, field, &["gt", "lt"], || {
        format!("must be between {min} and {max} (exclusive)")
    })
}

/// Validates `value > threshold`.
pub fn greater_than<T>(value: T, threshold: T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value > threshold, field, &["gt"], || {
        format!("must be greater than {threshold}")
    })
}

/// Validates `value < threshold`.
pub fn less_than<T>(value: T, threshold: T, field: impl Into<Cow<'static, str>>) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value < threshold, field, &["lt"], || {
        format!("must be less than {threshold}")
    })
}

/// Validates `value >= threshold`.
pub fn greater_than_or_equal<T>(
    value: T,
    threshold: T,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value >= threshold, field, &["gte"], || {
        format!("must be greater than or equal to {threshold}")
    })
}

/// Validates `value <= threshold`.
pub fn less_than_or_equal<T>(
    value: T,
    threshold: T,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    T: PartialOrd + Display,
{
    Validation::check(value <= threshold, field, &["lte"], || {
        format!("must be less than or equal to {threshold}")
    })
}

// ============================================================================
// SIGN AND ZERO
// ============================================================================

/// Validates `value > 0`.
pub fn positive<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value > T::ZERO, field, &["gt"], || "must be positive")
}

/// Validates `value < 0`.
pub fn negative<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value < T::ZERO, field, &["lt"], || "must be negative")
}

/// Validates `value >= 0`.
pub fn non_negative<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value >= T::ZERO, field, &["gte"], || "must not be negative")
}

/// Validates `value <= 0`.
pub fn non_positive<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value <= T::ZERO, field, &["lte"], || "must not be positive")
}

/// Validates `value == 0`.
pub fn zero<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value == T::ZERO, field, &["eq"], || "must be zero")
}

/// Validates `value != 0`.
pub fn non_zero<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value != T::ZERO, field, &["ne"], || "must not be zero")
}

// ============================================================================
// DIVISIBILITY
// ============================================================================

/// Validates that `value` is a multiple of `divisor`.
///
/// A zero divisor is reported as an ordinary failure on the field.
pub fn multiple_of<T: Integer>(
    value: T,
    divisor: T,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let field = field.into();
    if divisor == T::ZERO {
        return Validation::fail(field, "divisor must not be zero", "multipleof");
    }
    // None here means MIN % -1, which is mathematically zero.
    let remainder = value.checked_rem(divisor).unwrap_or(T::ZERO);
    Validation::check(remainder == T::ZERO, field, &["multipleof"], || {
        format!("must be a multiple of {divisor}")
    })
}

/// Validates that `value` is even.
pub fn even<T: Integer>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    let even = value.checked_rem(T::TWO) == Some(T::ZERO);
    Validation::check(even, field, &["even"], || "must be even")
}

/// Validates that `value` is odd.
pub fn odd<T: Integer>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    let even = value.checked_rem(T::TWO) == Some(T::ZERO);
    Validation::check(!even, field, &["odd"], || "must be odd")
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Validates that `value` equals one of `allowed`.
pub fn one_of<T: PartialEq>(
    value: &T,
    allowed: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(allowed.contains(value), field, &["oneof"], || {
        "must be one of the allowed values"
    })
}

/// Validates that `value` equals none of `disallowed`.
pub fn not_one_of<T: PartialEq>(
    value: &T,
    disallowed: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(!disallowed.contains(value), field, &["notoneof"], || {
        "must not be one of the disallowed values"
    })
}

// ============================================================================
// DOMAIN RANGES
// ============================================================================

/// Validates `0 <= value <= 100`. Records `min` and `max`.
pub fn percentage<T: Number>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(
        value >= T::ZERO && value <= T::HUNDRED,
        field,
        &["min", "max"],
        || "must be a percentage (0-100)",
    )
}

/// Validates a TCP/UDP port number (1-65535).
pub fn port_number(value: impl Into<i64>, field: impl Into<Cow<'static, str>>) -> Validation {
    let value = value.into();
    Validation::check((1..=65_535).contains(&value), field, &["port"], || {
        "must be a valid port number (1-65535)"
    })
}

/// Validates an HTTP status code (100-599).
pub fn http_status_code(value: impl Into<i64>, field: impl Into<Cow<'static, str>>) -> Validation {
    let value = value.into();
    Validation::check((100..=599).contains(&value), field, &["httpstatus"], || {
        "must be a valid HTTP status code (100-599)"
    })
}

// ============================================================================
// FLOATS
// ============================================================================

/// Validates that a float is neither infinite nor NaN.
pub fn finite<T: Float>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.is_finite(), field, &["finite"], || "must be a finite number")
}

/// Validates that a float is not NaN.
pub fn not_nan<T: Float>(value: T, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(!value.is_nan(), field, &["notnan"], || "must be a number")
}

// ============================================================================
// TESTS
// ============================================================================
