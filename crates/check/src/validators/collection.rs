//! Slice validators
//!
//! Size, membership and set-relation checks over slices, plus element-wise
//! validation that produces a [`Report`].

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;

use crate::combinators;
use crate::foundation::{Report, Validation};

// ============================================================================
// SIZE
// ============================================================================

/// Validates that a slice has at least one element.
pub fn not_empty<T>(value: &[T], field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(!value.is_empty(), field, &["required"], || "must not be empty")
}

/// Validates that a slice has no elements.
pub fn empty<T>(value: &[T], field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.is_empty(), field, &["empty"], || "must be empty")
}

/// Validates a minimum element count.
pub fn min_items<T>(value: &[T], min: usize, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.len() >= min, field, &["minitems"], || {
        format!("must have at least {min} items")
    })
}

/// Validates a maximum element count.
pub fn max_items<T>(value: &[T], max: usize, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.len() <= max, field, &["maxitems"], || {
        format!("must have at most {max} items")
    })
}

/// Validates an exact element count.
pub fn exact_items<T>(value: &[T], count: usize, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.len() == count, field, &["len"], || {
        format!("must have exactly {count} items")
    })
}

/// Validates an inclusive element-count range. Records `minitems` and `maxitems`.
pub fn items_between<T>(
    value: &[T],
    min: usize,
    max: usize,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(
        (min..=max).contains(&value.len()),
        field,
        &["minitems", "maxitems"],
        || format!("must have between {min} and {max} items"),
    )
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Validates that no element appears twice.
///
/// ```
/// use nebula_check::validators::collection::unique;
///
/// assert!(unique(&["go", "rust", "ok"], "langs").passed());
/// assert!(unique(&["go", "rust", "go"], "langs").failed());
/// ```
pub fn unique<T: Eq + Hash>(value: &[T], field: impl Into<Cow<'static, str>>) -> Validation {
    let mut seen = HashSet::with_capacity(value.len());
    let ok = value.iter().all(|item| seen.insert(item));
    Validation::check(ok, field, &["unique"], || "must have unique items")
}

/// Validates that `element` is present.
pub fn contains<T: PartialEq>(
    value: &[T],
    element: &T,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value.contains(element), field, &["contains"], || {
        "must contain the required element"
    })
}

/// Validates that `element` is absent.
pub fn not_contains<T: PartialEq>(
    value: &[T],
    element: &T,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(!value.contains(element), field, &["excludes"], || {
        "must not contain the forbidden element"
    })
}

/// Validates that every one of `required` is present.
pub fn contains_all<T: Eq + Hash>(
    value: &[T],
    required: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let set: HashSet<&T> = value.iter().collect();
    let ok = required.iter().all(|r| set.contains(r));
    Validation::check(ok, field, &["containsall"], || {
        "must contain all required elements"
    })
}

/// Validates that at least one of `options` is present.
pub fn contains_any<T: Eq + Hash>(
    value: &[T],
    options: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let set: HashSet<&T> = value.iter().collect();
    let ok = options.iter().any(|o| set.contains(o));
    Validation::check(ok, field, &["containsany"], || {
        "must contain at least one of the required elements"
    })
}

/// Validates that none of `forbidden` is present.
pub fn contains_none<T: Eq + Hash>(
    value: &[T],
    forbidden: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let set: HashSet<&T> = value.iter().collect();
    let ok = !forbidden.iter().any(|f| set.contains(f));
    Validation::check(ok, field, &["excludesall"], || {
        "must not contain any forbidden elements"
    })
}

/// Validates that every element of `value` appears in `superset`.
pub fn subset<T: Eq + Hash>(
    value: &[T],
    superset: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let set: HashSet<&T> = superset.iter().collect();
    let ok = value.iter().all(|v| set.contains(v));
    Validation::check(ok, field, &["subset"], || {
        "must be a subset of the allowed values"
    })
}

/// Validates that `value` and `other` share no element.
pub fn disjoint<T: Eq + Hash>(
    value: &[T],
    other: &[T],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let set: HashSet<&T> = other.iter().collect();
    let ok = !value.iter().any(|v| set.contains(v));
    Validation::check(ok, field, &["disjoint"], || {
        "must not share elements with the other set"
    })
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Validates that every element satisfies `predicate`; fails with `message`.
pub fn all_satisfy<T>(
    value: &[T],
    predicate: impl FnMut(&T) -> bool,
    field: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = value.iter().all(predicate);
    Validation::check(ok, field, &["all"], || message)
}

/// Validates that some element satisfies `predicate`; fails with `message`.
pub fn any_satisfies<T>(
    value: &[T],
    predicate: impl FnMut(&T) -> bool,
    field: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = value.iter().any(predicate);
    Validation::check(ok, field, &["any"], || message)
}

/// Validates that no element satisfies `predicate`; fails with `message`.
pub fn none_satisfy<T>(
    value: &[T],
    predicate: impl FnMut(&T) -> bool,
    field: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = !value.iter().any(predicate);
    Validation::check(ok, field, &["none"], || message)
}

// ============================================================================
// ELEMENT-WISE
// ============================================================================

/// Runs `check` on every element with its index and aggregates with [`all`](combinators::all).
///
/// ```
/// use nebula_check::validators::{collection, text};
///
/// let tags = ["ok", "", "fine"];
/// let report = collection::each(&tags, |tag, i| text::required(tag, format!("tags[{i}]")));
/// assert_eq!(report.field_names(), vec!["tags[1]"]);
/// ```
pub fn each<T, R>(value: &[T], mut check: impl FnMut(&T, usize) -> R) -> Report
where
    R: Into<Option<Validation>>,
{
    combinators::all(value.iter().enumerate().map(|(i, item)| check(item, i)))
}

/// Runs `check` on every element and aggregates with [`all`](combinators::all).
pub fn each_value<T, R>(value: &[T], check: impl FnMut(&T) -> R) -> Report
where
    R: Into<Option<Validation>>,
{
    combinators::all(value.iter().map(check))
}

// ============================================================================
// TESTS
// ============================================================================
