//! Map validators
//!
//! Size and key checks over [`HashMap`]. Element-wise forms
//! ([`each_key`], [`each_value`], [`each_entry`]) visit entries in the
//! map's iteration order, which is unspecified for `HashMap`; key the
//! field names off the entry rather than a counter.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use crate::combinators;
use crate::foundation::{Report, Validation};

// ============================================================================
// SIZE
// ============================================================================

/// Validates that a map has at least one entry.
pub fn not_empty<K, V, S>(value: &HashMap<K, V, S>, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(!value.is_empty(), field, &["required"], || "must not be empty")
}

/// Validates that a map has no entries.
pub fn empty<K, V, S>(value: &HashMap<K, V, S>, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.is_empty(), field, &["empty"], || "must be empty")
}

/// Validates a minimum key count.
pub fn min_keys<K, V, S>(
    value: &HashMap<K, V, S>,
    min: usize,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value.len() >= min, field, &["minkeys"], || {
        format!("must have at least {min} keys")
    })
}

/// Validates a maximum key count.
pub fn max_keys<K, V, S>(
    value: &HashMap<K, V, S>,
    max: usize,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value.len() <= max, field, &["maxkeys"], || {
        format!("must have at most {max} keys")
    })
}

/// Validates an exact key count.
pub fn exact_keys<K, V, S>(
    value: &HashMap<K, V, S>,
    count: usize,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value.len() == count, field, &["len"], || {
        format!("must have exactly {count} keys")
    })
}

/// Validates an inclusive key-count range. Records `minkeys` and `maxkeys`.
pub fn keys_between<K, V, S>(
    value: &HashMap<K, V, S>,
    min: usize,
    max: usize,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(
        (min..=max).contains(&value.len()),
        field,
        &["minkeys", "maxkeys"],
        || format!("must have between {min} and {max} keys"),
    )
}

// ============================================================================
// KEYS
// ============================================================================

/// Validates that `key` is present.
pub fn has_key<K, V, S>(
    value: &HashMap<K, V, S>,
    key: &K,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    K: Eq + Hash + Display,
    S: BuildHasher,
{
    Validation::check(value.contains_key(key), field, &["haskey"], || {
        format!("must contain key {key}")
    })
}

/// Validates that every one of `keys` is present.
pub fn has_keys<K, V, S>(
    value: &HashMap<K, V, S>,
    keys: &[K],
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    K: Eq + Hash,
    S: BuildHasher,
{
    let ok = keys.iter().all(|k| value.contains_key(k));
    Validation::check(ok, field, &["haskeys"], || "must contain all required keys")
}

/// Validates that at least one of `keys` is present.
pub fn has_any_key<K, V, S>(
    value: &HashMap<K, V, S>,
    keys: &[K],
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    K: Eq + Hash,
    S: BuildHasher,
{
    let ok = keys.iter().any(|k| value.contains_key(k));
    Validation::check(ok, field, &["hasanykey"], || {
        "must contain at least one of the required keys"
    })
}

/// Validates that `key` is absent.
pub fn lacks_key<K, V, S>(
    value: &HashMap<K, V, S>,
    key: &K,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    K: Eq + Hash + Display,
    S: BuildHasher,
{
    Validation::check(!value.contains_key(key), field, &["nothaskey"], || {
        format!("must not contain key {key}")
    })
}

/// Validates that none of `keys` is present.
pub fn lacks_keys<K, V, S>(
    value: &HashMap<K, V, S>,
    keys: &[K],
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    K: Eq + Hash,
    S: BuildHasher,
{
    let ok = !keys.iter().any(|k| value.contains_key(k));
    Validation::check(ok, field, &["nothaskeys"], || {
        "must not contain any of the forbidden keys"
    })
}

/// Validates that every key is one of `allowed`.
pub fn only_keys<K, V, S>(
    value: &HashMap<K, V, S>,
    allowed: &[K],
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    K: Eq + Hash,
{
    let allowed: HashSet<&K> = allowed.iter().collect();
    let ok = value.keys().all(|k| allowed.contains(k));
    Validation::check(ok, field, &["onlykeys"], || "must only contain allowed keys")
}

/// Validates that no two keys map to the same value.
pub fn unique_values<K, V, S>(
    value: &HashMap<K, V, S>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    V: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(value.len());
    let ok = value.values().all(|v| seen.insert(v));
    Validation::check(ok, field, &["unique"], || "must have unique values")
}

// ============================================================================
// ELEMENT-WISE
// ============================================================================

/// Runs `check` on every key and aggregates with [`all`](combinators::all).
pub fn each_key<K, V, S, R>(value: &HashMap<K, V, S>, check: impl FnMut(&K) -> R) -> Report
where
    R: Into<Option<Validation>>,
{
    combinators::all(value.keys().map(check))
}

/// Runs `check` on every value and aggregates with [`all`](combinators::all).
pub fn each_value<K, V, S, R>(value: &HashMap<K, V, S>, check: impl FnMut(&V) -> R) -> Report
where
    R: Into<Option<Validation>>,
{
    combinators::all(value.values().map(check))
}

/// Runs `check` on every entry and aggregates with [`all`](combinators::all).
///
/// ```
/// use std::collections::HashMap;
/// use nebula_check::validators::{map, text};
///
/// let labels = HashMap::from([("env", "prod"), ("team", "")]);
/// let report = map::each_entry(&labels, |key, value| {
///     text::required(value, format!("labels.{key}"))
/// });
/// assert_eq!(report.field_names(), vec!["labels.team"]);
/// ```
pub fn each_entry<K, V, S, R>(
    value: &HashMap<K, V, S>,
    mut check: impl FnMut(&K, &V) -> R,
) -> Report
where
    R: Into<Option<Validation>>,
{
    combinators::all(value.iter().map(|(k, v)| check(k, v)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::numeric;

    fn config() -> HashMap<&'static str, i32> {
        HashMap::from([("host", 1), ("port", 2)])
    }

    #[test]
    fn test_sizes() {
        let empty_map: HashMap<&str, i32> = HashMap::new();
        assert!(not_empty(&empty_map, "m").failed());
        assert!(empty(&empty_map, "m").passed());
        assert!(min_keys(&config(), 2, "m").passed());
        assert!(max_keys(&config(), 1, "m").failed());
        assert!(exact_keys(&config(), 2, "m").passed());
        assert_eq!(keys_between(&config(), 1, 3, "m").validators(), ["minkeys", "maxkeys"]);
    }

    #[test]
    fn test_key_checks() {
        let cfg = config();
        assert!(has_key(&cfg, &"host", "m").passed());
        assert_eq!(
            has_key(&cfg, &"user", "m").error().unwrap().to_string(),
            "m: must contain key user"
        );
        assert!(has_keys(&cfg, &["host", "port"], "m").passed());
        assert!(has_any_key(&cfg, &["user", "port"], "m").passed());
        assert!(lacks_key(&cfg, &"host", "m").failed());
        assert!(lacks_keys(&cfg, &["user"], "m").passed());
        assert!(only_keys(&cfg, &["host", "port", "user"], "m").passed());
        assert!(only_keys(&cfg, &["host"], "m").failed());
    }

    #[test]
    fn test_unique_values() {
        assert!(unique_values(&config(), "m").passed());
        let dup = HashMap::from([("a", 1), ("b", 1)]);
        assert!(unique_values(&dup, "m").failed());
    }

    #[test]
    fn test_each_forms() {
        let cfg = config();
        let report = each_value(&cfg, |v| numeric::max(*v, 1, "value"));
        assert_eq!(report.field_errors().len(), 1);

        let report = each_key(&cfg, |k| numeric::max(k.len(), 4, format!("key.{k}")));
        assert!(report.is_ok());
        assert_eq!(report.applied().len(), 2);

        let report = each_entry(&cfg, |k, v| {
            (*v > 1).then(|| Validation::fail(format!("m.{k}"), "too large", "max"))
        });
        assert_eq!(report.field_names(), vec!["m.port"]);
    }
}
