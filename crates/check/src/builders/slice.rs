//! Slice builders
//!
//! Element checks made through `each` record one outcome per element under
//! the name `"{field}[{index}]"`. Every element is visited, so a report
//! lists every bad element, not just the first.

use std::borrow::Cow;
use std::hash::Hash;

use super::{Checks, StrBuilder};
use crate::foundation::{Outcome, Report, Validation};
use crate::validators::collection;

// ============================================================================
// SLICE BUILDER
// ============================================================================

/// Chains size and element checks on a slice.
///
/// ```
/// use nebula_check::builders::slice;
/// use nebula_check::validators::numeric;
///
/// let ports = [80, 0, 443];
/// let v = slice(&ports, "ports")
///     .not_empty()
///     .each(|port, field| numeric::port_number(*port, field))
///     .build()
///     .unwrap();
///
/// assert_eq!(v.error().unwrap().field_errors()[0].field(), "ports[1]");
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct SliceBuilder<'a, T> {
    value: &'a [T],
    checks: Checks,
}

impl<'a, T> SliceBuilder<'a, T> {
    /// Starts a chain for `value`.
    pub fn new(value: &'a [T], field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            checks: Checks::new(field),
        }
    }

    /// Returns the slice under validation.
    #[must_use]
    pub fn value(&self) -> &'a [T] {
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

    /// Runs an arbitrary check with the slice and field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(mut self, check: impl FnOnce(&'a [T], Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        let outcome = check(self.value, self.checks.field());
        self.checks.record(outcome);
        self
    }

    leaf_methods! {
        /// See [`collection::not_empty`].
        not_empty => collection::not_empty;
        /// See [`collection::empty`].
        empty => collection::empty;
    }

    /// See [`collection::min_items`].
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(mut self, min: usize) -> Self {
        let outcome = collection::min_items(self.value, min, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`collection::max_items`].
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(mut self, max: usize) -> Self {
        let outcome = collection::max_items(self.value, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`collection::exact_items`].
    #[must_use = "builder methods must be chained or built"]
    pub fn exact_items(mut self, count: usize) -> Self {
        let outcome = collection::exact_items(self.value, count, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`collection::items_between`].
    #[must_use = "builder methods must be chained or built"]
    pub fn items_between(mut self, min: usize, max: usize) -> Self {
        let outcome = collection::items_between(self.value, min, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// Runs `check` on every element with its field name `"{field}[{i}]"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn each<R>(mut self, mut check: impl FnMut(&'a T, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        for (i, item) in self.value.iter().enumerate() {
            let outcome = check(item, self.checks.element(i));
            self.checks.record(outcome);
        }
        self
    }

    /// Merges every recorded outcome; `None` if nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.checks.build()
    }
}

impl<T: Eq + Hash> SliceBuilder<'_, T> {
    /// See [`collection::unique`].
    #[must_use = "builder methods must be chained or built"]
    pub fn unique(mut self) -> Self {
        self.checks.record(collection::unique(self.value, self.checks.field()));
        self
    }
}

impl<T> Outcome for SliceBuilder<'_, T> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts a [`SliceBuilder`].
pub fn slice<T>(value: &[T], field: impl Into<Cow<'static, str>>) -> SliceBuilder<'_, T> {
    SliceBuilder::new(value, field)
}

// ============================================================================
// STRING SLICE BUILDER
// ============================================================================

/// Chains checks on a slice of strings, with a string builder per element.
///
/// ```
/// use nebula_check::builders::strings;
///
/// let tags = ["go", "rust", "go"];
/// let v = strings(&tags, "tags").unique().all_max_len(3).build().unwrap();
///
/// assert_eq!(
///     v.error().unwrap().to_string(),
///     "tags: must have unique items; tags[1]: must be at most 3 characters",
/// );
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct StrSliceBuilder<'a, S> {
    value: &'a [S],
    checks: Checks,
}

impl<'a, S: AsRef<str>> StrSliceBuilder<'a, S> {
    /// Starts a chain for `value`.
    pub fn new(value: &'a [S], field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            checks: Checks::new(field),
        }
    }

    /// Returns the slice under validation.
    #[must_use]
    pub fn value(&self) -> &'a [S] {
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

    /// Runs an arbitrary check with the slice and field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(mut self, check: impl FnOnce(&'a [S], Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        let outcome = check(self.value, self.checks.field());
        self.checks.record(outcome);
        self
    }

    leaf_methods! {
        /// See [`collection::not_empty`].
        not_empty => collection::not_empty;
        /// See [`collection::empty`].
        empty => collection::empty;
    }

    /// See [`collection::min_items`].
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(mut self, min: usize) -> Self {
        let outcome = collection::min_items(self.value, min, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`collection::max_items`].
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(mut self, max: usize) -> Self {
        let outcome = collection::max_items(self.value, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`collection::exact_items`].
    #[must_use = "builder methods must be chained or built"]
    pub fn exact_items(mut self, count: usize) -> Self {
        let outcome = collection::exact_items(self.value, count, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`collection::items_between`].
    #[must_use = "builder methods must be chained or built"]
    pub fn items_between(mut self, min: usize, max: usize) -> Self {
        let outcome = collection::items_between(self.value, min, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// Validates that no string appears twice.
    #[must_use = "builder methods must be chained or built"]
    pub fn unique(mut self) -> Self {
        let items: Vec<&str> = self.value.iter().map(AsRef::as_ref).collect();
        self.checks.record(collection::unique(&items, self.checks.field()));
        self
    }

    /// Chains checks on every element through its own [`StrBuilder`], named
    /// `"{field}[{i}]"`.
    ///
    /// ```
    /// use nebula_check::builders::strings;
    ///
    /// let emails = ["ada@example.com", "nope"];
    /// let v = strings(&emails, "emails").each(|e| e.required().email()).build().unwrap();
    /// assert!(v.error().unwrap().has_field("emails[1]"));
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn each(mut self, mut chain: impl FnMut(StrBuilder<'a>) -> StrBuilder<'a>) -> Self {
        for (i, item) in self.value.iter().enumerate() {
            let element = StrBuilder::new(item.as_ref(), self.checks.element(i));
            self.checks.record(chain(element).build());
        }
        self
    }

    /// Validates every element's minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn all_min_len(self, min: usize) -> Self {
        self.each(|e| e.min_len(min))
    }

    /// Validates every element's maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn all_max_len(self, max: usize) -> Self {
        self.each(|e| e.max_len(max))
    }

    /// Validates that no element is blank.
    #[must_use = "builder methods must be chained or built"]
    pub fn all_not_blank(self) -> Self {
        self.each(StrBuilder::not_blank)
    }

    /// Merges every recorded outcome; `None` if nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.checks.build()
    }
}

impl<S: AsRef<str>> Outcome for StrSliceBuilder<'_, S> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts a [`StrSliceBuilder`].
pub fn strings<S: AsRef<str>>(
    value: &[S],
    field: impl Into<Cow<'static, str>>,
) -> StrSliceBuilder<'_, S> {
    StrSliceBuilder::new(value, field)
}

// ============================================================================
// OPTIONAL FORMS
// ============================================================================

/// A [`SliceBuilder`] over a slice that may be absent.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct OptSliceBuilder<'a, T> {
    inner: Option<SliceBuilder<'a, T>>,
}

impl<'a, T> OptSliceBuilder<'a, T> {
    /// Starts a chain for an optional `value`.
    pub fn new(value: Option<&'a [T]>, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: value.map(|v| SliceBuilder::new(v, field)),
        }
    }

    /// Applies `chain` only when the slice is present and `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(
        self,
        condition: bool,
        chain: impl FnOnce(SliceBuilder<'a, T>) -> SliceBuilder<'a, T>,
    ) -> Self {
        Self {
            inner: self.inner.map(|b| b.when(condition, chain)),
        }
    }

    /// Runs an arbitrary check when the slice is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(self, check: impl FnOnce(&'a [T], Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        Self {
            inner: self.inner.map(|b| b.check(check)),
        }
    }

    /// See [`SliceBuilder::each`].
    #[must_use = "builder methods must be chained or built"]
    pub fn each<R>(self, check: impl FnMut(&'a T, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        Self {
            inner: self.inner.map(|b| b.each(check)),
        }
    }

    optional_methods! {
        /// See [`SliceBuilder::not_empty`].
        not_empty();
        /// See [`SliceBuilder::empty`].
        empty();
        /// See [`SliceBuilder::min_items`].
        min_items(min: usize);
        /// See [`SliceBuilder::max_items`].
        max_items(max: usize);
        /// See [`SliceBuilder::exact_items`].
        exact_items(count: usize);
        /// See [`SliceBuilder::items_between`].
        items_between(min: usize, max: usize);
    }

    /// Merges every recorded outcome; `None` if absent or nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.inner.and_then(SliceBuilder::build)
    }
}

impl<T: Eq + Hash> OptSliceBuilder<'_, T> {
    /// See [`SliceBuilder::unique`].
    #[must_use = "builder methods must be chained or built"]
    pub fn unique(self) -> Self {
        Self {
            inner: self.inner.map(SliceBuilder::unique),
        }
    }
}

impl<T> Outcome for OptSliceBuilder<'_, T> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts an [`OptSliceBuilder`].
pub fn opt_slice<T>(
    value: Option<&[T]>,
    field: impl Into<Cow<'static, str>>,
) -> OptSliceBuilder<'_, T> {
    OptSliceBuilder::new(value, field)
}

/// A [`StrSliceBuilder`] over a slice that may be absent.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct OptStrSliceBuilder<'a, S> {
    inner: Option<StrSliceBuilder<'a, S>>,
}

impl<'a, S: AsRef<str>> OptStrSliceBuilder<'a, S> {
    /// Starts a chain for an optional `value`.
    pub fn new(value: Option<&'a [S]>, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: value.map(|v| StrSliceBuilder::new(v, field)),
        }
    }

    /// Applies `chain` only when the slice is present and `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(
        self,
        condition: bool,
        chain: impl FnOnce(StrSliceBuilder<'a, S>) -> StrSliceBuilder<'a, S>,
    ) -> Self {
        Self {
            inner: self.inner.map(|b| b.when(condition, chain)),
        }
    }

    /// Runs an arbitrary check when the slice is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(self, check: impl FnOnce(&'a [S], Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        Self {
            inner: self.inner.map(|b| b.check(check)),
        }
    }

    /// See [`StrSliceBuilder::each`].
    #[must_use = "builder methods must be chained or built"]
    pub fn each(self, chain: impl FnMut(StrBuilder<'a>) -> StrBuilder<'a>) -> Self {
        Self {
            inner: self.inner.map(|b| b.each(chain)),
        }
    }

    optional_methods! {
        /// See [`StrSliceBuilder::not_empty`].
        not_empty();
        /// See [`StrSliceBuilder::empty`].
        empty();
        /// See [`StrSliceBuilder::min_items`].
        min_items(min: usize);
        /// See [`StrSliceBuilder::max_items`].
        max_items(max: usize);
        /// See [`StrSliceBuilder::exact_items`].
        exact_items(count: usize);
        /// See [`StrSliceBuilder::items_between`].
        items_between(min: usize, max: usize);
        /// See [`StrSliceBuilder::unique`].
        unique();
        /// See [`StrSliceBuilder::all_min_len`].
        all_min_len(min: usize);
        /// See [`StrSliceBuilder::all_max_len`].
        all_max_len(max: usize);
        /// See [`StrSliceBuilder::all_not_blank`].
        all_not_blank();
    }

    /// Merges every recorded outcome; `None` if absent or nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.inner.and_then(StrSliceBuilder::build)
    }
}

impl<S: AsRef<str>> Outcome for OptStrSliceBuilder<'_, S> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts an [`OptStrSliceBuilder`].
pub fn opt_strings<S: AsRef<str>>(
    value: Option<&[S]>,
    field: impl Into<Cow<'static, str>>,
) -> OptStrSliceBuilder<'_, S> {
    OptStrSliceBuilder::new(value, field)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FieldError;
    use crate::validators::text;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unique_strings() {
        let v = strings(&["go", "rust", "go"], "langs").unique().build().unwrap();
        assert_eq!(v.error().unwrap().len(), 1);
        let v = strings(&["go", "rust", "ok"], "langs").unique().build().unwrap();
        assert!(v.passed());
    }

    #[test]
    fn test_each_visits_every_element_in_order() {
        let names = ["", "ok", " "];
        let v = slice(&names, "names")
            .each(|name, field| text::required(name, field))
            .build()
            .unwrap();
        let fields: Vec<&str> = v
            .error()
            .unwrap()
            .field_errors()
            .iter()
            .map(FieldError::field)
            .collect();
        assert_eq!(fields, vec!["names[0]", "names[2]"]);
        assert_eq!(v.validators(), ["required", "required", "required"]);
        assert_eq!(v.field(), "names");
    }

    #[test]
    fn test_each_skips_absent_outcomes() {
        let v = slice(&[1, 2, 3], "n").each(|_, _| None::<Validation>).build();
        assert!(v.is_none());
    }

    #[test]
    fn test_slice_sizes_and_unique() {
        let v = slice(&[1, 1], "ids")
            .not_empty()
            .items_between(1, 5)
            .unique()
            .build()
            .unwrap();
        assert_eq!(v.validators(), ["required", "minitems", "maxitems", "unique"]);
        assert_eq!(v.error().unwrap().to_string(), "ids: must have unique items");
    }

    #[test]
    fn test_string_slice_helpers() {
        let owned = vec![String::from("ok"), String::from("  "), String::from("longer")];
        let v = strings(&owned, "tags")
            .min_items(1)
            .all_not_blank()
            .all_min_len(2)
            .all_max_len(4)
            .build()
            .unwrap();
        let fields: Vec<&str> = v
            .error()
            .unwrap()
            .field_errors()
            .iter()
            .map(FieldError::field)
            .collect();
        assert_eq!(fields, vec!["tags[1]", "tags[2]"]);
    }

    #[test]
    fn test_optional_slices_skip_when_absent() {
        let absent: Option<&[i32]> = None;
        let v = opt_slice(absent, "ids")
            .not_empty()
            .unique()
            .each(|_, _| -> Validation { panic!("element check ran on absent slice") })
            .when(true, |b| b.min_items(3))
            .build();
        assert!(v.is_none());

        let absent: Option<&[&str]> = None;
        assert!(opt_strings(absent, "tags").all_not_blank().unique().build().is_none());

        let v = opt_strings(Some(&["a", "a"][..]), "tags").unique().build().unwrap();
        assert!(v.failed());
    }
}
