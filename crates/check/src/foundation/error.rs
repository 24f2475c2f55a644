//! Failure types produced by checks.
//!
//! A single check fails with a [`FieldError`]. Several failures travel
//! together as [`Errors`], which is flat by construction: the only way to
//! add a set to another set is [`Errors::push_failure`], which splices the
//! members in order. [`Failure`] is the one-or-many sum type carried by a
//! single [`Validation`](super::Validation).
//!
//! All string fields use `Cow<'static, str>` so static field names and
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A failed check on one field.
///
/// There is no error-code taxonomy: two field errors are told apart only by
/// their field path and message.
///
/// # Examples
///
/// ```
/// use nebula_check::FieldError;
///
/// let error = FieldError::new("tags[2]", "must be at most 10 characters");
/// assert_eq!(error.to_string(), "tags[2]: must be at most 10 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field path, e.g. `"email"`, `"address.zip"`, `"tags[2]"`.
    pub field: Cow<'static, str>,

    /// Human-readable message, independent of locale.
    pub message: Cow<'static, str>,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the field path.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// ERROR SET
// ============================================================================

/// An ordered, flat collection of field errors.
///
/// Renders as its single member when it has one, otherwise as the members
/// joined with `"; "` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Errors {
    errors: Vec<FieldError>,
}

impl Errors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends one field error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Appends a failure, splicing its members when it is a set.
    pub fn push_failure(&mut self, failure: Failure) {
        match failure {
            Failure::Field(error) => self.errors.push(error),
            Failure::Many(errors) => self.errors.extend(errors.errors),
        }
    }

    /// Splices every member of `other` onto the end of this collection.
    pub fn append(&mut self, other: Errors) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the errors in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    /// Iterates the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Returns the first error, if any.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Returns true if any error targets `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Returns the field path of every error, one entry per error.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.errors.iter().map(FieldError::field).collect()
    }

    /// Returns all errors targeting `field`.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Converts the collection into a JSON array of `{field, message}` objects.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.errors
                .iter()
                .map(|e| serde_json::json!({ "field": e.field, "message": e.message }))
                .collect(),
        )
    }

    /// Converts a non-empty collection into a `Failure`, unwrapping a lone member.
    pub(crate) fn into_failure(mut self) -> Option<Failure> {
        match self.errors.len() {
            0 => None,
            1 => self.errors.pop().map(Failure::Field),
            _ => Some(Failure::Many(self)),
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl FromIterator<FieldError> for Errors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldError> for Errors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<FieldError> for Errors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Failure> for Errors {
    fn from(failure: Failure) -> Self {
        let mut errors = Self::new();
        errors.push_failure(failure);
        errors
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// The failure carried by a single outcome: one field error or a flat set.
///
/// `combine` reuses a lone failure as-is and only wraps when there are
/// several, so a field with one problem never turns into a one-element set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// A single field error.
    #[error(transparent)]
    Field(FieldError),

    /// Several field errors, already flattened.
    #[error(transparent)]
    Many(Errors),
}

impl Failure {
    /// Returns the underlying field errors as a flat slice.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Failure::Field(error) => std::slice::from_ref(error),
            Failure::Many(errors) => errors.as_slice(),
        }
    }

    /// Returns the number of field errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.field_errors().len()
    }

    /// Always false; a failure carries at least one error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_errors().is_empty()
    }

    /// Returns true if any error targets `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.field_errors().iter().any(|e| e.field == field)
    }
}

impl From<FieldError> for Failure {
    fn from(error: FieldError) -> Self {
        Failure::Field(error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
