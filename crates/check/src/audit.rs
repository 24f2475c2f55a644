//! Tag audit
//!
//! Cross-checks a [`Report`] against field metadata describing which fields
//! of a type are expected to be validated. Every expected field that has no
//! entry in the report's applied map becomes an extra failure, so a
//! forgotten check is caught the same way as bad data.
//!
//! The metadata comes from outside the crate through [`Inspect`]; nothing
//! else in the crate depends on this module.
//!
//! # Examples
//!
//! ```
//! use nebula_check::audit::{self, Inspect, TaggedField};
//! use nebula_check::{all, builders::string};
//!
//! struct Signup {
//!     email: String,
//!     name: String,
//! }
//!
//! impl Inspect for Signup {
//!     fn tagged_fields() -> Vec<TaggedField> {
//!         vec![
//!             TaggedField::new("Email").json("email").validate("required,email"),
//!             TaggedField::new("Name").json("name,omitempty").validate("required"),
//!         ]
//!     }
//! }
//!
//! let signup = Signup { email: "ada@example.com".into(), name: "Ada".into() };
//! let report = audit::audit_for::<Signup>(all!(
//!     string(&signup.email, "email").required().email(),
//! ));
//!
//! assert_eq!(
//!     report.err().unwrap().to_string(),
//!     "name: tagged but not validated (validate: required)",
//! );
//! ```

use std::borrow::Cow;

use crate::combinators;
use crate::foundation::{FieldError, Report, Validation};

// ============================================================================
// METADATA
// ============================================================================

/// One field of a type, as described by a metadata provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedField {
    /// Name of the field in the type definition, e.g. `"Email"`.
    pub struct_field: Cow<'static, str>,

    /// Serialized-name tag, e.g. `"email,omitempty"`.
    pub json: Option<Cow<'static, str>>,

    /// Validation tag, e.g. `"required,email"`.
    pub validate: Option<Cow<'static, str>>,
}

impl TaggedField {
    /// Describes a field with no tags.
    pub fn new(struct_field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            struct_field: struct_field.into(),
            json: None,
            validate: None,
        }
    }

    /// Sets the serialized-name tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn json(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.json = Some(tag.into());
        self
    }

    /// Sets the validation tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.validate = Some(tag.into());
        self
    }

    /// The name checks are expected to use for this field.
    ///
    /// The serialized name (up to the first comma) when there is one,
    /// otherwise the lowercased struct field name.
    ///
    /// ```
    /// use nebula_check::audit::TaggedField;
    ///
    /// assert_eq!(TaggedField::new("Email").json("email,omitempty").field_name(), "email");
    /// assert_eq!(TaggedField::new("Email").json("-").field_name(), "email");
    /// assert_eq!(TaggedField::new("UserID").field_name(), "userid");
    /// ```
    #[must_use]
    pub fn field_name(&self) -> Cow<'_, str> {
        let serialized = self
            .json
            .as_deref()
            .filter(|tag| *tag != "-")
            .map(|tag| tag.split(',').next().unwrap_or(tag))
            .filter(|name| !name.is_empty());
        match serialized {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.struct_field.to_lowercase()),
        }
    }

    /// Returns true when the validation tag is present, non-empty and not `"-"`.
    #[must_use]
    pub fn requires_validation(&self) -> bool {
        self.validate
            .as_deref()
            .is_some_and(|tag| !tag.is_empty() && tag != "-")
    }
}

/// Provides field metadata for a type.
///
/// Usually implemented by a derive or by hand next to the type's
/// serialization attributes.
pub trait Inspect {
    /// Returns every field of the type that carries tags.
    fn tagged_fields() -> Vec<TaggedField>;
}

// ============================================================================
// UNCHECKED FIELD
// ============================================================================

/// A field that requires validation but has no entry in the report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: tagged but not validated (validate: {tag})")]
pub struct UncheckedField {
    /// Resolved field name, see [`TaggedField::field_name`].
    pub field: String,

    /// Name of the field in the type definition.
    pub struct_field: String,

    /// The validation tag.
    pub tag: String,
}

impl From<UncheckedField> for FieldError {
    fn from(unchecked: UncheckedField) -> Self {
        let message = format!("tagged but not validated (validate: {})", unchecked.tag);
        FieldError::new(unchecked.field, message)
    }
}

// ============================================================================
// AUDIT
// ============================================================================

/// Returns the fields among `fields` that require validation but were not
/// validated in `report`.
///
/// A field counts as validated when either its resolved name or its struct
/// field name is a key of the applied map.
#[must_use]
pub fn unchecked(report: &Report, fields: &[TaggedField]) -> Vec<UncheckedField> {
    fields
        .iter()
        .filter(|f| f.requires_validation())
        .filter_map(|f| {
            let name = f.field_name();
            if report.was_validated(&name) || report.was_validated(&f.struct_field) {
                return None;
            }
            let tag = f.validate.as_deref().unwrap_or_default();
            tracing::debug!(
                field = %name,
                struct_field = %f.struct_field,
                tag,
                "tagged field was not validated"
            );
            Some(UncheckedField {
                field: name.into_owned(),
                struct_field: f.struct_field.to_string(),
                tag: tag.to_owned(),
            })
        })
        .collect()
}

/// Appends a failure to `report` for every unchecked field in `fields`.
///
/// Existing failures keep their order and come first. The applied map is
/// carried over unchanged. A report with nothing unchecked is returned
/// as-is.
#[must_use]
pub fn audit(report: Report, fields: &[TaggedField]) -> Report {
    let missing = unchecked(&report, fields);
    if missing.is_empty() {
        return report;
    }

    let (errors, applied) = report.into_parts();
    let mut errors = errors.unwrap_or_default();
    errors.extend(missing.into_iter().map(FieldError::from));
    Report::from_parts(errors, applied)
}

/// [`audit`] with the fields of `T`.
#[must_use]
pub fn audit_for<T: Inspect>(report: Report) -> Report {
    audit(report, &T::tagged_fields())
}

/// Aggregates `outcomes` with [`all`](combinators::all), then audits the
/// result against the fields of `T`.
pub fn all_for<T, I>(outcomes: I) -> Report
where
    T: Inspect,
    I: IntoIterator,
    I::Item: Into<Option<Validation>>,
{
    audit_for::<T>(combinators::all(outcomes))
}

// ============================================================================
// TESTS
// ============================================================================
