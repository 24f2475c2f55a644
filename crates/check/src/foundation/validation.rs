//! The single-field outcome type.

use std::borrow::Cow;

use smallvec::SmallVec;

use super::error::{Errors, Failure, FieldError};

/// Identifiers of the validators an outcome represents, in call order.
///
/// Almost always one or two entries (`"min"`, `"max"` for a range check).
pub type Applied = SmallVec<[Cow<'static, str>; 2]>;

/// The outcome of one or more checks on a single field.
///
/// Carries an optional failure, the field it concerns, and the identifiers
/// of every validator that was evaluated. The identifier list is never
/// empty. A check that was not registered at all is represented by
/// `Option<Validation>::None`, never by an empty `Validation`.
///
/// # Examples
///
/// ```
/// use nebula_check::validators::numeric;
///
/// let v = numeric::between(25, 0, 120, "age");
/// assert!(v.passed());
/// assert_eq!(v.validators(), ["min", "max"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    error: Option<Failure>,
    field: Cow<'static, str>,
    validators: Applied,
}

impl Validation {
    /// Creates an outcome for a single validator.
    pub fn new(
        error: Option<Failure>,
        field: impl Into<Cow<'static, str>>,
        validator: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut validators = Applied::new();
        validators.push(validator.into());
        Self {
            error,
            field: field.into(),
            validators,
        }
    }

    /// Creates an outcome representing several validators at once, `first`
    /// followed by `rest`.
    pub fn with_validators<I, S>(
        error: Option<Failure>,
        field: impl Into<Cow<'static, str>>,
        first: impl Into<Cow<'static, str>>,
        rest: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let mut validators = Applied::new();
        validators.push(first.into());
        validators.extend(rest.into_iter().map(Into::into));
        Self {
            error,
            field: field.into(),
            validators,
        }
    }

    /// Creates a passing outcome.
    pub fn pass(
        field: impl Into<Cow<'static, str>>,
        validator: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(None, field, validator)
    }

    /// Creates a failing outcome whose error targets the same field.
    pub fn fail(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        validator: impl Into<Cow<'static, str>>,
    ) -> Self {
        let field = field.into();
        let error = FieldError::new(field.clone(), message);
        Self::new(Some(Failure::Field(error)), field, validator)
    }

    /// Builds the outcome of a leaf check.
    ///
    /// `message` is only evaluated when `ok` is false.
    pub(crate) fn check<M>(
        ok: bool,
        field: impl Into<Cow<'static, str>>,
        validators: &[&'static str],
        message: impl FnOnce() -> M,
    ) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let field = field.into();
        let error = (!ok).then(|| Failure::Field(FieldError::new(field.clone(), message())));
        Self {
            error,
            field,
            validators: validators.iter().map(|v| Cow::Borrowed(*v)).collect(),
        }
    }

    /// Returns the field this outcome concerns.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the applied validator identifiers in call order.
    #[must_use]
    pub fn validators(&self) -> &[Cow<'static, str>] {
        &self.validators
    }

    /// Returns true if `name` is among the applied validators.
    #[must_use]
    pub fn has_validator(&self, name: &str) -> bool {
        self.validators.iter().any(|v| v == name)
    }

    /// Returns the failure, if any check failed.
    #[must_use]
    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    /// Returns true if any check failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// Returns true if every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }

    /// Consumes the outcome, returning only its failure.
    pub fn into_error(self) -> Option<Failure> {
        self.error
    }

    /// Consumes the outcome into `(failure, field, validators)`.
    pub fn into_parts(self) -> (Option<Failure>, Cow<'static, str>, Applied) {
        (self.error, self.field, self.validators)
    }

    /// Converts the outcome into a `Result`.
    pub fn into_result(self) -> Result<(), Failure> {
        match self.error {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// Merges several outcomes for the same field into one.
    ///
    /// Absent entries are skipped. Returns `None` when nothing was recorded.
    /// A lone failure is reused as-is; several are flattened into one set.
    /// The applied list is the concatenation of every contributor's list in
    /// call order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_check::Validation;
    /// use nebula_check::validators::text;
    ///
    /// let merged = Validation::combine("name", [
    ///     text::required("", "name"),
    ///     text::min_len("", 2, "name"),
    /// ]).unwrap();
    ///
    /// assert_eq!(merged.validators(), ["required", "min"]);
    /// assert_eq!(merged.error().unwrap().len(), 2);
    /// ```
    pub fn combine<I>(field: impl Into<Cow<'static, str>>, validations: I) -> Option<Validation>
    where
        I: IntoIterator,
        I::Item: Into<Option<Validation>>,
    {
        let mut validators = Applied::new();
        let mut errors = Errors::new();

        for validation in validations
            .into_iter()
            .filter_map(Into::<Option<Validation>>::into)
        {
            let (error, _, applied) = validation.into_parts();
            validators.extend(applied);
            if let Some(failure) = error {
                errors.push_failure(failure);
            }
        }

        if validators.is_empty() {
            return None;
        }

        Some(Validation {
            error: errors.into_failure(),
            field: field.into(),
            validators,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
