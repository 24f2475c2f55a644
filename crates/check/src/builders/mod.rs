//! Fluent builders
//!
//! A builder holds one value and its field name. Every chained method runs
//! one leaf validator from [`validators`](crate::validators) immediately and
//! keeps the outcome; [`build`](StrBuilder::build) merges them with
//! [`Validation::combine`].
//!
//! ```
//! use nebula_check::builders::string;
//!
//! let v = string("ada@", "email")
//!     .required()
//!     .max_len(254)
//!     .email()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(v.validators(), ["required", "max", "email"]);
//! assert!(v.failed());
//! ```
//!
//! Every check in the chain runs, even after an earlier one failed, so one
//! field can report several problems at once.
//!
//! # Optional values
//!
//! The `opt_*` constructors take an `Option`. When it is `None`, no check
//! ever runs, [`when`](OptStrBuilder::when) never calls its closure and
//! `build()` returns `None`.
//!
//! # Aggregating
//!
//! Builders implement [`Outcome`](crate::Outcome), so they can be passed
//! straight to [`all!`](crate::all) and [`first!`](crate::first) without
//! calling `build()`.

use std::borrow::Cow;

use crate::foundation::Validation;

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// The outcomes recorded so far for one field.
#[derive(Debug, Clone)]
pub(crate) struct Checks {
    field: Cow<'static, str>,
    validations: Vec<Validation>,
}

impl Checks {
    pub(crate) fn new(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            validations: Vec::new(),
        }
    }

    pub(crate) fn field(&self) -> Cow<'static, str> {
        self.field.clone()
    }

    pub(crate) fn field_name(&self) -> &str {
        &self.field
    }

    /// Element field name, `"{field}[{index}]"`.
    pub(crate) fn element(&self, index: usize) -> Cow<'static, str> {
        Cow::Owned(format!("{}[{index}]", self.field))
    }

    pub(crate) fn record(&mut self, outcome: impl Into<Option<Validation>>) {
        if let Some(validation) = outcome.into() {
            self.validations.push(validation);
        }
    }

    pub(crate) fn build(self) -> Option<Validation> {
        Validation::combine(self.field, self.validations)
    }
}

// ============================================================================
// METHOD GENERATION
// ============================================================================

/// Parameterless builder methods that run one leaf on `self.value`.
macro_rules! leaf_methods {
    ($( $(#[$meta:meta])* $name:ident => $leaf:path; )*) => {
        $(
            $(#[$meta])*
            #[must_use = "builder methods must be chained or built"]
            pub fn $name(mut self) -> Self {
                let outcome = $leaf(self.value, self.checks.field());
                self.checks.record(outcome);
                self
            }
        )*
    };
}

/// Optional-builder methods that forward to the wrapped builder when present.
macro_rules! optional_methods {
    ($( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*); )*) => {
        $(
            $(#[$meta])*
            #[must_use = "builder methods must be chained or built"]
            pub fn $name(self, $($arg: $ty),*) -> Self {
                Self {
                    inner: self.inner.map(|b| b.$name($($arg),*)),
                }
            }
        )*
    };
}

mod number;
mod slice;
mod string;

pub use number::{
    IntBuilder, NumBuilder, OptIntBuilder, OptNumBuilder, integer, number, opt_integer,
    opt_number,
};
pub use slice::{
    OptSliceBuilder, OptStrSliceBuilder, SliceBuilder, StrSliceBuilder, opt_slice, opt_strings,
    slice, strings,
};
pub use string::{OptStrBuilder, StrBuilder, opt_string, string};

// ============================================================================
// TESTS
// ============================================================================
