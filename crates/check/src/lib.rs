//! # nebula-check
//!
//! Explicit, composable field validation for the Nebula workflow engine.
//!
//! Checks are plain function calls on values you already have. There is no
//! reflection and no derive: each check names the field it concerns and
//! returns an outcome that records both the failure (if any) and which
//! validators ran.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_check::prelude::*;
//!
//! struct Signup<'a> {
//!     email: &'a str,
//!     age: u8,
//!     tags: &'a [&'a str],
//! }
//!
//! let signup = Signup { email: "", age: 5, tags: &["go", "go"] };
//!
//! let report = all!(
//!     string(signup.email, "email").required().email(),
//!     integer(signup.age, "age").between(13, 120),
//!     strings(signup.tags, "tags").max_items(5).unique(),
//! );
//!
//! assert!(report.failed());
//! assert_eq!(report.field_names(), vec!["email", "email", "age", "tags"]);
//! assert!(report.has_validator("tags", "unique"));
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: leaf checks, `fn(value, params.., field) -> Validation`
//! - [`builders`]: fluent chains of leaf checks on one field
//! - [`combinators`] and the [`all!`] / [`first!`] macros: aggregate
//!   outcomes into a [`Report`]
//! - [`audit`]: verify that every field expected to be validated was
//!
//! ## Reading a report
//!
//! A [`Report`] keeps every failure as a flat list of [`FieldError`]s and,
//! separately, the identifiers of every validator applied to each field,
//! passing or not. The second half answers "was this field validated at
//! all", which is what [`audit`] builds on.
//!
//! ## Features
//!
//! - `temporal` (default): time, date and duration checks via `chrono`
//! - `serde` (default): `Serialize` for [`FieldError`], [`Errors`] and
//!   [`Report`]

pub mod audit;
pub mod builders;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::{
    Applied, AppliedMap, Errors, Failure, FieldError, Outcome, Report, Validation,
};
