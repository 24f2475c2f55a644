//! Core outcome and aggregate types
//!
//! Everything else in the crate produces or consumes these:
//!
//! - **[`FieldError`]**: one failed check, bound to a field path
//! - **[`Errors`]**: a flat, ordered set of field errors
//! - **[`Failure`]**: one-or-many, the failure carried by a single outcome
//! - **[`Validation`]**: the outcome of one or more checks on one field
//! - **[`Report`]**: many outcomes aggregated, plus the applied-validator map
//! - **[`Outcome`]**: anything that can be folded into a report
//!
//! # Data flow
//!
//! Leaf validators return a [`Validation`]. Builders collect several of
//! them for one field and [`Validation::combine`] them into one. The
//! combinators fold any number of outcomes into a [`Report`].
//!
//! ```
//! use nebula_check::{all, Validation};
//! use nebula_check::validators::text;
//!
//! let name = Validation::combine("name", [
//!     text::required("Ada", "name"),
//!     text::max_len("Ada", 50, "name"),
//! ]);
//!
//! let report = all!(name);
//! assert!(report.is_ok());
//! assert_eq!(report.validators("name"), ["required", "max"]);
//! ```

pub mod error;
pub mod report;
pub mod validation;

pub use error::{Errors, Failure, FieldError};
pub use report::{AppliedMap, Outcome, Report};
pub use validation::{Applied, Validation};
