//! Prelude module for convenient imports.
//!
//! Brings in the outcome types, the builder constructors, the aggregation
//! functions and macros, and the leaf validator modules by name.
//!
//! # Examples
//!
//! ```
//! use nebula_check::prelude::*;
//!
//! let report = all!(
//!     string("Ada", "name").required().max_len(50),
//!     numeric::positive(-1, "balance"),
//! );
//! assert_eq!(report.field_names(), vec!["balance"]);
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{Errors, Failure, FieldError, Outcome, Report, Validation};

// ============================================================================
// BUILDERS
// ============================================================================

pub use crate::builders::{
    integer, number, opt_integer, opt_number, opt_slice, opt_string, opt_strings, slice, string,
    strings,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Collector, Mode, all, first, merge};
pub use crate::{all, first};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{collection, compare, format, map, numeric, option, text};

#[cfg(feature = "temporal")]
pub use crate::validators::time;
