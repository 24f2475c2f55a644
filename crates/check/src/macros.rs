//! Aggregation macros over heterogeneous outcomes.
//!
//! - [`all!`]: fold every argument into a report
//! - [`first!`]: fold arguments until one fails
//!
//! Arguments may be any mix of [`Outcome`](crate::Outcome)s: validations,
//! optional validations, builders and reports.
//!
//! # Examples
//!
//! ```
//! use nebula_check::{all, first};
//! use nebula_check::builders::{integer, string};
//!
//! let report = all!(
//!     string("", "email").required().email(),
//!     integer(5, "age").between(13, 120),
//! );
//! assert_eq!(report.field_names(), vec!["email", "email", "age"]);
//!
//! let report = first!(
//!     string("", "email").required().email(),
//!     integer(5, "age").between(13, 120),
//! );
//! assert!(!report.was_validated("age"));
//! ```

// ============================================================================
// ALL MACRO
// ============================================================================

/// Folds every argument into a [`Report`](crate::Report).
///
/// Every argument is evaluated and tracked, passing or failing.
///
/// ```
/// use nebula_check::all;
/// use nebula_check::validators::text;
///
/// let report = all!(text::required("Ada", "name"), text::max_len("Ada", 2, "name"));
/// assert_eq!(report.validators("name"), ["required", "max"]);
/// ```
#[macro_export]
macro_rules! all {
    () => {
        $crate::combinators::Collector::all().finish()
    };
    ($($outcome:expr),+ $(,)?) => {{
        let mut collector = $crate::combinators::Collector::all();
        $( collector.push($outcome); )+
        collector.finish()
    }};
}

// ============================================================================
// FIRST MACRO
// ============================================================================

/// Folds arguments into a [`Report`](crate::Report) until one fails.
///
/// Argument expressions after the first failing one are never evaluated.
///
/// ```
/// use nebula_check::first;
/// use nebula_check::validators::text;
///
/// let report = first!(
///     text::required("", "name"),
///     text::required("", "email"),
/// );
/// assert_eq!(report.field_names(), vec!["name"]);
/// assert!(!report.was_validated("email"));
/// ```
#[macro_export]
macro_rules! first {
    () => {
        $crate::combinators::Collector::first().finish()
    };
    ($($outcome:expr),+ $(,)?) => {{
        let mut collector = $crate::combinators::Collector::first();
        'collect: {
            $(
                if !collector.push($outcome) {
                    break 'collect;
                }
            )+
        }
        collector.finish()
    }};
}

// ============================================================================
// TESTS
// ============================================================================
