//! Leaf validators
//!
//! Every function here checks one value and returns a
//! [`Validation`](crate::Validation):
//!
//! ```text
//! fn name(value, params.., field) -> Validation
//! ```
//!
//! The field name always comes last and is taken as
//! `impl Into<Cow<'static, str>>`, so both literals and formatted paths
//! (`format!("items[{i}]")`) work without ceremony. Each outcome records
//! the identifiers of the validators it represents (`"min"`, `"email"`,
//! ...), which a [`Report`](crate::Report) later exposes per field.
//!
//! Element-wise forms such as [`collection::each`] return a
//! [`Report`](crate::Report) instead.
//!
//! | Module | Values |
//! |--------|--------|
//! | [`text`] | string content and length |
//! | [`format`] | structured string formats (email, URL, UUID, IP, ...) |
//! | [`numeric`] | numbers, with the [`Number`](numeric::Number) trait family |
//! | [`compare`] | equality and cross-field comparisons |
//! | [`collection`] | slices |
//! | [`map`] | hash maps |
//! | [`option`] | optional values |
//! | `time` | instants, calendar dates and durations (feature `temporal`) |

pub mod collection;
pub mod compare;
pub mod format;
pub mod map;
pub mod numeric;
pub mod option;
pub mod text;

#[cfg(feature = "temporal")]
pub mod time;
