//! Aggregation of outcomes into reports
//!
//! - [`all`]: visit every outcome, collect every failure
//! - [`first`]: stop at the first failure
//! - [`merge`]: concatenate independent reports
//! - [`Collector`]: the incremental form behind all three
//!
//! For heterogeneous arguments (a mix of validations, builders and
//! reports) use the [`all!`](crate::all) and [`first!`](crate::first)
//! macros instead.

mod all;
mod collector;
mod first;
mod merge;

pub use all::all;
pub use collector::{Collector, Mode};
pub use first::first;
pub use merge::merge;
