//! Domain Value Objects
//!
//! Immutable value types that describe how the aggregate is queried,
//! updated and timed.

mod loan_policy;
mod query;
pub mod timestamp;
mod update;

pub use loan_policy::{LoanPolicy, DEFAULT_LOAN_PERIOD_DAYS};
pub use query::{BookQuery, ReaderQuery};
pub use timestamp::{format_timestamp, parse_timestamp, TimestampError};
pub use update::{BookUpdate, ReaderUpdate, UpdateParseError};
