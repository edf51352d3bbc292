//! Load-test harness for the Userbase HTTP API.
//!
//! Scenarios:
//! - **Bulk insert**: sequential `POST /users`, then a count check
//! - **Range select**: N concurrent workers, one `GET /users/range` each
//! - **Point select**: N concurrent workers, many `GET /users/{id}` each
//!
//! Each concurrent scenario records the wall time of every worker and
//! summarises them as average, median, p95 and p99.

pub mod error;
pub mod scenarios;
pub mod stats;

pub use error::{LoadTestError, Result};
pub use scenarios::{
    bulk_insert, point_select, range_select, seed, InsertReport, PointOptions, RangeOptions,
    RunReport,
};
pub use stats::LatencyStats;
