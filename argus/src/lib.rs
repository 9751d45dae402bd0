// argus/src/lib.rs
//!
//! # argus
//!
//! Mock security operations dashboard engine: a capped in-memory collection
//! of synthetic security log records, a pure query/aggregation engine over
//! it, and a timer-driven feed that hands derived views (metrics, alerts,
//! activity histogram) to a presentation collaborator.
//!
//! All data is seeded sample data or randomly generated; there is no log
//! ingestion and no real threat detection.

pub mod cli;
pub mod error;
#[macro_use]
pub mod logging;
pub mod siem;

#[cfg(test)]
mod tests;
