// argus/src/siem/mod.rs
//!
//! # Log Query Engine and Dashboard Feed
//!
//! An in-memory mock SIEM: a capped, most-recent-first collection of
//! synthetic log records and a pure query engine over it.
//!
//! - `models`: record, filter and snapshot types
//! - `store`: the shared, bounded record collection
//! - `query`: filtering, metrics, top alerts, activity histogram, correlation
//! - `generator`: the synthetic record feed
//! - `dashboard`: timer-driven refresh handing derived views to a renderer
//! - `investigate`: timeline, evidence and related-events view for one record
//! - `notes`: per-record investigation notes in a key-value store
//! - `export`: lossless JSON export of a single record
//!
//! ```text
//! ┌────────────┐   insert    ┌───────────────┐   snapshot   ┌────────────┐
//! │ generator  │────────────►│   LogStore    │─────────────►│   query    │
//! └────────────┘             │  (cap = 100)  │              └─────┬──────┘
//!                            └───────────────┘                    │
//!                                                     metrics / alerts /
//!                                                     histogram / correlate
//!                                                                 │
//!                            ┌───────────────┐    messages   ┌────▼───────┐
//!                            │   renderer    │◄──────────────│ dashboard  │
//!                            └───────────────┘               └────────────┘
//! ```
//!
//! Every query runs to completion over a snapshot of the collection; the
//! record-insertion cap is enforced atomically with each insert.

pub mod dashboard;
pub mod export;
pub mod generator;
pub mod investigate;
pub mod models;
pub mod notes;
pub mod query;
pub mod store;

pub use models::*;
pub use query::*;
pub use store::*;

/// Default dashboard configuration
#[derive(Debug, Clone)]
pub struct DefaultDashboardConfig;

impl DefaultDashboardConfig {
    /// Retention cap: the oldest record beyond this is evicted on insert.
    pub const MAX_RETAINED_RECORDS: usize = 100;
    pub const GENERATOR_INTERVAL_SECS: u64 = 30;
    pub const METRICS_INTERVAL_SECS: u64 = 10;
    pub const CHART_INTERVAL_SECS: u64 = 60;
    pub const ALERT_LIMIT: usize = 5;
    pub const CORRELATION_LIMIT: usize = 5;
}
