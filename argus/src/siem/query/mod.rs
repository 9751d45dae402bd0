// argus/src/siem/query/mod.rs
//!
//! The log query engine: pure, synchronous filter and aggregation passes
//! over an in-memory record collection.
//!
//! Every operation here is a total function. Malformed filter input degrades
//! to defaults before it reaches this module, absent optional record fields
//! are absent data, and no query can fail or suspend. Results preserve the
//! collection's order.

use chrono::{DateTime, Duration, Timelike, Utc};
use std::collections::HashSet;

use crate::siem::models::{HourBucket, LogRecord, MetricsSnapshot, QueryOptions, Severity};

/// Number of buckets in the activity histogram, one per hour.
pub const HISTOGRAM_HOURS: i64 = 24;

/// Default truncation for top_alerts and correlate.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Apply the three query predicates (time window, severity, free text),
/// ANDed, preserving collection order.
pub fn filter(records: &[LogRecord], options: &QueryOptions, now: DateTime<Utc>) -> Vec<LogRecord> {
    let cutoff = now - options.time_window.duration();
    // An empty query string means "no text filter", not "match nothing".
    let needle = options
        .text
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    records
        .iter()
        .filter(|r| r.timestamp >= cutoff)
        .filter(|r| options.severity.matches(r.severity))
        .filter(|r| match &needle {
            Some(q) => search_text(r).contains(q.as_str()),
            None => true,
        })
        .cloned()
        .collect()
}

/// Lower-cased haystack the free-text query is matched against.
fn search_text(record: &LogRecord) -> String {
    format!(
        "{} {} {}",
        record.source, record.event_type, record.message
    )
    .to_lowercase()
}

/// Derive the metrics snapshot over the full record collection (never the
/// filtered view).
pub fn compute_metrics(records: &[LogRecord]) -> MetricsSnapshot {
    let critical_alerts = count_by_severity(records, Severity::Critical);
    let high_alerts = count_by_severity(records, Severity::High);

    let blocked_threats = records
        .iter()
        .filter(|r| r.message.contains("Blocked") || r.message.contains("Quarantined"))
        .count();

    // Event type is matched capitalized, message lower-cased.
    let malware_detected = records
        .iter()
        .filter(|r| r.event_type.contains("Malware") || r.message.contains("malware"))
        .count();

    let known_ips = records
        .iter()
        .filter_map(|r| r.ip())
        .filter(|ip| !ip.is_empty())
        .collect::<HashSet<_>>()
        .len();

    MetricsSnapshot {
        total_events: records.len(),
        critical_alerts,
        high_alerts,
        blocked_threats,
        active_threats: critical_alerts + high_alerts,
        known_ips,
        malware_detected,
    }
}

fn count_by_severity(records: &[LogRecord], severity: Severity) -> usize {
    records.iter().filter(|r| r.severity == severity).count()
}

/// All critical records followed by all high records, original relative
/// order within each group, truncated to `limit`. Lower severities never
/// appear.
pub fn top_alerts(records: &[LogRecord], limit: usize) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|r| r.severity == Severity::Critical)
        .chain(records.iter().filter(|r| r.severity == Severity::High))
        .take(limit)
        .cloned()
        .collect()
}

/// Activity histogram: exactly 24 one-hour buckets ending at `now`, oldest
/// first. Bucket i covers (now - (24-i)h, now - (23-i)h], so every record in
/// the last 24 hours lands in exactly one bucket. Stateless: recomputable at
/// any instant from the current collection.
pub fn hourly_histogram(records: &[LogRecord], now: DateTime<Utc>) -> Vec<HourBucket> {
    (0..HISTOGRAM_HOURS)
        .map(|i| {
            let end = now - Duration::hours(HISTOGRAM_HOURS - 1 - i);
            let start = end - Duration::hours(1);
            let count = records
                .iter()
                .filter(|r| r.timestamp > start && r.timestamp <= end)
                .count();
            HourBucket {
                label: format!("{}:00", end.hour()),
                count,
            }
        })
        .collect()
}

/// Records related to `reference`: OR-of-equality on ip, source and event
/// type, collection order, truncated to `limit`. The reference itself
/// qualifies. No scoring, no ranking.
pub fn correlate(records: &[LogRecord], reference: &LogRecord, limit: usize) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|r| shares_field(r, reference))
        .take(limit)
        .cloned()
        .collect()
}

/// An absent ip on either side never matches.
fn shares_field(record: &LogRecord, reference: &LogRecord) -> bool {
    let ip_match = matches!(
        (record.ip(), reference.ip()),
        (Some(a), Some(b)) if a == b
    );
    ip_match || record.source == reference.source || record.event_type == reference.event_type
}
