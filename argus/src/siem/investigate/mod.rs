// argus/src/siem/investigate/mod.rs
//!
//! Investigation view for a single record: a synthetic activity timeline,
//! an evidence summary pulled from the attribute bag, and the correlated
//! records. Pure data; the presentation side renders it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::siem::models::LogRecord;
use crate::siem::query;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub description: String,
}

/// Everything the investigation panel shows for one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    pub record: LogRecord,
    pub timeline: Vec<TimelineEntry>,
    pub evidence: Vec<EvidenceItem>,
    pub related: Vec<LogRecord>,
}

/// Assemble the investigation view for a reference record.
pub fn build_investigation(
    records: &[LogRecord],
    reference: &LogRecord,
    correlation_limit: usize,
) -> Investigation {
    Investigation {
        record: reference.clone(),
        timeline: timeline(reference),
        evidence: evidence(reference),
        related: query::correlate(records, reference, correlation_limit),
    }
}

fn timeline(record: &LogRecord) -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            time: record.timestamp,
            title: "Event Detected".to_string(),
            description: record.message.clone(),
        },
        TimelineEntry {
            time: record.timestamp - Duration::minutes(2),
            title: "Precursor Activity".to_string(),
            description: "Suspicious activity detected from same source".to_string(),
        },
        TimelineEntry {
            time: record.timestamp - Duration::minutes(5),
            title: "Initial Reconnaissance".to_string(),
            description: "Network scanning activity detected".to_string(),
        },
    ]
}

fn evidence(record: &LogRecord) -> Vec<EvidenceItem> {
    vec![
        EvidenceItem {
            title: "Log Entry".to_string(),
            description: format!(
                "Source: {}, Event: {}, Severity: {}",
                record.source,
                record.event_type,
                record.severity.as_str()
            ),
        },
        EvidenceItem {
            title: "Network Traffic".to_string(),
            description: match record.ip() {
                Some(ip) => format!("Source IP: {}", ip),
                None => "No IP information available".to_string(),
            },
        },
        EvidenceItem {
            title: "System Artifacts".to_string(),
            description: match record.attr_str("file") {
                Some(file) => format!("File: {}", file),
                None => "No file artifacts".to_string(),
            },
        },
    ]
}
