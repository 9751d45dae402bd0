// argus/src/siem/models/mod.rs
//!
//! Core data models for the log query engine

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use uuid::Uuid;

use crate::siem::DefaultDashboardConfig;

/// Unique record identifier, assigned at creation
pub type RecordId = String;

/// Severity levels for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "critical")]
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Time window a query looks back over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1h")]
    Hour,
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TimeWindow {
    /// Unrecognized values degrade to the 24h default so the filter surface
    /// stays responsive to arbitrary input.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "1h" => TimeWindow::Hour,
            "24h" => TimeWindow::Day,
            "7d" => TimeWindow::Week,
            "30d" => TimeWindow::Month,
            _ => TimeWindow::default(),
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TimeWindow::Hour => Duration::hours(1),
            TimeWindow::Day => Duration::hours(24),
            TimeWindow::Week => Duration::days(7),
            TimeWindow::Month => Duration::days(30),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "1h",
            TimeWindow::Day => "24h",
            TimeWindow::Week => "7d",
            TimeWindow::Month => "30d",
        }
    }
}

/// Severity predicate for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Exact(Severity),
}

impl SeverityFilter {
    /// Unrecognized values degrade to `All`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "all" => SeverityFilter::All,
            "low" => SeverityFilter::Exact(Severity::Low),
            "medium" => SeverityFilter::Exact(Severity::Medium),
            "high" => SeverityFilter::Exact(Severity::High),
            "critical" => SeverityFilter::Exact(Severity::Critical),
            _ => SeverityFilter::default(),
        }
    }

    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Exact(s) => *s == severity,
        }
    }
}

/// A single synthetic security log record.
///
/// Records are append-only: once created they are never mutated. Beyond the
/// required fields each source type carries its own optional attributes
/// (ip, port, file, hash, sender, ...) in an open bag; an absent key means
/// "not applicable", never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub event_type: String,
    pub severity: Severity,
    pub message: String,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl LogRecord {
    pub fn new(source: &str, event_type: &str, severity: Severity, message: &str) -> Self {
        Self::new_at(Utc::now(), source, event_type, severity, message)
    }

    pub fn new_at(
        timestamp: DateTime<Utc>,
        source: &str,
        event_type: &str,
        severity: Severity,
        message: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            source: source.to_string(),
            event_type: event_type.to_string(),
            severity,
            message: message.to_string(),
            attrs: Map::new(),
        }
    }

    /// Attach a source-dependent attribute.
    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Source ip attribute, when the record carries one.
    pub fn ip(&self) -> Option<&str> {
        self.attr_str("ip")
    }
}

/// Filter options for a log query.
///
/// Construction from raw strings is total: malformed window or severity
/// values fall back to the defaults instead of failing.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub time_window: TimeWindow,
    pub severity: SeverityFilter,
    pub text: Option<String>,
}

impl QueryOptions {
    pub fn from_raw(time_window: &str, severity: &str, text: Option<&str>) -> Self {
        Self {
            time_window: TimeWindow::parse_or_default(time_window),
            severity: SeverityFilter::parse_or_default(severity),
            text: text.map(|t| t.to_string()),
        }
    }
}

/// Aggregate counters derived from the full record collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_events: usize,
    pub critical_alerts: usize,
    pub high_alerts: usize,
    pub blocked_threats: usize,
    pub active_threats: usize,
    pub known_ips: usize,
    pub malware_detected: usize,
}

/// One hour of the activity histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    /// Wall-clock hour of the bucket's end instant, rendered "H:00".
    pub label: String,
    pub count: usize,
}

/// Configuration for the dashboard feed and its derived views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub max_retained_records: usize,
    pub generator_interval_secs: u64,
    pub metrics_interval_secs: u64,
    pub chart_interval_secs: u64,
    pub alert_limit: usize,
    pub correlation_limit: usize,
    pub notes_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_retained_records: DefaultDashboardConfig::MAX_RETAINED_RECORDS,
            generator_interval_secs: DefaultDashboardConfig::GENERATOR_INTERVAL_SECS,
            metrics_interval_secs: DefaultDashboardConfig::METRICS_INTERVAL_SECS,
            chart_interval_secs: DefaultDashboardConfig::CHART_INTERVAL_SECS,
            alert_limit: DefaultDashboardConfig::ALERT_LIMIT,
            correlation_limit: DefaultDashboardConfig::CORRELATION_LIMIT,
            notes_path: PathBuf::from("./data/notes"),
        }
    }
}

/// The five fixed sample records the dashboard is seeded with, oldest first.
pub fn sample_records(now: DateTime<Utc>) -> Vec<LogRecord> {
    vec![
        LogRecord::new_at(
            now - Duration::minutes(5),
            "Firewall",
            "Blocked Connection",
            Severity::High,
            "Blocked suspicious connection from 192.168.1.100 to external server",
        )
        .with_attr("ip", "192.168.1.100")
        .with_attr("port", 443)
        .with_attr("protocol", "HTTPS"),
        LogRecord::new_at(
            now - Duration::minutes(3),
            "IDS",
            "Intrusion Attempt",
            Severity::Critical,
            "Multiple failed login attempts detected from 10.0.0.50",
        )
        .with_attr("ip", "10.0.0.50")
        .with_attr("attempts", 15)
        .with_attr("target", "admin@cybertechsolutions.com"),
        LogRecord::new_at(
            now - Duration::minutes(2),
            "EDR",
            "Malware Detected",
            Severity::Critical,
            "Suspicious file execution detected: malware.exe",
        )
        .with_attr("file", "malware.exe")
        .with_attr("hash", "a1b2c3d4e5f6...")
        .with_attr("action", "Quarantined"),
        LogRecord::new_at(
            now - Duration::minutes(1),
            "Web Server",
            "SQL Injection Attempt",
            Severity::High,
            "SQL injection attempt detected in login form",
        )
        .with_attr("ip", "203.0.113.45")
        .with_attr("payload", "SELECT * FROM users WHERE id = 1 OR 1=1")
        .with_attr("blocked", true),
        LogRecord::new_at(
            now,
            "Email Gateway",
            "Phishing Email",
            Severity::Medium,
            "Suspicious email detected with malicious attachment",
        )
        .with_attr("sender", "unknown@malicious.com")
        .with_attr("subject", "Important Document")
        .with_attr("attachment", "document.pdf"),
    ]
}
