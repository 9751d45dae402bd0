// argus/src/siem/export/mod.rs
//!
//! Lossless record export for download.

use crate::error::Result;
use crate::siem::models::LogRecord;

/// Serialize one record, field for field, to pretty JSON. The flattened
/// attribute bag round-trips exactly.
pub fn export_record(record: &LogRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Download filename convention for an exported record.
pub fn export_filename(record: &LogRecord) -> String {
    format!("log_{}.json", record.id)
}
