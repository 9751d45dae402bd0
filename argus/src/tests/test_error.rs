// src/tests/test_error.rs

use crate::error::ArgusError;
use std::error::Error;
use std::io;

#[test]
fn test_error_conversions() {
    // IO error conversion
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let argus_error: ArgusError = io_error.into();

    match argus_error {
        ArgusError::IoError(e) => {
            assert_eq!(e.kind(), io::ErrorKind::NotFound);
            assert_eq!(e.to_string(), "File not found");
        }
        _ => panic!("Expected IoError variant"),
    }

    // String error conversion
    let string_error = "Test error".to_string();
    let argus_error: ArgusError = string_error.into();

    match argus_error {
        ArgusError::StorageError(msg) => {
            assert_eq!(msg, "Test error");
        }
        _ => panic!("Expected StorageError variant"),
    }

    // serde_json error conversion
    let json_error = serde_json::from_str::<crate::siem::models::MetricsSnapshot>("not json")
        .expect_err("parse should fail");
    let argus_error: ArgusError = json_error.into();
    assert!(matches!(argus_error, ArgusError::ExportError(_)));
}

#[test]
fn test_error_display() {
    let error = ArgusError::ConfigError("bad interval".to_string());
    assert_eq!(error.to_string(), "Config error: bad interval");

    let error = ArgusError::StorageError("tree unavailable".to_string());
    assert_eq!(error.to_string(), "Storage error: tree unavailable");

    let error = ArgusError::FeedError("channel closed".to_string());
    assert_eq!(error.to_string(), "Feed error: channel closed");
}

#[test]
fn test_error_source() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let argus_error: ArgusError = io_error.into();
    assert!(argus_error.source().is_some());

    let argus_error = ArgusError::ExportError("boom".to_string());
    assert!(argus_error.source().is_none());
}
