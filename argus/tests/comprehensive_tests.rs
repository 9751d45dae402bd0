// Comprehensive test suite for the argus dashboard engine
//
// Exercises the public surface end to end: seeded collection, query engine,
// investigation view, record export, note storage and the periodic feed.

use chrono::{Duration, Utc};

use argus::siem::dashboard::{DashboardFeed, DashboardUpdate};
use argus::siem::export::{export_filename, export_record};
use argus::siem::generator::RecordGenerator;
use argus::siem::investigate::build_investigation;
use argus::siem::models::{
    sample_records, DashboardConfig, LogRecord, QueryOptions, Severity, SeverityFilter,
    TimeWindow,
};
use argus::siem::notes::{NoteStore, SledNoteStore};
use argus::siem::query;
use argus::siem::store::LogStore;

#[test]
fn test_seeded_dashboard_scenario() {
    let now = Utc::now();
    let store = LogStore::default();
    store.seed(sample_records(now));
    let snapshot = store.snapshot();

    let metrics = query::compute_metrics(&snapshot);
    assert_eq!(metrics.total_events, 5);
    assert_eq!(metrics.critical_alerts, 2);
    assert_eq!(metrics.high_alerts, 2);
    assert_eq!(metrics.active_threats, 4);

    let alerts = query::top_alerts(&snapshot, 5);
    assert_eq!(alerts.len(), 4);
    assert!(alerts[..2].iter().all(|r| r.severity == Severity::Critical));
    assert!(alerts[2..].iter().all(|r| r.severity == Severity::High));
}

#[test]
fn test_one_hour_window_boundaries() {
    let now = Utc::now();
    let recent = LogRecord::new_at(
        now - Duration::minutes(5),
        "IDS",
        "Port Scan",
        Severity::Low,
        "scan observed",
    );
    let stale = LogRecord::new_at(
        now - Duration::hours(2),
        "IDS",
        "Port Scan",
        Severity::Low,
        "scan observed",
    );

    let opts = QueryOptions {
        time_window: TimeWindow::Hour,
        ..Default::default()
    };
    let hits = query::filter(&[recent.clone(), stale], &opts, now);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, recent.id);
}

#[test]
fn test_retention_cap_end_to_end() {
    let store = LogStore::default();
    let mut generator = RecordGenerator::with_seed(11);

    for _ in 0..101 {
        store.insert(generator.next_record());
    }

    // The 101st insert evicted the oldest record, restoring size 100.
    assert_eq!(store.len(), 100);
}

#[test]
fn test_search_and_investigate_flow() {
    let config = DashboardConfig::default();
    let now = Utc::now();
    let store = LogStore::new(config.max_retained_records);
    store.seed(sample_records(now));

    let mut generator = RecordGenerator::with_seed(21);
    for _ in 0..20 {
        store.insert(generator.next_record());
    }
    let snapshot = store.snapshot();

    let opts = QueryOptions {
        severity: SeverityFilter::Exact(Severity::Critical),
        ..Default::default()
    };
    let critical = query::filter(&snapshot, &opts, now);
    assert!(critical.iter().all(|r| r.severity == Severity::Critical));

    let reference = &snapshot[0];
    let investigation = build_investigation(&snapshot, reference, config.correlation_limit);
    assert_eq!(investigation.timeline.len(), 3);
    assert_eq!(investigation.evidence.len(), 3);
    assert!(investigation.related.len() <= config.correlation_limit);
    assert!(investigation.related.iter().any(|r| r.id == reference.id));
}

#[test]
fn test_export_round_trips_a_collection_record() {
    let now = Utc::now();
    let records = sample_records(now);
    let record = &records[3];

    let json = export_record(record).unwrap();
    let parsed: LogRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, record);
    assert_eq!(parsed.attr_str("payload"), record.attr_str("payload"));

    assert!(export_filename(record).starts_with("log_"));
    assert!(export_filename(record).ends_with(".json"));
}

#[test]
fn test_sled_notes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes");
    let record = sample_records(Utc::now()).remove(0);

    {
        let store = SledNoteStore::open(&path);
        store
            .save_note(&record.id, "checked with the network team")
            .unwrap();
    }

    let store = SledNoteStore::open(&path);
    assert_eq!(
        store.load_note(&record.id).as_deref(),
        Some("checked with the network team")
    );
}

#[tokio::test]
async fn test_feed_grows_the_collection() {
    let config = DashboardConfig {
        generator_interval_secs: 1,
        metrics_interval_secs: 1,
        chart_interval_secs: 1,
        ..Default::default()
    };
    let store = LogStore::new(config.max_retained_records);
    store.seed(sample_records(Utc::now()));
    let before = store.len();

    let (feed, mut rx) = DashboardFeed::new(store.clone(), config, RecordGenerator::with_seed(5));
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(feed.run(shutdown_rx));

    // Wait for the first generated record to come through.
    let mut inserted = false;
    for _ in 0..16 {
        match tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv()).await {
            Ok(Some(DashboardUpdate::Inserted(_))) => {
                inserted = true;
                break;
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => break,
        }
    }

    let _ = shutdown_tx.send(());
    let _ = handle.await;

    assert!(inserted);
    assert!(store.len() > before);
}
