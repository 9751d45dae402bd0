// argus/src/siem/dashboard/mod.rs
//!
//! Timer-driven dashboard feed.
//!
//! Each refresh cadence is an explicit scheduled task: generate a record
//! every 30s, recompute metrics and alerts every 10s, recompute the
//! activity histogram every 60s (all configurable). A tick snapshots the
//! record collection, computes the
//! full derived view in one pass and hands it to the presentation side as a
//! message, so no derived view ever observes the collection mid-mutation.

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::logging::LogLevel;
use crate::siem::generator::RecordGenerator;
use crate::siem::models::{DashboardConfig, HourBucket, LogRecord, MetricsSnapshot};
use crate::siem::query;
use crate::siem::store::LogStore;

/// Derived-view updates handed to the presentation layer.
#[derive(Debug, Clone)]
pub enum DashboardUpdate {
    /// A fresh synthetic record entered the collection.
    Inserted(LogRecord),
    Metrics(MetricsSnapshot),
    Alerts(Vec<LogRecord>),
    Activity(Vec<HourBucket>),
}

/// The periodic refresh feed over a shared record store.
pub struct DashboardFeed {
    store: LogStore,
    config: DashboardConfig,
    generator: RecordGenerator,
    tx: mpsc::Sender<DashboardUpdate>,
}

impl DashboardFeed {
    pub fn new(
        store: LogStore,
        config: DashboardConfig,
        generator: RecordGenerator,
    ) -> (Self, mpsc::Receiver<DashboardUpdate>) {
        let (tx, rx) = mpsc::channel(64);
        (
            Self {
                store,
                config,
                generator,
                tx,
            },
            rx,
        )
    }

    /// Run until the shutdown signal resolves or the presentation side goes
    /// away.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) {
        let mut generate = interval(Duration::from_secs(self.config.generator_interval_secs));
        let mut refresh = interval(Duration::from_secs(self.config.metrics_interval_secs));
        let mut chart = interval(Duration::from_secs(self.config.chart_interval_secs));
        for i in [&mut generate, &mut refresh, &mut chart] {
            i.set_missed_tick_behavior(MissedTickBehavior::Skip);
        }

        feed_log!(
            LogLevel::Info,
            "Dashboard feed running (generate {}s, refresh {}s, chart {}s)",
            self.config.generator_interval_secs,
            self.config.metrics_interval_secs,
            self.config.chart_interval_secs
        );

        loop {
            tokio::select! {
                _ = generate.tick() => {
                    if !self.generate_tick().await {
                        break;
                    }
                }
                _ = refresh.tick() => {
                    if !self.refresh_tick().await {
                        break;
                    }
                }
                _ = chart.tick() => {
                    if !self.chart_tick().await {
                        break;
                    }
                }
                _ = &mut shutdown => {
                    feed_log!(LogLevel::Info, "Dashboard feed shutting down");
                    break;
                }
            }
        }
    }

    /// Insert one synthetic record, then push the refreshed derived view.
    async fn generate_tick(&mut self) -> bool {
        let record = self.generator.next_record();
        feed_log!(
            LogLevel::Debug,
            "Generated record from {}: {}",
            record.source,
            record.event_type
        );
        self.store.insert(record.clone());

        if self.tx.send(DashboardUpdate::Inserted(record)).await.is_err() {
            return false;
        }
        self.refresh_tick().await
    }

    /// Recompute metrics and top alerts over one snapshot.
    async fn refresh_tick(&mut self) -> bool {
        let snapshot = self.store.snapshot();
        let metrics = query::compute_metrics(&snapshot);
        let alerts = query::top_alerts(&snapshot, self.config.alert_limit);

        if self.tx.send(DashboardUpdate::Metrics(metrics)).await.is_err() {
            return false;
        }
        self.tx.send(DashboardUpdate::Alerts(alerts)).await.is_ok()
    }

    async fn chart_tick(&mut self) -> bool {
        let snapshot = self.store.snapshot();
        let activity = query::hourly_histogram(&snapshot, Utc::now());
        self.tx
            .send(DashboardUpdate::Activity(activity))
            .await
            .is_ok()
    }
}

/// Log-line renderer: the presentation collaborator the CLI wires in.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub async fn run(mut rx: mpsc::Receiver<DashboardUpdate>) {
        while let Some(update) = rx.recv().await {
            match update {
                DashboardUpdate::Inserted(record) => {
                    log::info!(
                        "[{}] {} / {}: {}",
                        record.severity.as_str(),
                        record.source,
                        record.event_type,
                        record.message
                    );
                }
                DashboardUpdate::Metrics(m) => {
                    log::info!(
                        "metrics: events={} critical={} high={} blocked={} active={} ips={} malware={}",
                        m.total_events,
                        m.critical_alerts,
                        m.high_alerts,
                        m.blocked_threats,
                        m.active_threats,
                        m.known_ips,
                        m.malware_detected
                    );
                }
                DashboardUpdate::Alerts(alerts) => {
                    for alert in &alerts {
                        log::info!(
                            "alert: [{}] {} - {}",
                            alert.severity.as_str(),
                            alert.event_type,
                            alert.message
                        );
                    }
                }
                DashboardUpdate::Activity(buckets) => {
                    let total: usize = buckets.iter().map(|b| b.count).sum();
                    log::info!(
                        "activity: {} events across the last {} hours",
                        total,
                        buckets.len()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::siem::models::sample_records;

    fn fast_config() -> DashboardConfig {
        DashboardConfig {
            generator_interval_secs: 1,
            metrics_interval_secs: 1,
            chart_interval_secs: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_feed_delivers_derived_views() {
        let store = LogStore::default();
        store.seed(sample_records(Utc::now()));

        let (feed, mut rx) =
            DashboardFeed::new(store, fast_config(), RecordGenerator::with_seed(1));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(feed.run(shutdown_rx));

        // The first interval ticks fire immediately; collect a burst.
        let mut saw_metrics = false;
        let mut saw_alerts = false;
        let mut saw_activity = false;
        for _ in 0..8 {
            match tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
                Ok(Some(DashboardUpdate::Metrics(m))) => {
                    assert!(m.total_events >= 5);
                    saw_metrics = true;
                }
                Ok(Some(DashboardUpdate::Alerts(alerts))) => {
                    assert!(alerts.len() <= 5);
                    saw_alerts = true;
                }
                Ok(Some(DashboardUpdate::Activity(buckets))) => {
                    assert_eq!(buckets.len(), 24);
                    saw_activity = true;
                }
                Ok(Some(DashboardUpdate::Inserted(_))) => {}
                Ok(None) | Err(_) => break,
            }
            if saw_metrics && saw_alerts && saw_activity {
                break;
            }
        }

        let _ = shutdown_tx.send(());
        let _ = handle.await;

        assert!(saw_metrics);
        assert!(saw_alerts);
        assert!(saw_activity);
    }

    #[tokio::test]
    async fn test_feed_stops_when_renderer_goes_away() {
        let store = LogStore::default();
        let (feed, rx) = DashboardFeed::new(store, fast_config(), RecordGenerator::with_seed(2));
        let (_shutdown_tx, shutdown_rx) = oneshot::channel();

        drop(rx);
        // With the receiver gone the first send fails and the feed returns.
        tokio::time::timeout(Duration::from_secs(5), feed.run(shutdown_rx))
            .await
            .expect("feed should stop once the channel closes");
    }

    #[tokio::test]
    async fn test_generate_tick_respects_retention_cap() {
        let store = LogStore::new(3);
        let config = DashboardConfig {
            max_retained_records: 3,
            ..fast_config()
        };
        let (mut feed, mut rx) =
            DashboardFeed::new(store.clone(), config, RecordGenerator::with_seed(3));

        for _ in 0..5 {
            assert!(feed.generate_tick().await);
            // Drain so the bounded channel never blocks the tick.
            while rx.try_recv().is_ok() {}
        }

        assert_eq!(store.len(), 3);
    }
}
