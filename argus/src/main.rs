use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use log::LevelFilter;

use argus::cli::{
    AlertsArgs, Cli, Commands, DashboardArgs, ExportArgs, FeedArgs, InvestigateArgs,
    NotesCommands, SearchArgs,
};
use argus::error::{ArgusError, Result};
use argus::logging::{init_logging, LogLevel};
use argus::query_log;
use argus::siem::dashboard::{ConsoleRenderer, DashboardFeed};
use argus::siem::export::{export_filename, export_record};
use argus::siem::generator::RecordGenerator;
use argus::siem::investigate::build_investigation;
use argus::siem::models::{sample_records, DashboardConfig, QueryOptions};
use argus::siem::notes::{NoteStore, SledNoteStore};
use argus::siem::query;
use argus::siem::store::LogStore;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on CLI argument
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to 'info'",
                cli.log_level
            );
            LevelFilter::Info
        }
    };

    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.command {
        Commands::Version => {
            println!("argus v{}", env!("CARGO_PKG_VERSION"));
            println!("Mock security operations dashboard engine");
            println!("License: Apache 2.0");
        }
        Commands::Dashboard(args) => run_dashboard(&config, args),
        Commands::Search(args) => run_search(&config, args),
        Commands::Metrics(args) => {
            let store = seeded_store(&config, args);
            let metrics = query::compute_metrics(&store.snapshot());
            println!("Total events:     {}", metrics.total_events);
            println!("Critical alerts:  {}", metrics.critical_alerts);
            println!("High alerts:      {}", metrics.high_alerts);
            println!("Blocked threats:  {}", metrics.blocked_threats);
            println!("Active threats:   {}", metrics.active_threats);
            println!("Known IPs:        {}", metrics.known_ips);
            println!("Malware detected: {}", metrics.malware_detected);
        }
        Commands::Alerts(args) => run_alerts(&config, args),
        Commands::Activity(args) => {
            let store = seeded_store(&config, args);
            let buckets = query::hourly_histogram(&store.snapshot(), Utc::now());
            for bucket in &buckets {
                println!("{:>5} {:>3} {}", bucket.label, bucket.count, "#".repeat(bucket.count));
            }
        }
        Commands::Investigate(args) => run_investigate(&config, args),
        Commands::Export(args) => run_export(&config, args),
        Commands::Notes { command } => run_notes(&config, command),
    }
}

fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)?;
            serde_json::from_str(&raw)
                .map_err(|e| ArgusError::ConfigError(format!("invalid dashboard config: {}", e)))
        }
        None => Ok(DashboardConfig::default()),
    }
}

/// Materialize a record collection for the one-shot commands: the seeded
/// samples plus any requested synthetic records.
fn seeded_store(config: &DashboardConfig, feed: &FeedArgs) -> LogStore {
    let store = LogStore::new(config.max_retained_records);
    store.seed(sample_records(Utc::now()));

    if feed.generate > 0 {
        let mut generator = match feed.seed {
            Some(seed) => RecordGenerator::with_seed(seed),
            None => RecordGenerator::new(),
        };
        for _ in 0..feed.generate {
            store.insert(generator.next_record());
        }
    }

    store
}

fn run_dashboard(config: &DashboardConfig, args: &DashboardArgs) {
    let store = LogStore::new(config.max_retained_records);
    store.seed(sample_records(Utc::now()));

    let generator = match args.seed {
        Some(seed) => RecordGenerator::with_seed(seed),
        None => RecordGenerator::new(),
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start the async runtime: {}", e);
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        let (feed, rx) = DashboardFeed::new(store, config.clone(), generator);
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let renderer = tokio::spawn(ConsoleRenderer::run(rx));
        let feed_task = tokio::spawn(feed.run(shutdown_rx));

        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Could not wait for the shutdown signal: {}", e);
        }

        let _ = shutdown_tx.send(());
        let _ = feed_task.await;
        let _ = renderer.await;
        log::info!("Dashboard stopped");
    });
}

fn run_search(config: &DashboardConfig, args: &SearchArgs) {
    let store = seeded_store(config, &args.feed);
    let snapshot = store.snapshot();

    let options = QueryOptions::from_raw(&args.time_range, &args.severity, args.query.as_deref());
    let results = query::filter(&snapshot, &options, Utc::now());
    query_log!(
        LogLevel::Debug,
        "filter returned {} of {} records",
        results.len(),
        snapshot.len()
    );

    match args.format.as_str() {
        "json" => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            for record in &results {
                println!(
                    "{}  [{}] {} / {}: {}",
                    record.timestamp.format("%b %d %H:%M:%S"),
                    record.severity.as_str(),
                    record.source,
                    record.event_type,
                    record.message
                );
            }
            println!("{} results", results.len());
        }
    }
}

fn run_alerts(config: &DashboardConfig, args: &AlertsArgs) {
    let store = seeded_store(config, &args.feed);
    let alerts = query::top_alerts(&store.snapshot(), args.limit);

    if alerts.is_empty() {
        println!("No critical or high alerts");
        return;
    }
    for alert in &alerts {
        println!(
            "[{}] {}  {} - {}",
            alert.severity.as_str(),
            alert.timestamp.format("%b %d %H:%M:%S"),
            alert.event_type,
            alert.message
        );
    }
}

fn run_investigate(config: &DashboardConfig, args: &InvestigateArgs) {
    let store = seeded_store(config, &args.feed);
    let snapshot = store.snapshot();

    let record = match snapshot.get(args.index) {
        Some(record) => record,
        None => {
            eprintln!(
                "No record at index {} ({} records in the collection)",
                args.index,
                snapshot.len()
            );
            std::process::exit(1);
        }
    };

    let investigation = build_investigation(&snapshot, record, config.correlation_limit);

    if args.format == "json" {
        match serde_json::to_string_pretty(&investigation) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize investigation: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "Record {}  [{}] {} / {}",
        record.id,
        record.severity.as_str(),
        record.source,
        record.event_type
    );
    println!("\nTimeline:");
    for entry in &investigation.timeline {
        println!(
            "  {}  {}: {}",
            entry.time.format("%b %d %H:%M:%S"),
            entry.title,
            entry.description
        );
    }
    println!("\nEvidence:");
    for item in &investigation.evidence {
        println!("  {}: {}", item.title, item.description);
    }
    println!("\nRelated events:");
    for related in &investigation.related {
        println!(
            "  {}  [{}] {} / {}",
            related.timestamp.format("%b %d %H:%M:%S"),
            related.severity.as_str(),
            related.source,
            related.event_type
        );
    }

    let notes = SledNoteStore::open(&config.notes_path);
    if let Some(text) = notes.load_note(&record.id) {
        println!("\nNotes: {}", text);
    }
}

fn run_export(config: &DashboardConfig, args: &ExportArgs) {
    let store = seeded_store(config, &args.feed);
    let snapshot = store.snapshot();

    let record = match snapshot.get(args.index) {
        Some(record) => record,
        None => {
            eprintln!(
                "No record at index {} ({} records in the collection)",
                args.index,
                snapshot.len()
            );
            std::process::exit(1);
        }
    };

    let json = match export_record(record) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Export failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.stdout {
        println!("{}", json);
        return;
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_filename(record)));
    if let Err(e) = std::fs::write(&path, &json) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    println!("Exported record to {}", path.display());
}

fn run_notes(config: &DashboardConfig, command: &NotesCommands) {
    let store = SledNoteStore::open(&config.notes_path);

    match command {
        NotesCommands::Save { record_id, text } => match store.save_note(record_id, text) {
            Ok(()) => println!("Notes saved successfully"),
            Err(e) => {
                eprintln!("Failed to save notes: {}", e);
                std::process::exit(1);
            }
        },
        NotesCommands::Show { record_id } => match store.load_note(record_id) {
            Some(text) => println!("{}", text),
            None => println!("No notes for record {}", record_id),
        },
        NotesCommands::Delete { record_id } => match store.delete_note(record_id) {
            Ok(()) => println!("Notes deleted"),
            Err(e) => {
                eprintln!("Failed to delete notes: {}", e);
                std::process::exit(1);
            }
        },
    }
}
