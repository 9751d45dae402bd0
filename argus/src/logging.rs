// argus/src/logging.rs

use log::{LevelFilter, SetLoggerError};
use std::io::Write;
use std::sync::Once;

/// Initialize the logging system with the specified log level
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(level)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {} - {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.args()
                )
            })
            .init();
    });

    Ok(())
}

/// Log level for different components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Subsystem logging macro for the dashboard feed
#[macro_export]
macro_rules! feed_log {
    ($level:expr, $($arg:tt)*) => {{
        match $level {
            $crate::logging::LogLevel::Trace => log::trace!("[FEED] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Debug => log::debug!("[FEED] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Info => log::info!("[FEED] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Warn => log::warn!("[FEED] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Error => log::error!("[FEED] {}", format_args!($($arg)*)),
        }
    }};
}

/// Subsystem logging macro for the query side
#[macro_export]
macro_rules! query_log {
    ($level:expr, $($arg:tt)*) => {{
        match $level {
            $crate::logging::LogLevel::Trace => log::trace!("[QUERY] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Debug => log::debug!("[QUERY] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Info => log::info!("[QUERY] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Warn => log::warn!("[QUERY] {}", format_args!($($arg)*)),
            $crate::logging::LogLevel::Error => log::error!("[QUERY] {}", format_args!($($arg)*)),
        }
    }};
}
