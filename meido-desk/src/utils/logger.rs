//! Logging Infrastructure
//!
//! Structured logging setup for development and production.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional rolling file output
///
/// `RUST_LOG` wins over `log_level` when set. Calling this more than once is
/// harmless: later calls keep the first subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = build_filter(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let missing_dir = match log_dir {
        Some(dir) if Path::new(dir).is_dir() => {
            let file_appender = tracing_appender::rolling::daily(dir, "meido-desk");
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
        other => other,
    };

    let _ = subscriber.try_init();
    // 需在订阅者安装之后
    if let Some(dir) = missing_dir {
        tracing::warn!(log_dir = %dir, "Log directory does not exist, logging to stdout");
    }
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
