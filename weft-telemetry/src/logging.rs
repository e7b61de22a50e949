//! ## weft-telemetry::logging
//! **`tracing-subscriber` backend for the default logger**
//!
//! The default logger only decides *whether* a message is emitted; this
//! module decides where it goes and how it looks. JSON output carries
//! RFC 3339 UTC timestamps.

use thiserror::Error;
use tracing::info;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter};
use weft_config::{LogFormat, LoggingConfig};
use weft_core::{default_logger, LogLevel, Logger};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,

    #[error("Invalid filter directive: {0}")]
    Filter(#[from] ParseError),
}

/// `EnvFilter` directive used when `RUST_LOG` is not set.
pub fn filter_directive(config: &LoggingConfig) -> String {
    if let Some(filter) = &config.filter {
        return filter.clone();
    }

    let level = config.minimum_level;
    let name = if level < LogLevel::VERBOSE {
        "trace"
    } else if level == LogLevel::VERBOSE {
        "debug"
    } else if level == LogLevel::INFO {
        "info"
    } else if level == LogLevel::WARNING {
        "warn"
    } else {
        "error"
    };
    name.to_string()
}

/// Installs the global subscriber, then applies `config` to the default logger.
///
/// Call once at startup. On error the default logger is left untouched. `RUST_LOG` takes precedence over the configured filter.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(config))?,
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_thread_names(config.thread_names)
        .with_ansi(config.ansi);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(UtcTime::rfc_3339())
            .try_init(),
    };
    installed.map_err(|_| TelemetryError::AlreadyInitialized)?;
    default_logger().set_minimum_level(config.minimum_level);

    info!(
        minimum_level = %config.minimum_level,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}
