//! ## weft-core::default_logger
//! **The logger used when the embedder configures none**
//!
//! There is exactly one `DefaultLogger` per process: a `static` built by a
//! `const fn`, so it exists before `main` and needs no initialization guard.
//! Callers only ever see it as `&'static dyn Logger`.
//!
//! Messages that pass the threshold are forwarded to `tracing`; whichever
//! subscriber the process installed decides where they end up.

use std::sync::atomic::{AtomicI32, Ordering};

use tracing::{debug, error, info, trace, warn};

use crate::level::LogLevel;
use crate::logger::Logger;

static DEFAULT_LOGGER: DefaultLogger = DefaultLogger::new();

/// Returns the process-wide default logger.
///
/// Every call, from every thread, returns the same instance.
#[inline]
pub fn default_logger() -> &'static dyn Logger {
    &DEFAULT_LOGGER
}

/// `tracing`-backed logger with an atomic severity threshold.
#[derive(Debug)]
pub struct DefaultLogger {
    // Raw LogLevel; relaxed is enough since it only gates output.
    minimum: AtomicI32,
}

impl DefaultLogger {
    const fn new() -> Self {
        Self {
            minimum: AtomicI32::new(LogLevel::INFO.as_raw()),
        }
    }
}

macro_rules! emit {
    ($macro:ident, $severity:ident, $file:ident, $line:ident, $message:ident) => {
        $macro!(
            source_file = %$file,
            source_line = $line,
            severity = $severity,
            "{}",
            $message
        )
    };
}

impl Logger for DefaultLogger {
    fn log_message(&self, level: LogLevel, source_file: &str, source_line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let severity = level.as_raw();
        match level.to_tracing() {
            tracing::Level::ERROR => emit!(error, severity, source_file, source_line, message),
            tracing::Level::WARN => emit!(warn, severity, source_file, source_line, message),
            tracing::Level::INFO => emit!(info, severity, source_file, source_line, message),
            tracing::Level::DEBUG => emit!(debug, severity, source_file, source_line, message),
            _ => emit!(trace, severity, source_file, source_line, message),
        }
    }

    #[inline]
    fn minimum_level(&self) -> LogLevel {
        LogLevel::from_raw(self.minimum.load(Ordering::Relaxed))
    }

    fn set_minimum_level(&self, level: LogLevel) {
        let clamped = level.min(LogLevel::FATAL);
        self.minimum.store(clamped.as_raw(), Ordering::Relaxed);
    }
}
