//! Logging macros.
//!
//! All macros write to [`current_logger`](crate::current_logger) and tag the
//! message with the caller's `file!()` and `line!()`. A `FATAL` message
//! panics after it has been logged, even when the logger filters it out.

use std::fmt;

use crate::level::LogLevel;
use crate::logger::Logger;

#[doc(hidden)]
pub fn dispatch(
    logger: &dyn Logger,
    level: LogLevel,
    source_file: &str,
    source_line: u32,
    args: fmt::Arguments<'_>,
) {
    let message = fmt::format(args);
    logger.log_message(level, source_file, source_line, &message);
    if level.is_fatal() {
        panic!("{}", message);
    }
}

#[doc(hidden)]
#[cold]
pub fn check_failed(source_file: &str, source_line: u32, args: fmt::Arguments<'_>) -> ! {
    dispatch(
        crate::current_logger(),
        LogLevel::FATAL,
        source_file,
        source_line,
        args,
    );
    unreachable!("fatal dispatch returned")
}

/// Logs a formatted message at `level`.
///
/// The message is only formatted when the current logger accepts `level`.
///
/// ```
/// use weft_core::{log, LogLevel};
///
/// log!(LogLevel::INFO, "pipe {} closed", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let level: $crate::LogLevel = $level;
        let logger = $crate::current_logger();
        if $crate::Logger::enabled(logger, level) || level.is_fatal() {
            $crate::__private::dispatch(logger, level, file!(), line!(), format_args!($($arg)+));
        }
    }};
}

/// Logs at `level` when `cond` holds.
#[macro_export]
macro_rules! log_if {
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::log!($level, $($arg)+);
        }
    };
}

/// Logs at verbose depth `n` (`vlog!(1, ..)` is `LogLevel::VERBOSE`).
#[macro_export]
macro_rules! vlog {
    ($n:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::verbose($n), $($arg)+)
    };
}

/// [`log!`] in debug builds only. Arguments are still type-checked in release.
#[macro_export]
macro_rules! dlog {
    ($level:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::log!($level, $($arg)+);
        }
    };
}

/// [`log_if!`] in debug builds only.
#[macro_export]
macro_rules! dlog_if {
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::log_if!($level, $cond, $($arg)+);
        }
    };
}

/// Logs `FATAL` "Check failed: <cond>" and panics when `cond` is false.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::__private::check_failed(
                file!(),
                line!(),
                format_args!("Check failed: {}", stringify!($cond)),
            );
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__private::check_failed(
                file!(),
                line!(),
                format_args!("Check failed: {}. {}", stringify!($cond), format_args!($($arg)+)),
            );
        }
    };
}

/// [`check!`] in debug builds only.
#[macro_export]
macro_rules! dcheck {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::check!($($arg)+);
        }
    };
}
