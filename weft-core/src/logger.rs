//! The logging capability handed to the runtime environment.

use crate::level::LogLevel;

/// A leveled logging backend.
///
/// Loggers are shared for the life of the process as `&'static dyn Logger`,
/// so every operation takes `&self` and implementations must be safe to call
/// from any thread.
pub trait Logger: Send + Sync {
    /// Emits `message` at `level`, tagged with the source location it came from.
    ///
    /// Implementations drop messages below [`Logger::minimum_level`].
    fn log_message(&self, level: LogLevel, source_file: &str, source_line: u32, message: &str);

    /// The least severe level that is currently emitted.
    fn minimum_level(&self) -> LogLevel;

    /// Changes the threshold. Values above `FATAL` are clamped to `FATAL`.
    fn set_minimum_level(&self, level: LogLevel);

    /// Whether a message at `level` passes the current threshold.
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum_level()
    }
}
