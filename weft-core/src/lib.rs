//! # weft-core
//!
//! Logging foundation for the weft IPC runtime environment.
//!
//! ### Key Submodules:
//! - `level`: signed severities, from deep verbose up to fatal
//! - `logger`: the `Logger` capability every logging backend implements
//! - `default_logger`: the process-wide logger used when none is configured
//! - `environment`: selects and installs the logger the runtime writes to
//! - `macros`: `log!`, `check!` and friends, routed through the current logger
//!
//! The default logger is a `static`, so reaching it never allocates, locks
//! or fails:
//!
//! ```
//! use weft_core::{default_logger, LogLevel, Logger};
//!
//! let logger = default_logger();
//! assert!(logger.minimum_level() <= LogLevel::FATAL);
//! ```

pub mod default_logger;
pub mod environment;
pub mod error;
pub mod level;
pub mod logger;
mod macros;

pub use default_logger::{default_logger, DefaultLogger};
pub use environment::{current_logger, Environment};
pub use error::LogError;
pub use level::LogLevel;
pub use logger::Logger;

#[doc(hidden)]
pub mod __private {
    pub use crate::macros::{check_failed, dispatch};
}
