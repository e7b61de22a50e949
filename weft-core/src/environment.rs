//! Runtime environment wiring.
//!
//! An [`Environment`] decides which logger the runtime writes to: the
//! embedder's own, or the process default. Installing an environment makes
//! its logger the one returned by [`current_logger`] for the rest of the
//! process; it can only happen once.

use std::fmt;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::default_logger::default_logger;
use crate::error::LogError;
use crate::logger::Logger;

static INSTALLED_LOGGER: OnceCell<&'static dyn Logger> = OnceCell::new();

/// Logger used by the logging macros: the installed environment's, or the
/// default logger when no environment has been installed.
#[inline]
pub fn current_logger() -> &'static dyn Logger {
    INSTALLED_LOGGER.get().copied().unwrap_or_else(default_logger)
}

#[derive(Clone, Copy)]
pub struct Environment {
    logger: &'static dyn Logger,
}

impl Environment {
    /// Environment backed by the process default logger.
    pub fn new() -> Self {
        Self {
            logger: default_logger(),
        }
    }

    /// Environment backed by an embedder-supplied logger.
    pub fn with_logger(logger: &'static dyn Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &'static dyn Logger {
        self.logger
    }

    /// The process default logger, regardless of which one this environment uses.
    pub fn default_logger() -> &'static dyn Logger {
        default_logger()
    }

    /// Makes this environment's logger the process-wide current logger.
    pub fn install(self) -> Result<(), LogError> {
        INSTALLED_LOGGER
            .set(self.logger)
            .map_err(|_| LogError::AlreadyInstalled)?;
        debug!(
            minimum_level = %self.logger.minimum_level(),
            "Environment logger installed"
        );
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("logger", &(self.logger as *const dyn Logger as *const ()))
            .field("minimum_level", &self.logger.minimum_level())
            .finish()
    }
}
