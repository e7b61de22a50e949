//! Custom validation functions for configuration.

use validator::ValidationError;
use weft_core::LogLevel;

/// Deepest verbose level a configuration may ask for.
pub const MAX_VERBOSE_DEPTH: u32 = 9;

/// Validate that a minimum level lies between `VERBOSE9` and `FATAL`.
pub fn validate_minimum_level(level: &LogLevel) -> Result<(), ValidationError> {
    if *level >= LogLevel::verbose(MAX_VERBOSE_DEPTH) && *level <= LogLevel::FATAL {
        Ok(())
    } else {
        Err(ValidationError::new("level_out_of_range"))
    }
}

/// Validate that a filter directive only uses characters `EnvFilter` accepts
/// (`target::path=level,other=level`, span names in brackets, field values).
pub fn validate_filter_directive(directive: &str) -> Result<(), ValidationError> {
    let valid = !directive.trim().is_empty()
        && directive.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(
                    c,
                    '_' | '-' | ':' | '=' | ',' | '.' | '[' | ']' | '{' | '}' | '"' | ' '
                )
        });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_filter_directive"))
    }
}
