//! Log severities.
//!
//! A level is a signed integer: `INFO` is zero, more severe levels count up
//! to `FATAL`, and verbose levels count down from `VERBOSE` (`-1`). Anything
//! above `FATAL` is treated as `FATAL`; the deepest verbose level is `-i32::MAX`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LogError;

/// Severity of a log message. Ordered from most verbose to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(i32);

impl LogLevel {
    pub const VERBOSE: LogLevel = LogLevel(-1);
    pub const INFO: LogLevel = LogLevel(0);
    pub const WARNING: LogLevel = LogLevel(1);
    pub const ERROR: LogLevel = LogLevel(2);
    pub const FATAL: LogLevel = LogLevel(3);

    /// Builds a level from its numeric value, clamping anything above `FATAL`
    /// and anything below the deepest verbose level, `-i32::MAX`.
    pub const fn from_raw(value: i32) -> Self {
        if value > Self::FATAL.0 {
            Self::FATAL
        } else if value < -i32::MAX {
            LogLevel(-i32::MAX)
        } else {
            LogLevel(value)
        }
    }

    /// Verbose level `n`. `verbose(1)` is `VERBOSE`; `verbose(0)` is `INFO`.
    pub const fn verbose(n: u32) -> Self {
        if n > i32::MAX as u32 {
            LogLevel(-i32::MAX)
        } else {
            LogLevel(-(n as i32))
        }
    }

    #[inline]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_verbose(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_fatal(self) -> bool {
        self.0 >= Self::FATAL.0
    }

    /// The `tracing` level messages at this severity are emitted with.
    ///
    /// `tracing` has no fatal level, so `FATAL` shares `ERROR`.
    pub fn to_tracing(self) -> tracing::Level {
        match self.0 {
            i32::MIN..=-2 => tracing::Level::TRACE,
            -1 => tracing::Level::DEBUG,
            0 => tracing::Level::INFO,
            1 => tracing::Level::WARN,
            _ => tracing::Level::ERROR,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            -1 => f.write_str("VERBOSE"),
            0 => f.write_str("INFO"),
            1 => f.write_str("WARNING"),
            2 => f.write_str("ERROR"),
            n if n < 0 => write!(f, "VERBOSE{}", n.unsigned_abs()),
            _ => f.write_str("FATAL"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(Self::from_raw(value));
        }

        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "verbose" => Ok(Self::VERBOSE),
            "info" => Ok(Self::INFO),
            "warning" | "warn" => Ok(Self::WARNING),
            "error" => Ok(Self::ERROR),
            "fatal" => Ok(Self::FATAL),
            other => other
                .strip_prefix("verbose")
                .and_then(|depth| depth.parse::<u32>().ok())
                .filter(|depth| *depth > 0)
                .map(Self::verbose)
                .ok_or_else(|| LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        level.to_tracing()
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct LogLevelVisitor;

impl Visitor<'_> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a log level name (e.g. \"warning\") or an integer severity")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LogLevel, E> {
        v.parse().map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LogLevel, E> {
        let value = i32::try_from(v).map_err(|_| E::custom(format!("level {} out of range", v)))?;
        Ok(LogLevel::from_raw(value))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LogLevel, E> {
        // Every non-negative value at or above FATAL collapses to FATAL.
        Ok(LogLevel::from_raw(i32::try_from(v).unwrap_or(i32::MAX)))
    }
}

/// Custom deserializer accepting either a level name or a raw severity.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn named_levels_are_ordered() {
        assert!(LogLevel::VERBOSE < LogLevel::INFO);
        assert!(LogLevel::INFO < LogLevel::WARNING);
        assert!(LogLevel::WARNING < LogLevel::ERROR);
        assert!(LogLevel::ERROR < LogLevel::FATAL);
        assert!(LogLevel::verbose(3) < LogLevel::VERBOSE);
    }

    #[test]
    fn raw_values_above_fatal_clamp() {
        assert_eq!(LogLevel::from_raw(42), LogLevel::FATAL);
        assert_eq!(LogLevel::from_raw(-7).as_raw(), -7);
        assert_eq!(LogLevel::from_raw(i32::MIN), LogLevel::verbose(u32::MAX));
        assert_eq!(LogLevel::from_raw(i32::MIN).as_raw(), -i32::MAX);
    }

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::WARNING);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::WARNING);
        assert_eq!(" fatal ".parse::<LogLevel>().unwrap(), LogLevel::FATAL);
        assert_eq!("VERBOSE4".parse::<LogLevel>().unwrap(), LogLevel::verbose(4));
        assert_eq!("-2".parse::<LogLevel>().unwrap(), LogLevel::verbose(2));
        assert_eq!("2".parse::<LogLevel>().unwrap(), LogLevel::ERROR);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "loud".parse::<LogLevel>(),
            Err(LogError::InvalidLevel("loud".into()))
        );
        assert!("verbose0".parse::<LogLevel>().is_err());
    }

    #[test]
    fn display_uses_level_names() {
        assert_eq!(LogLevel::VERBOSE.to_string(), "VERBOSE");
        assert_eq!(LogLevel::verbose(2).to_string(), "VERBOSE2");
        assert_eq!(LogLevel::WARNING.to_string(), "WARNING");
        assert_eq!(LogLevel::FATAL.to_string(), "FATAL");
    }

    #[test]
    fn maps_onto_tracing_levels() {
        assert_eq!(LogLevel::verbose(5).to_tracing(), tracing::Level::TRACE);
        assert_eq!(LogLevel::VERBOSE.to_tracing(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::INFO.to_tracing(), tracing::Level::INFO);
        assert_eq!(LogLevel::WARNING.to_tracing(), tracing::Level::WARN);
        assert_eq!(LogLevel::FATAL.to_tracing(), tracing::Level::ERROR);
    }

    #[test]
    fn deserializes_from_yaml_names_and_integers() {
        let levels: Vec<LogLevel> = serde_yaml::from_str("[info, ERROR, -3, 9]").unwrap();
        assert_eq!(
            levels,
            vec![
                LogLevel::INFO,
                LogLevel::ERROR,
                LogLevel::verbose(3),
                LogLevel::FATAL
            ]
        );
        assert!(serde_yaml::from_str::<LogLevel>("shouting").is_err());
    }

    #[test]
    fn serializes_as_name() {
        let yaml = serde_yaml::to_string(&LogLevel::WARNING).unwrap();
        assert_eq!(yaml.trim(), "WARNING");
    }

    proptest! {
        #[test]
        fn ordering_follows_raw_value(a in -100i32..=3, b in -100i32..=3) {
            prop_assert_eq!(a <= b, LogLevel::from_raw(a) <= LogLevel::from_raw(b));
        }

        #[test]
        fn tracing_mapping_is_monotonic(a in -100i32..100, b in -100i32..100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // tracing orders levels with TRACE as the greatest.
            prop_assert!(LogLevel::from_raw(lo).to_tracing() >= LogLevel::from_raw(hi).to_tracing());
        }

        #[test]
        fn display_parses_back(raw in any::<i32>()) {
            let level = LogLevel::from_raw(raw);
            prop_assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }
}
