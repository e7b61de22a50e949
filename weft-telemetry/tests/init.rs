use weft_config::{LogFormat, LoggingConfig};
use weft_core::{default_logger, LogLevel, Logger};
use weft_telemetry::{init, TelemetryError};

// One test per binary: the subscriber and the default logger are process-wide.
#[test]
fn init_applies_threshold_and_installs_once() {
    let config = LoggingConfig {
        minimum_level: LogLevel::WARNING,
        format: LogFormat::Json,
        ansi: false,
        ..Default::default()
    };

    init(&config).expect("first init succeeds");
    assert_eq!(default_logger().minimum_level(), LogLevel::WARNING);

    default_logger().log_message(LogLevel::ERROR, file!(), line!(), "after init");

    let again = init(&LoggingConfig::default());
    assert!(matches!(again, Err(TelemetryError::AlreadyInitialized)));
}
