use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("An environment logger is already installed")]
    AlreadyInstalled,

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}
