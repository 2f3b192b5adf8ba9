//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The configured host/port does not form a valid socket address.
    #[error("invalid bind address: {0}")]
    BindAddr(#[from] std::net::AddrParseError),

    /// IO error (bind failure, accept failure).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
