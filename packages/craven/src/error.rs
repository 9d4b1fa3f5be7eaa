use std::collections::TryReserveError;
use std::fmt;

/// Maximum number of characters accepted for a single DSN field
pub const MAX_FIELD_LEN: usize = 255;

/// DSN field names, used in length errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DsnField {
    Protocol,
    PublicKey,
    PrivateKey,
    Host,
    Path,
}

impl fmt::Display for DsnField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DsnField::Protocol => write!(f, "protocol"),
            DsnField::PublicKey => write!(f, "public key"),
            DsnField::PrivateKey => write!(f, "private key"),
            DsnField::Host => write!(f, "host"),
            DsnField::Path => write!(f, "path"),
        }
    }
}

/// DSN parsing and validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DsnError {
    #[error("Syntax error")]
    SyntaxError,

    #[error("Unknown protocol")]
    UnknownProtocol,

    #[error("Missing public key")]
    MissingPublicKey,

    #[error("Missing private key")]
    MissingPrivateKey,

    #[error("Missing host")]
    MissingHost,

    #[error("Missing project id")]
    MissingProjectId,

    #[error("Field too long: {field} exceeds {max} characters")]
    FieldTooLong { field: DsnField, max: usize },
}

/// Errors raised while building an event payload
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Cannot escape double quotes: {0}")]
    EscapeFailure(#[from] TryReserveError),
}

/// HTTP transport errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Transport initialization failed: {0}")]
    Init(String),

    #[error("Transport send failed: {0}")]
    Send(String),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Timeout must be greater than zero")]
    InvalidTimeout,
}

/// Errors returned when constructing a client
#[derive(Debug, thiserror::Error)]
pub enum CravenError {
    #[error("Cannot parse DSN: {0}")]
    Dsn(#[from] DsnError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for client construction
pub type CravenResult<T> = Result<T, CravenError>;
