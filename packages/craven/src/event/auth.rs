use std::fmt;

use crate::dsn::Dsn;
use crate::event::{CLIENT_NAME, CLIENT_VERSION, SENTRY_PROTOCOL_VERSION};

/// Value of the `X-Sentry-Auth` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader<'a> {
    pub timestamp: i64,
    pub key: &'a str,
    pub secret: &'a str,
}

impl<'a> AuthHeader<'a> {
    /// Builds the header for `dsn` with an explicit unix timestamp (seconds)
    pub fn new(dsn: &'a Dsn, timestamp: i64) -> Self {
        Self {
            timestamp,
            key: dsn.public_key(),
            secret: dsn.private_key(),
        }
    }

    /// Builds the header for `dsn`, stamped with the current time
    pub fn now(dsn: &'a Dsn) -> Self {
        Self::new(dsn, chrono::Utc::now().timestamp())
    }
}

impl fmt::Display for AuthHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sentry sentry_version={},sentry_timestamp={},sentry_key={},sentry_secret={},sentry_client={}/{}",
            SENTRY_PROTOCOL_VERSION, self.timestamp, self.key, self.secret, CLIENT_NAME, CLIENT_VERSION
        )
    }
}
