//! Event payload construction.
//!
//! Turns a source location and a formatted message into the JSON body and
//! authentication header sent to the store endpoint.

pub mod auth;
pub mod escape;
pub mod payload;

use crate::dsn::Dsn;
use crate::error::PayloadError;

pub use auth::AuthHeader;
pub use escape::escape_double_quotes;
pub use payload::EventPayload;

/// Client name reported in `sentry_client` and `User-Agent`
pub const CLIENT_NAME: &str = "craven";

/// Client version reported in `sentry_client` and `User-Agent`
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentry store protocol version
pub const SENTRY_PROTOCOL_VERSION: u32 = 7;

/// `User-Agent` header value
pub fn user_agent() -> String {
    format!("{}/{}", CLIENT_NAME, CLIENT_VERSION)
}

/// Builds the JSON body and `X-Sentry-Auth` value for one event
pub fn build_payload(
    dsn: &Dsn,
    file: &str,
    line: u32,
    function: &str,
    message: &str,
) -> Result<(String, String), PayloadError> {
    let payload = EventPayload::new(file, line, function, message)?;
    let auth = AuthHeader::now(dsn);

    Ok((payload.to_json(), auth.to_string()))
}
