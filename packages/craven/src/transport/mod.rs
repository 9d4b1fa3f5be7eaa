//! HTTP transport used to deliver events.
//!
//! The client only needs "POST this body with these headers to this URL".
//! [`HttpTransport`] provides it on top of reqwest's blocking client; tests
//! plug in their own implementations.

pub mod http;

use url::Url;

use crate::error::TransportError;

pub use http::{init, HttpTransport};

/// A single request header (name, value)
pub type Header<'a> = (&'a str, &'a str);

/// Synchronous delivery of one request
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url`.
    ///
    /// Only transport-level failures are errors; the response body is
    /// discarded.
    fn post(&self, url: &Url, headers: &[Header<'_>], body: String) -> Result<(), TransportError>;
}

/// Parses and checks the store endpoint before any request is made
pub fn parse_endpoint(endpoint: &str) -> Result<Url, TransportError> {
    let url = Url::parse(endpoint)
        .map_err(|e| TransportError::Init(format!("Invalid endpoint URL '{}': {}", endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(TransportError::Init(format!(
            "Endpoint must use HTTP or HTTPS: {}",
            endpoint
        )));
    }

    Ok(url)
}
