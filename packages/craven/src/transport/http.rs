use std::sync::OnceLock;
use std::time::Duration;

use url::Url;

use super::{Header, Transport};
use crate::error::TransportError;

/// Process-wide HTTP client (connection pool and TLS setup), built once
static HTTP_CLIENT: OnceLock<Result<reqwest::blocking::Client, String>> = OnceLock::new();

/// Initializes the shared HTTP client on first use.
///
/// Later calls return a handle to the same client. A failed
/// initialization is remembered and reported on every call.
///
/// The blocking client owns an internal runtime, so it is built and
/// driven on plain threads; callers may sit inside an async runtime.
pub fn init() -> Result<reqwest::blocking::Client, TransportError> {
    HTTP_CLIENT
        .get_or_init(|| {
            log::debug!("Initializing HTTP transport");
            std::thread::spawn(|| {
                reqwest::blocking::Client::builder()
                    .build()
                    .map_err(|e| e.to_string())
            })
            .join()
            .unwrap_or_else(|_| Err("HTTP client builder thread panicked".to_string()))
        })
        .clone()
        .map_err(TransportError::Init)
}

/// Blocking reqwest transport.
///
/// Each instance shares the process-wide client and applies its own
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            client: init()?,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &Url, headers: &[Header<'_>], body: String) -> Result<(), TransportError> {
        let mut request = self.client.post(url.clone()).timeout(self.timeout);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let request = request.body(body);
        // The response is dropped on the sending thread too
        let sent = std::thread::scope(|scope| {
            scope
                .spawn(move || request.send().map(|response| response.status()))
                .join()
        })
        .map_err(|_| TransportError::Send("HTTP send thread panicked".to_string()))?;

        match sent {
            Ok(status) => {
                if !status.is_success() {
                    log::warn!("Store endpoint {} answered HTTP {}", url, status.as_u16());
                }
                Ok(())
            }
            Err(e) => {
                let error_msg = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    format!("Connection failed: {}", e)
                } else {
                    format!("Request failed: {}", e)
                };
                Err(TransportError::Send(error_msg))
            }
        }
    }
}
