//! Reporting client.
//!
//! The DSN is parsed and the transport configured once, at construction.
//! Each event then builds its own payload and headers and is sent with a
//! single blocking POST. Nothing that happens during an event is returned
//! to the caller as an error: failures are logged and the call returns.

use std::fmt;

use url::Url;

use crate::config::ClientConfig;
use crate::dsn::{self, Dsn, ParsedDsn};
use crate::error::{CravenResult, DsnError, TransportError};
use crate::event::{build_payload, user_agent};
use crate::transport::{parse_endpoint, HttpTransport, Transport};

/// Lifecycle state of a [`ReportingClient`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// DSN parsed and transport configured: events are sent
    Active,
    /// Empty DSN or transport setup failed: events are dropped
    Inactive,
    /// Closed by the caller: events are dropped
    Closed,
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// What happened to a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Delivered to the transport without a transport-level error
    Sent,
    /// Not sent because the client is inactive or closed
    Skipped,
    /// Building or sending the event failed (already logged)
    Failed,
}

struct ActiveClient {
    dsn: Dsn,
    endpoint: Url,
    transport: Box<dyn Transport>,
}

enum Inner {
    Active(ActiveClient),
    Inactive,
    Closed,
}

/// Client reporting error events to a Sentry-compatible store endpoint
pub struct ReportingClient {
    inner: Inner,
}

impl ReportingClient {
    /// Connects with the default configuration for `dsn`.
    ///
    /// An empty `dsn` yields an inactive client. A malformed one is logged
    /// and returned as an error.
    pub fn connect(dsn: &str) -> Result<Self, DsnError> {
        Self::from_config(&ClientConfig::new(dsn))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, DsnError> {
        let timeout = config.timeout;
        Self::build(&config.dsn, move || {
            Ok(Box::new(HttpTransport::new(timeout)?) as Box<dyn Transport>)
        })
    }

    /// Connects using `SENTRY_DSN` and `CRAVEN_TIMEOUT_SECS`
    pub fn from_env() -> CravenResult<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::from_config(&config)?)
    }

    /// Connects with a caller-provided transport
    pub fn with_transport<T>(dsn: &str, transport: T) -> Result<Self, DsnError>
    where
        T: Transport + 'static,
    {
        Self::build(dsn, move || Ok(Box::new(transport) as Box<dyn Transport>))
    }

    fn build<F>(raw: &str, make_transport: F) -> Result<Self, DsnError>
    where
        F: FnOnce() -> Result<Box<dyn Transport>, TransportError>,
    {
        let parsed = dsn::parse(raw).map_err(|e| {
            log::error!("Cannot parse DSN: {} (in {})", e, raw);
            e
        })?;

        let dsn = match parsed {
            ParsedDsn::Empty => {
                log::info!("Empty DSN, error reporting is disabled");
                return Ok(Self {
                    inner: Inner::Inactive,
                });
            }
            ParsedDsn::Configured(dsn) => dsn,
        };

        let inner = match Self::configure(dsn, make_transport) {
            Ok(active) => {
                log::debug!("Reporting events to {}", active.endpoint);
                Inner::Active(active)
            }
            Err(e) => {
                log::error!("{}, error reporting is disabled", e);
                Inner::Inactive
            }
        };

        Ok(Self { inner })
    }

    fn configure<F>(dsn: Dsn, make_transport: F) -> Result<ActiveClient, TransportError>
    where
        F: FnOnce() -> Result<Box<dyn Transport>, TransportError>,
    {
        let endpoint = parse_endpoint(&dsn.store_endpoint())?;
        let transport = make_transport()?;

        Ok(ActiveClient {
            dsn,
            endpoint,
            transport,
        })
    }

    pub fn state(&self) -> ClientState {
        match self.inner {
            Inner::Active(_) => ClientState::Active,
            Inner::Inactive => ClientState::Inactive,
            Inner::Closed => ClientState::Closed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == ClientState::Active
    }

    /// Store endpoint, when active
    pub fn endpoint(&self) -> Option<&str> {
        match &self.inner {
            Inner::Active(active) => Some(active.endpoint.as_str()),
            _ => None,
        }
    }

    /// DSN in use, when active
    pub fn dsn(&self) -> Option<&Dsn> {
        match &self.inner {
            Inner::Active(active) => Some(&active.dsn),
            _ => None,
        }
    }

    /// Reports one event with an already formatted message
    pub fn event(&self, file: &str, line: u32, function: &str, message: &str) -> EventOutcome {
        let active = match &self.inner {
            Inner::Active(active) => active,
            Inner::Inactive | Inner::Closed => {
                log::warn!(
                    "Craven client is {}, event dropped: {} (in function `{}` [{}:{}])",
                    self.state(),
                    message,
                    function,
                    file,
                    line
                );
                return EventOutcome::Skipped;
            }
        };

        let (body, auth) = match build_payload(&active.dsn, file, line, function, message) {
            Ok(built) => built,
            Err(e) => {
                log::error!(
                    "{}: {} (in function `{}` [{}:{}])",
                    e,
                    message,
                    function,
                    file,
                    line
                );
                return EventOutcome::Failed;
            }
        };

        let user_agent = user_agent();
        let headers = [
            ("User-Agent", user_agent.as_str()),
            ("Content-Type", "application/json"),
            ("X-Sentry-Auth", auth.as_str()),
        ];

        match active.transport.post(&active.endpoint, &headers, body) {
            Ok(()) => {
                log::debug!("Event sent to {} ({}:{})", active.endpoint, file, line);
                EventOutcome::Sent
            }
            Err(e) => {
                log::error!("Error when posting to Sentry: {}", e);
                EventOutcome::Failed
            }
        }
    }

    /// Reports one event, formatting the message first.
    ///
    /// Usually called through the [`craven!`](crate::craven) macro.
    pub fn event_fmt(
        &self,
        file: &str,
        line: u32,
        function: &str,
        args: fmt::Arguments<'_>,
    ) -> EventOutcome {
        match args.as_str() {
            Some(message) => self.event(file, line, function, message),
            None => self.event(file, line, function, &args.to_string()),
        }
    }

    /// Releases the transport. Safe to call more than once.
    pub fn close(&mut self) {
        if let Inner::Active(active) = &self.inner {
            log::debug!("Closing client for {}", active.endpoint);
        }
        self.inner = Inner::Closed;
    }
}

impl fmt::Debug for ReportingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportingClient")
            .field("state", &self.state())
            .field("endpoint", &self.endpoint())
            .finish()
    }
}
