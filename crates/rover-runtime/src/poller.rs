//! [`CommandPoller`] – HTTP client for the controller's status endpoint.
//!
//! One poll is one GET with a bounded timeout, expecting a JSON body of the
//! form `{"direction": "<string>"}`. A missing or unrecognized `direction`
//! field is not an error: it resolves to [`Direction::Stop`] at the parsing
//! layer. Transport-level failures are classified into [`PollError`] kinds
//! whose only job is to map onto distinct [`LinkFault`] states, so the loop
//! can tell a persisting failure from a new one.

use std::time::Duration;

use async_trait::async_trait;
use rover_types::{Direction, LinkFault};
use serde::Deserialize;
use thiserror::Error;

/// Errors from one poll of the controller endpoint.
#[derive(Debug, Error)]
pub enum PollError {
    /// The controller could not be reached at all (refused, DNS, transport).
    #[error("controller unreachable: {0}")]
    Unreachable(String),

    /// The request did not complete within the configured deadline.
    #[error("controller did not answer in time: {0}")]
    Timeout(String),

    /// Any other fault: non-2xx status, undecodable body, client setup.
    #[error("unexpected controller fault: {0}")]
    Other(String),
}

impl PollError {
    /// Pure mapping into the fail-safe link state the loop de-duplicates on.
    pub fn fault(&self) -> LinkFault {
        match self {
            PollError::Timeout(_) => LinkFault::Timeout,
            PollError::Unreachable(_) | PollError::Other(_) => LinkFault::Error,
        }
    }

    fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PollError::Timeout(err.to_string())
        } else if err.is_connect() {
            PollError::Unreachable(err.to_string())
        } else {
            PollError::Other(err.to_string())
        }
    }
}

/// Shape of the controller's status response body.
#[derive(Debug, Deserialize)]
struct StatusBody {
    /// Absent means "no order"; the fail-safe default applies.
    #[serde(default)]
    direction: Option<String>,
}

/// Anything the control loop can poll a [`Direction`] from.
///
/// [`CommandPoller`] is the production implementation; tests drive the loop
/// with scripted sources through this seam.
#[async_trait]
pub trait DirectionSource: Send {
    async fn poll(&mut self) -> Result<Direction, PollError>;
}

/// HTTP poller for the remote controller.
///
/// Construct once and reuse across loop iterations; the underlying client
/// carries the per-request deadline.
pub struct CommandPoller {
    client: reqwest::Client,
    endpoint: String,
}

impl CommandPoller {
    /// Create a poller for `endpoint` with a bounded per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Other`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PollError::Other(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Issue one request and parse the current directive.
    ///
    /// Any 2xx response with a decodable body is accepted; the directive
    /// itself can never fail to parse (unknown and absent both mean stop).
    ///
    /// # Errors
    ///
    /// Classified per [`PollError`]: non-2xx statuses and undecodable bodies
    /// land in [`PollError::Other`].
    pub async fn poll_once(&self) -> Result<Direction, PollError> {
        let body: StatusBody = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(PollError::classify)?
            .error_for_status()
            .map_err(|e| PollError::Other(e.to_string()))?
            .json()
            .await
            .map_err(|e| PollError::Other(e.to_string()))?;
        Ok(Direction::from_wire(body.direction.as_deref()))
    }
}

#[async_trait]
impl DirectionSource for CommandPoller {
    async fn poll(&mut self) -> Result<Direction, PollError> {
        self.poll_once().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_its_own_fault_state() {
        assert_eq!(
            PollError::Timeout("deadline".into()).fault(),
            LinkFault::Timeout
        );
    }

    #[test]
    fn everything_else_maps_to_the_error_state() {
        assert_eq!(
            PollError::Unreachable("refused".into()).fault(),
            LinkFault::Error
        );
        assert_eq!(PollError::Other("http 500".into()).fault(), LinkFault::Error);
    }

    #[test]
    fn status_body_with_direction_parses() {
        let body: StatusBody = serde_json::from_str(r#"{"direction":"left"}"#).unwrap();
        assert_eq!(
            Direction::from_wire(body.direction.as_deref()),
            Direction::Left
        );
    }

    #[test]
    fn status_body_without_direction_defaults_to_stop() {
        let body: StatusBody = serde_json::from_str("{}").unwrap();
        assert_eq!(
            Direction::from_wire(body.direction.as_deref()),
            Direction::Stop
        );
    }

    #[test]
    fn unknown_directive_defaults_to_stop() {
        let body: StatusBody = serde_json::from_str(r#"{"direction":"diagonal"}"#).unwrap();
        assert_eq!(
            Direction::from_wire(body.direction.as_deref()),
            Direction::Stop
        );
    }

    #[tokio::test]
    async fn poll_against_dead_endpoint_is_a_link_fault_not_a_panic() {
        // Nothing listens on this port; the poll must classify, not panic.
        let poller =
            CommandPoller::new("http://127.0.0.1:9", Duration::from_millis(250)).unwrap();
        let err = poller.poll_once().await.unwrap_err();
        assert_eq!(err.fault(), LinkFault::Error);
    }
}
