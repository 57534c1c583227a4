//! Timeout-bounded backend health probe.

use std::time::Duration;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

/// Pointer attached to every failure report.
pub const TROUBLESHOOTING_URL: &str =
    "https://github.com/prefpane/prefpane/blob/master/doc/TROUBLESHOOTING.md";

/// Hard deadline for the status round trip.
pub const STATUS_TIMEOUT: Duration = Duration::from_millis(1000);

/// Ways the status check can fail. All of them are terminal for one check;
/// nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The backend answered with a non-success status.
    #[error("backend error: {status} {reason}")]
    Http { status: u16, reason: String },

    /// The deadline elapsed before the backend answered.
    #[error("connection timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The request never completed (unreachable host, reset, ...).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered 2xx but the body was not JSON.
    #[error("unreadable status payload: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Health check against `{host}/status`, authenticated with the panel's
/// token and bounded by a hard timeout.
pub struct StatusProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl StatusProbe {
    pub fn new() -> Result<Self> {
        Self::with_timeout(STATUS_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("prefpane/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    /// POST `{host}/status` with the token as basic auth.
    ///
    /// When the deadline wins, the request future is dropped, which also
    /// aborts the in-flight call - the timeout branch leaks nothing.
    pub async fn check(&self, host: &str, token: &str) -> Result<serde_json::Value, ProbeError> {
        let url = format!("{host}/status");
        let auth = format!("Basic {}", STANDARD.encode(token));
        let request = self.client.post(&url).header(AUTHORIZATION, auth).send();

        let response = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(ProbeError::Network(err)),
            Err(_) => return Err(ProbeError::Timeout(self.timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Http {
                status: status.as_u16(),
                reason: reason_phrase(status),
            });
        }

        let body = response.bytes().await.map_err(ProbeError::Network)?;
        serde_json::from_slice(&body).map_err(ProbeError::Payload)
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("unknown").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_and_reason() {
        let err = ProbeError::Http {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "backend error: 503 Service Unavailable");
    }

    #[test]
    fn timeout_message_names_the_deadline() {
        let err = ProbeError::Timeout(Duration::from_millis(1000));
        assert_eq!(err.to_string(), "connection timed out after 1000ms");
    }
}
