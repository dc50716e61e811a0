use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::domain::SignupFields;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Successful hand-off to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayAck {
    pub status: u16,
}

/// Why a hand-off failed. Logged for diagnosis, never shown to the visitor.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Transport(#[source] BoxError),
    #[error("relay rejected submission with status {status}: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { status: u16, reason: Option<String> },
    #[error("relay answered status {status} with an unreadable body: {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: BoxError,
    },
}

/// Outbound seam to the external form relay.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Deliver one submission. Exactly one request per call, no retries.
    async fn deliver(&self, fields: &SignupFields) -> Result<RelayAck, RelayError>;
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Formspree-compatible relay reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpRelayClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: Url, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn deliver(&self, fields: &SignupFields) -> Result<RelayAck, RelayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(fields.to_multipart())
            .send()
            .await
            .map_err(|err| RelayError::Transport(Box::new(err)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(RelayAck {
                status: status.as_u16(),
            });
        }

        let body: RelayErrorBody =
            response
                .json()
                .await
                .map_err(|err| RelayError::MalformedBody {
                    status: status.as_u16(),
                    source: Box::new(err),
                })?;

        Err(RelayError::Rejected {
            status: status.as_u16(),
            reason: body.error.or_else(|| reason_phrase(status)),
        })
    }
}

fn reason_phrase(status: StatusCode) -> Option<String> {
    status.canonical_reason().map(str::to_string)
}
