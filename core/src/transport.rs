//! The transport capability and its production implementation.
//!
//! # Design
//! The executor depends on a single async operation, not on a concrete HTTP
//! client type, so tests inject a deterministic double. [`ReqwestTransport`]
//! is the production implementation; `reqwest::Client` is cheap to clone and
//! safe to share, so one transport instance serves all concurrent calls made
//! through the same manager.

use async_trait::async_trait;

use crate::http::{HttpMethod, HttpOutcome, HttpRequest};

/// One-method capability: perform a single HTTP round trip.
///
/// Contract: exactly one completion per call — the returned future resolves
/// once with a terminal [`HttpOutcome`] and never retries on its own.
/// Implementations must be safe for concurrent invocation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn load_data(&self, request: HttpRequest) -> HttpOutcome;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn load_data(&self, request: HttpRequest) -> HttpOutcome {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        tracing::debug!(url = %request.url, ?method, "sending request");

        let mut builder = self.client.request(method, request.url);
        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "round trip failed");
                return HttpOutcome {
                    status: None,
                    body: None,
                    transport_error: Some(e.to_string()),
                };
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(bytes) => {
                tracing::debug!(status, len = bytes.len(), "response received");
                HttpOutcome {
                    status: Some(status),
                    // An empty body is reported as absent, not as zero bytes.
                    body: (!bytes.is_empty()).then(|| bytes.to_vec()),
                    transport_error: None,
                }
            }
            Err(e) => {
                tracing::debug!(status, error = %e, "body read failed");
                HttpOutcome {
                    status: Some(status),
                    body: None,
                    transport_error: Some(e.to_string()),
                }
            }
        }
    }
}
