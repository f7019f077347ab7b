//! Request descriptor: what to call, before any transport object exists.

use std::collections::HashMap;

use url::Url;

use crate::error::NetworkError;
use crate::http::{HttpMethod, HttpRequest};

/// A caller-specified request: target URL string, method, headers.
///
/// Immutable once constructed; the executor borrows it for the duration of
/// one call. Header keys are unique by construction of the map.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
}

impl Endpoint {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
        }
    }

    pub fn with_headers(url: &str, method: HttpMethod, headers: HashMap<String, String>) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers,
        }
    }

    /// Translate the descriptor into an [`HttpRequest`]. Purely a parsing
    /// step — no I/O happens here.
    ///
    /// Fails with [`NetworkError::UnableToBuildUrl`] carrying the original
    /// string when the URL does not parse as an absolute URI.
    pub fn build_request(&self) -> Result<HttpRequest, NetworkError> {
        let url = Url::parse(&self.url)
            .map_err(|_| NetworkError::UnableToBuildUrl(self.url.clone()))?;
        Ok(HttpRequest {
            url,
            method: self.method,
            headers: self
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        })
    }
}
