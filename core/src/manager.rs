//! The executor: one round trip, one classification cascade.
//!
//! # Design
//! `NetworkManager` holds only the injected transport and no mutable state,
//! so concurrent calls through one instance cannot interfere. Each call is a
//! single linear cascade over the raw outcome — first match wins, every path
//! terminates in exactly one `NetworkError` variant or the decoded value.

use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::NetworkError;
use crate::transport::Transport;

/// Stateless executor over an injected [`Transport`].
#[derive(Debug, Clone)]
pub struct NetworkManager<S: Transport> {
    session: S,
}

impl<S: Transport> NetworkManager<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Execute one request and decode the JSON body into `T`.
    ///
    /// Suspends for the single transport round trip and resolves exactly
    /// once. Performs no retries, no caching and no logging; every failure
    /// comes back as a [`NetworkError`] value.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, NetworkError> {
        let request = endpoint.build_request()?;

        let outcome = self.session.load_data(request).await;

        let Some(status) = outcome.status else {
            return Err(NetworkError::UnknownResponse);
        };

        match status {
            200 | 201 => {}
            401 => return Err(NetworkError::Unauthorized),
            500 => return Err(NetworkError::InternalServerError),
            _ => return Err(NetworkError::UnknownStatusCode),
        }

        // A transport error alongside a success status wins over the body.
        if outcome.transport_error.is_some() {
            return Err(NetworkError::BackendError);
        }

        let Some(body) = outcome.body else {
            return Err(NetworkError::BackendError);
        };

        serde_json::from_slice(&body).map_err(|_| NetworkError::ParsingError)
    }
}
