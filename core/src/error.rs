//! The closed error taxonomy for the client.
//!
//! # Design
//! One flat enum, no wrapping or chaining: the cascade maps every outcome to
//! exactly one variant and callers match on it directly, so the set is closed
//! on purpose. `BackendError` deliberately covers both "transport-level error
//! reported" and "no body on a success status" — callers treat the two the
//! same way and a separate empty-body kind would only split that match.

use thiserror::Error;

/// Errors returned by [`NetworkManager::execute`](crate::NetworkManager::execute).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The endpoint's URL string could not be parsed. Carries the original
    /// string for diagnostics.
    #[error("unable to build URL from {0:?}")]
    UnableToBuildUrl(String),

    /// The transport produced no status code at all — it never saw an
    /// HTTP-shaped response.
    #[error("no HTTP response received")]
    UnknownResponse,

    /// The server returned 401.
    #[error("unauthorized (401)")]
    Unauthorized,

    /// The server returned 500.
    #[error("internal server error (500)")]
    InternalServerError,

    /// The server returned a status outside {200, 201, 401, 500}.
    #[error("unexpected status code")]
    UnknownStatusCode,

    /// A transport-level error was reported, or a success status arrived
    /// with no body.
    #[error("backend error")]
    BackendError,

    /// The body was present but could not be decoded into the target type.
    #[error("response body could not be parsed")]
    ParsingError,
}
