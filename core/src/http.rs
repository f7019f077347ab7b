//! Transport-layer data types.
//!
//! # Design
//! These types describe one HTTP round trip as plain owned data. An
//! [`HttpRequest`] is built from an `Endpoint` and handed to a `Transport`;
//! the transport answers with an [`HttpOutcome`], the raw triple the
//! classification cascade consumes. Neither type is persisted — both live for
//! exactly one call.

use url::Url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A built HTTP request, ready to hand to a [`Transport`](crate::Transport).
///
/// Produced by [`Endpoint::build_request`](crate::Endpoint::build_request);
/// opaque to the executor beyond being passed along.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
}

/// The raw result of one round trip, as reported by a transport.
///
/// `status` is present iff the transport completed an HTTP-shaped exchange.
/// A `transport_error` may accompany a present status (e.g. the connection
/// died while reading the body); classification gives the error precedence.
/// A zero-length body is reported as `None`.
#[derive(Debug, Clone, Default)]
pub struct HttpOutcome {
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
    pub transport_error: Option<String>,
}
