//! Minimal asynchronous HTTP client abstraction.
//!
//! # Overview
//! An [`Endpoint`] describes a request (URL string, method, headers). A
//! [`NetworkManager`] executes it through an injected [`Transport`] and maps
//! the raw outcome to a closed [`NetworkError`] taxonomy, decoding success
//! bodies as JSON into a caller-specified type.
//!
//! # Design
//! - `NetworkManager` is stateless — each call is an independent, single
//!   linear classification cascade over one [`HttpOutcome`].
//! - The transport is a one-method capability trait, so tests substitute a
//!   deterministic double while production uses [`ReqwestTransport`].
//! - Every failure is returned as a value; no panic escapes the executor and
//!   no partial results are ever produced.

pub mod endpoint;
pub mod error;
pub mod http;
pub mod manager;
pub mod transport;

pub use endpoint::Endpoint;
pub use error::NetworkError;
pub use http::{HttpMethod, HttpOutcome, HttpRequest};
pub use manager::NetworkManager;
pub use transport::{ReqwestTransport, Transport};
