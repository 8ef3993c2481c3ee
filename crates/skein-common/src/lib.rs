//! Shared machinery for the Skein text-analysis client.
//!
//! This crate carries everything below the user-facing client: the
//! [`HttpClient`] transport seam, the [`Endpoint`] trait and form-body
//! encoding, the [`Response`] buffer wrapper, the error taxonomy, and the
//! lenient publish-timestamp type.

#![warn(missing_docs)]

/// Lenient publish-timestamp decoding.
pub mod datetime;
/// Typed endpoint trait, validation helpers and form encoding.
pub mod endpoint;
pub mod error;
/// HTTP client abstraction used by the skein crates.
pub mod http_client;
/// Response buffer wrapper and rate-limit accounting.
pub mod response;

pub use datetime::PublishedAt;
pub use endpoint::{Endpoint, FormRequest, Params};
pub use error::{DecodeError, EncodeError, Error, HttpError, Result, TransportError};
pub use http_client::HttpClient;
pub use response::{RateLimits, Response};
