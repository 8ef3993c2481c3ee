//! Error types for client operations.

use bytes::Bytes;
use smol_str::SmolStr;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Client error type wrapping all possible failure conditions.
///
/// The first three variants are validation errors: they are produced before
/// any network activity, are never retried, and are never logged by the
/// library itself. Everything else surfaces a transport or decode failure
/// unchanged, with no wrapping and no retry.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// Neither of a request's alternative source fields was supplied.
    #[error("no document source: provide `{inline}` or `{reference}`")]
    #[diagnostic(code(skein::missing_source))]
    MissingSource {
        /// Field that carries the document inline (`text`, `html`).
        inline: &'static str,
        /// Field that references the document by location.
        reference: &'static str,
    },

    /// A required categorical field was empty.
    #[error("missing required field `{0}`")]
    #[diagnostic(code(skein::missing_required_field))]
    MissingRequiredField(&'static str),

    /// Client construction with an empty application id or key.
    #[error("an application id and an application key are both required")]
    #[diagnostic(code(skein::missing_credentials))]
    MissingCredentials,

    /// Request serialization failed.
    #[error("{0}")]
    Encode(
        #[from]
        #[diagnostic_source]
        EncodeError,
    ),

    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// The service rejected the call and said why.
    #[error("service error ({status}): {message}")]
    #[diagnostic(code(skein::service))]
    Service {
        /// HTTP status the service answered with.
        status: http::StatusCode,
        /// The `error` field of the service's JSON error body.
        message: SmolStr,
    },

    /// Non-success response without a decodable service error body.
    #[error("HTTP {0}")]
    Http(
        #[from]
        #[diagnostic_source]
        HttpError,
    ),

    /// Response deserialization failed.
    #[error("{0}")]
    Decode(
        #[from]
        #[diagnostic_source]
        DecodeError,
    ),
}

/// Transport-level errors that occur during HTTP communication.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish a connection to the server.
    #[error("connection error: {0}")]
    Connect(String),

    /// Request timed out.
    #[error("request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Other transport error.
    #[error("transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}

/// Request serialization errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// Failed to serialize the form body.
    #[error("failed to serialize form body: {0}")]
    Form(
        #[from]
        #[source]
        serde_html_form::ser::Error,
    ),
}

/// Response deserialization errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// JSON deserialization failed.
    #[error("failed to deserialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// HTTP error response without a decodable service error body.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub struct HttpError {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body if available
    pub body: Option<Bytes>,
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(body) = &self.body {
            if let Ok(s) = std::str::from_utf8(body) {
                write!(f, ":\n{}", s)?;
            }
        }
        Ok(())
    }
}
