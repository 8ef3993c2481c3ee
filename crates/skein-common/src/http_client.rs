//! Minimal HTTP client abstraction shared across crates.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use crate::error::TransportError;

/// HTTP client trait for sending raw HTTP requests.
///
/// The endpoint layer never talks to a concrete HTTP stack; it hands a
/// fully-built `http::Request` to whatever implements this trait. Cancellation
/// and timeout live entirely in the implementation: a deadline-aware client
/// (e.g. a `reqwest::Client` built with a timeout) is a drop-in replacement
/// for the default one.
pub trait HttpClient {
    /// Error type returned by the HTTP client
    type Error: std::error::Error + Display + Send + Sync + 'static;

    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>> + Send;

    /// Map this transport's error into the shared taxonomy.
    ///
    /// Implementations that can tell timeouts and connection failures apart
    /// should override this; the default is an opaque passthrough.
    fn transport_error(error: Self::Error) -> TransportError {
        TransportError::Other(Box::new(error))
    }
}

#[cfg(feature = "reqwest-client")]
impl HttpClient for reqwest::Client {
    type Error = reqwest::Error;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "trace",
            skip_all,
            fields(method = %request.method(), uri = %request.uri())
        )
    )]
    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> core::result::Result<http::Response<Vec<u8>>, Self::Error> {
        let (parts, body) = request.into_parts();

        let mut req = self.request(parts.method, parts.uri.to_string()).body(body);
        for (name, value) in parts.headers.iter() {
            req = req.header(name.as_str(), value.as_bytes());
        }

        let resp = req.send().await?;

        let mut builder = http::Response::builder().status(resp.status());
        for (name, value) in resp.headers().iter() {
            builder = builder.header(name.as_str(), value.as_bytes());
        }
        let body = resp.bytes().await?.to_vec();

        Ok(builder.body(body).expect("response rebuilt from valid parts"))
    }

    fn transport_error(error: Self::Error) -> TransportError {
        error.into()
    }
}

impl<T: HttpClient + Sync> HttpClient for Arc<T> {
    type Error = T::Error;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>> + Send
    {
        self.as_ref().send_http(request)
    }

    fn transport_error(error: Self::Error) -> TransportError {
        T::transport_error(error)
    }
}
