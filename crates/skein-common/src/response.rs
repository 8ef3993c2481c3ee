//! Response buffer wrapper and rate-limit accounting.

use std::marker::PhantomData;

use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::endpoint::Endpoint;
use crate::error::{Error, HttpError};

/// Per-call rate-limit accounting reported by the service.
///
/// Parsed from the `X-RateLimit-*` response headers. Reported per response
/// rather than stored on the client, so concurrent calls share nothing
/// mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    /// Request allowance for the current window.
    pub limit: i64,
    /// Requests remaining in the current window.
    pub remaining: i64,
    /// Unix timestamp at which the window resets.
    pub reset: i64,
}

impl RateLimits {
    /// Parse the service's rate-limit headers, if all three are present.
    pub fn from_headers(headers: &http::HeaderMap) -> Option<Self> {
        let read = |name: &str| headers.get(name)?.to_str().ok()?.parse::<i64>().ok();
        Some(Self {
            limit: read("x-ratelimit-limit")?,
            remaining: read("x-ratelimit-remaining")?,
            reset: read("x-ratelimit-reset")?,
        })
    }
}

/// Response wrapper that owns the raw body buffer.
///
/// Generic over the endpoint's parameter type so [`into_output`]
/// (Response::into_output) knows what to decode. Constructible directly from
/// a buffer and status, which is also how fixture tests exercise decoding
/// without a transport.
pub struct Response<E: Endpoint> {
    buffer: Bytes,
    status: StatusCode,
    rate_limits: Option<RateLimits>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Endpoint> Response<E> {
    /// Wrap a raw body and status, with no rate-limit information.
    pub fn new(buffer: impl Into<Bytes>, status: StatusCode) -> Self {
        Self {
            buffer: buffer.into(),
            status,
            rate_limits: None,
            _marker: PhantomData,
        }
    }

    /// Wrap a full HTTP response, capturing rate-limit headers.
    pub fn from_http(response: http::Response<Vec<u8>>) -> Self {
        let rate_limits = RateLimits::from_headers(response.headers());
        let status = response.status();
        Self {
            buffer: Bytes::from(response.into_body()),
            status,
            rate_limits,
            _marker: PhantomData,
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw body buffer.
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Rate-limit accounting for this call, when the service reported it.
    pub fn rate_limits(&self) -> Option<RateLimits> {
        self.rate_limits
    }

    /// Decode the body into the endpoint's typed output.
    ///
    /// Success statuses decode strictly: any field the payload omits takes
    /// its zero value, but a malformed body fails the whole call. Non-success
    /// statuses map to [`Error::Service`] when the body carries the service's
    /// error shape, [`Error::Http`] otherwise.
    pub fn into_output(self) -> Result<E::Output, Error> {
        if self.status.is_success() {
            Ok(serde_json::from_slice(&self.buffer).map_err(crate::error::DecodeError::from)?)
        } else {
            Err(error_from_body(self.status, self.buffer))
        }
    }
}

/// The service reports failures as `{"error": "..."}`; anything else is a
/// bare HTTP error with the body preserved.
fn error_from_body(status: StatusCode, buffer: Bytes) -> Error {
    #[derive(Deserialize)]
    struct ServiceError {
        error: SmolStr,
    }

    match serde_json::from_slice::<ServiceError>(&buffer) {
        Ok(body) => Error::Service {
            status,
            message: body.error,
        },
        Err(_) => Error::Http(HttpError {
            status,
            body: Some(buffer),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{FormRequest, Params};

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct DummyOutput {
        value: SmolStr,
    }

    struct DummyParams;

    impl Endpoint for DummyParams {
        const PATH: &'static str = "/dummy";
        type Output = DummyOutput;

        fn form(&self) -> Result<FormRequest, Error> {
            Ok(FormRequest::new(Self::PATH, Params::new()))
        }
    }

    #[test]
    fn success_decodes_output() {
        let resp: Response<DummyParams> =
            Response::new(&br#"{"value":"ok"}"#[..], StatusCode::OK);
        assert_eq!(resp.into_output().unwrap().value, "ok");
    }

    #[test]
    fn absent_fields_take_zero_values() {
        let resp: Response<DummyParams> = Response::new(&b"{}"[..], StatusCode::OK);
        assert_eq!(resp.into_output().unwrap(), DummyOutput::default());
    }

    #[test]
    fn service_error_body_is_surfaced() {
        let resp: Response<DummyParams> = Response::new(
            &br#"{"error":"requires a valid application id"}"#[..],
            StatusCode::FORBIDDEN,
        );
        match resp.into_output().unwrap_err() {
            Error::Service { status, message } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(message, "requires a valid application id");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn undecodable_error_body_falls_back_to_http() {
        let resp: Response<DummyParams> =
            Response::new(&b"gateway exploded"[..], StatusCode::BAD_GATEWAY);
        match resp.into_output().unwrap_err() {
            Error::Http(err) => assert_eq!(err.status, StatusCode::BAD_GATEWAY),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rate_limit_headers_parse() {
        let response = http::Response::builder()
            .status(StatusCode::OK)
            .header("X-RateLimit-Limit", "1000")
            .header("X-RateLimit-Remaining", "999")
            .header("X-RateLimit-Reset", "1420000000")
            .body(b"{}".to_vec())
            .unwrap();
        let resp: Response<DummyParams> = Response::from_http(response);
        assert_eq!(
            resp.rate_limits(),
            Some(RateLimits {
                limit: 1000,
                remaining: 999,
                reset: 1420000000,
            })
        );
    }

    #[test]
    fn missing_rate_limit_headers_yield_none() {
        let response = http::Response::builder()
            .status(StatusCode::OK)
            .body(b"{}".to_vec())
            .unwrap();
        let resp: Response<DummyParams> = Response::from_http(response);
        assert_eq!(resp.rate_limits(), None);
    }
}
