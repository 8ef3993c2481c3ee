//! Client construction and the shared call primitive.
//!
//! A [`Client`] is immutable once built: credentials, base URL and transport
//! are all read-only during calls, so a single client (or an `Arc` of one)
//! can serve any number of concurrent requests. Per-call state the service
//! reports, like rate-limit accounting, lives on the [`Response`] instead.

use std::fmt;

use http::Request;
use smol_str::SmolStr;
use url::Url;

use skein_common::endpoint::{Endpoint, FormRequest};
use skein_common::error::{Error, Result, TransportError};
use skein_common::http_client::HttpClient;
use skein_common::response::Response;

/// Default service base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.skein.dev/v1";

const HEADER_APP_ID: &str = "x-skein-application-id";
const HEADER_APP_KEY: &str = "x-skein-application-key";
const USER_AGENT: &str = concat!("skein/", env!("CARGO_PKG_VERSION"));

/// Application credentials for the Skein API.
#[derive(Clone, PartialEq, Eq)]
pub struct Auth {
    app_id: SmolStr,
    app_key: SmolStr,
}

impl Auth {
    /// Credentials from explicit values.
    pub fn new(app_id: impl Into<SmolStr>, app_key: impl Into<SmolStr>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// Credentials from the `SKEIN_APP_ID` and `SKEIN_APP_KEY` environment
    /// variables.
    pub fn from_env() -> Result<Self> {
        let auth = Self::new(
            std::env::var("SKEIN_APP_ID").unwrap_or_default(),
            std::env::var("SKEIN_APP_KEY").unwrap_or_default(),
        );
        auth.check()?;
        Ok(auth)
    }

    fn check(&self) -> Result<()> {
        if self.app_id.is_empty() || self.app_key.is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// Client for the Skein text-analysis API.
///
/// Generic over the transport; [`Client::new`] picks a stock
/// [`reqwest::Client`], while [`Client::with_http_client`] accepts anything
/// implementing [`HttpClient`]. That is the seam for deadline-bound or
/// otherwise specialized transports: a `reqwest::Client` built with a
/// timeout drops in without touching endpoint logic.
#[derive(Debug, Clone)]
pub struct Client<C> {
    http: C,
    auth: Auth,
    base: Url,
}

#[cfg(feature = "reqwest-client")]
impl Client<reqwest::Client> {
    /// Client with the default transport and base URL.
    pub fn new(auth: Auth) -> Result<Self> {
        Self::with_http_client(auth, reqwest::Client::new())
    }
}

impl<C: HttpClient> Client<C> {
    /// Client over a caller-supplied transport, against the default base URL.
    pub fn with_http_client(auth: Auth, http: C) -> Result<Self> {
        auth.check()?;
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Ok(Self { http, auth, base })
    }

    /// Point the client at a different deployment (staging, a local test
    /// server).
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base = base;
        self
    }

    /// The base URL calls are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Issue a validated call against one endpoint, returning the raw
    /// response wrapper.
    ///
    /// Exactly one request goes out per successful validation pass; a
    /// validation failure sends nothing.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(path = E::PATH))
    )]
    pub async fn call<E: Endpoint>(&self, request: &E) -> Result<Response<E>> {
        let form = request.form()?;
        let http_request = self.build_request(&form)?;
        let http_response = self
            .http
            .send_http(http_request)
            .await
            .map_err(C::transport_error)?;
        Ok(Response::from_http(http_response))
    }

    /// Issue a call and decode the typed output.
    pub async fn send<E: Endpoint>(&self, request: &E) -> Result<E::Output> {
        self.call(request).await?.into_output()
    }

    fn build_request(&self, form: &FormRequest) -> Result<Request<Vec<u8>>> {
        let mut url = self.base.clone();
        let mut path = url.path().trim_end_matches('/').to_owned();
        path.push_str(form.path());
        url.set_path(&path);

        let body = form.encode_body().map_err(Error::Encode)?;

        Request::builder()
            .method(http::Method::POST)
            .uri(url.as_str())
            .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(http::header::ACCEPT, "application/json")
            .header(http::header::USER_AGENT, USER_AGENT)
            .header(HEADER_APP_ID, self.auth.app_id.as_str())
            .header(HEADER_APP_KEY, self.auth.app_key.as_str())
            .body(body.into_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        struct NoTransport;
        impl HttpClient for NoTransport {
            type Error = std::convert::Infallible;
            async fn send_http(
                &self,
                _request: http::Request<Vec<u8>>,
            ) -> core::result::Result<http::Response<Vec<u8>>, Self::Error> {
                unreachable!("construction must fail first")
            }
        }

        for auth in [Auth::new("", "key"), Auth::new("id", ""), Auth::new("", "")] {
            assert!(matches!(
                Client::with_http_client(auth, NoTransport).map(|_| ()),
                Err(Error::MissingCredentials)
            ));
        }
    }

    #[test]
    fn debug_redacts_the_key() {
        let auth = Auth::new("app-id", "super-secret");
        let printed = format!("{auth:?}");
        assert!(printed.contains("app-id"));
        assert!(!printed.contains("super-secret"));
    }
}
