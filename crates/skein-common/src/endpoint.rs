//! # Typed endpoint machinery
//!
//! Every analysis capability is a parameter struct implementing [`Endpoint`]:
//! it names its base [`PATH`](Endpoint::PATH), its typed
//! [`Output`](Endpoint::Output), and a single fallible [`form`](Endpoint::form)
//! step that validates the fields and produces the resolved path plus the
//! form-encoded body. Validation failures surface from `form()` before any
//! network activity; the transport layer only ever sees requests that already
//! passed.
//!
//! The source-selection rule (inline document wins, location is the fallback,
//! neither is an error) exists exactly once, in [`select_source`], and every
//! endpoint goes through it.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::error::{EncodeError, Error};

/// Trait implemented by each endpoint's parameter struct.
pub trait Endpoint {
    /// Base request path for this endpoint (e.g. `/sentiment`).
    ///
    /// Endpoints with a path parameter (e.g. `/absa/{domain}`) extend this in
    /// [`form`](Endpoint::form) after validating the parameter.
    const PATH: &'static str;

    /// Typed response decoded from the service's JSON body.
    type Output: DeserializeOwned;

    /// Validate the parameters and build the outgoing request.
    fn form(&self) -> Result<FormRequest, Error>;
}

/// A validated request: resolved path plus ordered form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    path: Cow<'static, str>,
    body: Params,
}

impl FormRequest {
    /// Pair a resolved path with its form body.
    pub fn new(path: impl Into<Cow<'static, str>>, body: Params) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }

    /// The resolved request path, relative to the service base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The form parameters that will make up the request body.
    pub fn body(&self) -> &Params {
        &self.body
    }

    /// Encode the body as `application/x-www-form-urlencoded`.
    pub fn encode_body(&self) -> Result<String, EncodeError> {
        self.body.encode()
    }
}

/// Ordered form parameters for a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    /// An empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters seeded with the selected document source.
    ///
    /// Shorthand for [`select_source`] followed by a single
    /// [`push`](Params::push); see there for the selection rule.
    pub fn source(
        inline: (&'static str, Option<&str>),
        reference: (&'static str, Option<&str>),
    ) -> Result<Self, Error> {
        let (key, value) = select_source(inline, reference)?;
        let mut params = Self::new();
        params.push(key, value);
        Ok(params)
    }

    /// Append a key/value pair.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    /// Append a boolean the service must always receive.
    ///
    /// Both states are encoded, as `"true"` or `"false"`; the remote side
    /// never falls back to a server-side default for these.
    pub fn push_flag(&mut self, key: &'static str, value: bool) {
        self.push(key, if value { "true" } else { "false" });
    }

    /// Append an optional scalar, omitted when `None` or empty.
    pub fn push_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = non_empty(value) {
            self.push(key, value);
        }
    }

    /// Look up the first value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any value was recorded for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of recorded pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no pairs were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded pairs, in encoding order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> Result<String, EncodeError> {
        Ok(serde_html_form::to_string(&self.0)?)
    }
}

/// The canonical source-selection rule.
///
/// Each operation accepts its document either inline (`text`, `html`) or by
/// reference (`url`); exactly one of the two reaches the wire. The inline
/// field wins, the reference field is the fallback, and neither being set
/// fails with [`Error::MissingSource`] naming both fields. The empty string
/// counts as unset.
pub fn select_source<'a>(
    inline: (&'static str, Option<&'a str>),
    reference: (&'static str, Option<&'a str>),
) -> Result<(&'static str, &'a str), Error> {
    if let Some(value) = non_empty(inline.1) {
        Ok((inline.0, value))
    } else if let Some(value) = non_empty(reference.1) {
        Ok((reference.0, value))
    } else {
        Err(Error::MissingSource {
            inline: inline.0,
            reference: reference.0,
        })
    }
}

/// Treat the empty string as absent, matching the service's form contract.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Require a non-empty categorical field, failing before dispatch otherwise.
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, Error> {
    if value.is_empty() {
        Err(Error::MissingRequiredField(field))
    } else {
        Ok(value)
    }
}
