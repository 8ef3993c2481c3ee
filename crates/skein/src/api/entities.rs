//! Named entity extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for named entity extraction.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct EntitiesParams {
    /// Document text to analyze.
    pub text: Option<String>,
    /// Location of the document to analyze.
    pub url: Option<String>,
    /// Language of the document, when known (skips detection).
    pub language: Option<String>,
}

/// Named entities found in a document, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitiesResponse {
    /// Text the extraction ran on.
    pub text: SmolStr,
    /// Language the document was processed in.
    pub language: SmolStr,
    /// Entity values grouped by kind (`"person"`, `"organization"`,
    /// `"keyword"`, ...).
    pub entities: BTreeMap<SmolStr, Vec<SmolStr>>,
}

impl Endpoint for EntitiesParams {
    const PATH: &'static str = "/entities";
    type Output = EntitiesResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        params.push_opt("language", self.language.as_deref());
        Ok(FormRequest::new(Self::PATH, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_source_fails_before_dispatch() {
        assert!(matches!(
            EntitiesParams::default().form().unwrap_err(),
            Error::MissingSource { .. }
        ));
    }
}
