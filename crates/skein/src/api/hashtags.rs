//! Hashtag suggestion.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for suggesting hashtags for a document.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct HashtagsParams {
    /// Document text to analyze.
    pub text: Option<String>,
    /// Location of the document to analyze.
    pub url: Option<String>,
    /// Language of the document, when known (skips detection).
    pub language: Option<String>,
}

/// Hashtags suggested for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagsResponse {
    /// Text the suggestion ran on.
    pub text: SmolStr,
    /// Language the document was processed in.
    pub language: SmolStr,
    /// Suggested hashtags, including the leading `#`.
    pub hashtags: Vec<SmolStr>,
}

impl Endpoint for HashtagsParams {
    const PATH: &'static str = "/hashtags";
    type Output = HashtagsResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        params.push_opt("language", self.language.as_deref());
        Ok(FormRequest::new(Self::PATH, params))
    }
}
