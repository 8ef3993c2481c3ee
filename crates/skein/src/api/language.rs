//! Language detection.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for language detection.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct LanguageParams {
    /// Document text to analyze.
    pub text: Option<String>,
    /// Location of the document to analyze.
    pub url: Option<String>,
}

/// Detected language of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageResponse {
    /// Text the detection ran on.
    pub text: SmolStr,
    /// ISO 639-1 code of the detected language.
    pub lang: SmolStr,
    /// Confidence in the detection.
    pub confidence: f32,
}

impl Endpoint for LanguageParams {
    const PATH: &'static str = "/language";
    type Output = LanguageResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        Ok(FormRequest::new(Self::PATH, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_source_fails_before_dispatch() {
        assert!(matches!(
            LanguageParams::default().form().unwrap_err(),
            Error::MissingSource { .. }
        ));
    }
}
