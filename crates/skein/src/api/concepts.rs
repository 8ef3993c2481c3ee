//! Concept extraction.
//!
//! Finds knowledge-base concepts mentioned in a document, keyed by the URI
//! of the entry they resolve to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for concept extraction.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ConceptsParams {
    /// Document text to analyze.
    pub text: Option<String>,
    /// Location of the document to analyze.
    pub url: Option<String>,
    /// Language of the document, when known (skips detection).
    pub language: Option<String>,
}

/// One place in the document where a concept surfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceForm {
    /// The concept as it appears in the text.
    #[serde(rename = "string")]
    pub text: SmolStr,
    /// Confidence that this span refers to the concept.
    pub score: f32,
    /// Byte offset of the span within the analyzed text.
    pub offset: u32,
}

/// A knowledge-base concept found in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concept {
    /// Spans of the document that surface this concept.
    #[serde(rename = "surfaceForms")]
    pub surface_forms: Vec<SurfaceForm>,
    /// Types the knowledge base assigns to the concept.
    pub types: Vec<SmolStr>,
    /// Prominence of the concept in the knowledge base.
    pub support: i64,
}

/// Concepts found in a document, keyed by knowledge-base URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptsResponse {
    /// Text the extraction ran on.
    pub text: SmolStr,
    /// Language the document was processed in.
    pub language: SmolStr,
    /// Concepts keyed by the URI of the knowledge-base entry.
    pub concepts: BTreeMap<SmolStr, Concept>,
}

impl Endpoint for ConceptsParams {
    const PATH: &'static str = "/concepts";
    type Output = ConceptsResponse;

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
            ConceptsParams::default().form().unwrap_err(),
            Error::MissingSource { .. }
        ));
    }
}
