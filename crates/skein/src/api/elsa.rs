//! Entity-level sentiment analysis.
//!
//! Extracts mentions of named entities (people, organizations, locations),
//! links them to knowledge-base entries where possible, and evaluates the
//! sentiment expressed towards each entity.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for entity-level sentiment analysis.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ElsaParams {
    /// Document text to analyze.
    pub text: Option<String>,
    /// Location of the document to analyze.
    pub url: Option<String>,
}

/// A polarity label with its confidence score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentScore {
    /// `"positive"`, `"negative"` or `"neutral"`.
    pub polarity: SmolStr,
    /// Confidence in the polarity label.
    pub confidence: f32,
}

/// One place in the document where an entity is mentioned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mention {
    /// Byte offset of the mention within the analyzed text.
    pub offset: u32,
    /// Confidence that this span refers to the entity.
    pub confidence: f32,
    /// The mention as it appears in the text.
    pub text: SmolStr,
    /// Sentiment expressed towards the entity at this mention.
    pub sentiment: SentimentScore,
}

/// A knowledge-base link for an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityLink {
    /// URI of the linked knowledge-base entry.
    pub uri: SmolStr,
    /// Knowledge base the link points into (e.g. `"dbpedia"`).
    pub provider: SmolStr,
    /// Types the knowledge base assigns to the entry.
    pub types: Vec<SmolStr>,
    /// Confidence in the link.
    pub confidence: f32,
}

/// A named entity with its mentions, links and overall sentiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElsaEntity {
    /// Entity type (e.g. `"Person"`, `"Organization"`, `"Location"`).
    #[serde(rename = "type")]
    pub entity_type: SmolStr,
    /// Sentiment towards the entity across the whole document.
    pub overall_sentiment: SentimentScore,
    /// Places the entity is mentioned, in document order.
    pub mentions: Vec<Mention>,
    /// Knowledge-base links, most confident first.
    pub links: Vec<EntityLink>,
}

/// Entities found in a document, with per-entity sentiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElsaResponse {
    /// Text the analysis ran on.
    pub text: SmolStr,
    /// Entities in the document, in order of appearance.
    pub entities: Vec<ElsaEntity>,
}

impl Endpoint for ElsaParams {
    const PATH: &'static str = "/elsa";
    type Output = ElsaResponse;

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
    fn text_takes_precedence_over_url() {
        let params = ElsaParams::builder()
            .text("Acme Corp. delighted investors")
            .url("https://example.com")
            .build();
        let form = params.form().unwrap();
        assert!(form.body().contains("text"));
        assert!(!form.body().contains("url"));
    }

    #[test]
    fn no_source_fails_before_dispatch() {
        assert!(matches!(
            ElsaParams::default().form().unwrap_err(),
            Error::MissingSource { .. }
        ));
    }
}
