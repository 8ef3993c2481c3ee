//! Document-level and aspect-based sentiment analysis.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{require, Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for document sentiment analysis.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct SentimentParams {
    /// Document text to analyze.
    pub text: Option<String>,
    /// Location of the document to analyze.
    pub url: Option<String>,
    /// Analysis mode: `"tweet"` suits short text (the service default),
    /// `"document"` longer bodies.
    pub mode: Option<String>,
}

/// Sentiment of a document, in terms of polarity (positive, negative or
/// neutral) and subjectivity (subjective or objective).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentResponse {
    /// Text the analysis ran on.
    pub text: SmolStr,
    /// `"positive"`, `"negative"` or `"neutral"`.
    pub polarity: SmolStr,
    /// Confidence in the polarity label.
    pub polarity_confidence: f32,
    /// `"subjective"` or `"objective"`.
    pub subjectivity: SmolStr,
    /// Confidence in the subjectivity label.
    pub subjectivity_confidence: f32,
}

impl Endpoint for SentimentParams {
    const PATH: &'static str = "/sentiment";
    type Output = SentimentResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        params.push_opt("mode", self.mode.as_deref());
        Ok(FormRequest::new(Self::PATH, params))
    }
}

/// Parameters for aspect-based sentiment analysis of a review.
///
/// Either `text` or `url` is required, and `domain` always is: the service
/// runs a per-domain model (`"hotels"`, `"restaurants"`, ...) and the domain
/// is part of the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct AbsaParams {
    /// Review text to analyze.
    pub text: Option<String>,
    /// Location of the review to analyze.
    pub url: Option<String>,
    /// Domain the review belongs to.
    #[builder(default)]
    pub domain: String,
}

/// One aspect of the reviewed product or service, with the sentiment
/// expressed towards it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aspect {
    /// Name of the aspect (e.g. `"staff"`).
    pub aspect: SmolStr,
    /// Confidence that the aspect is actually discussed.
    pub aspect_confidence: f32,
    /// Sentiment polarity towards the aspect.
    pub polarity: SmolStr,
    /// Confidence in the polarity label.
    pub polarity_confidence: f32,
}

/// Per-sentence breakdown of an aspect-based analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsaSentence {
    /// The sentence itself.
    pub text: SmolStr,
    /// Overall polarity of the sentence.
    pub polarity: SmolStr,
    /// Confidence in the polarity label.
    pub polarity_confidence: f32,
    /// Aspects mentioned in this sentence.
    pub aspects: Vec<Aspect>,
}

/// Aspect-based sentiment of a review, overall and per sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsaResponse {
    /// Text the analysis ran on.
    pub text: SmolStr,
    /// Domain the review was analyzed under.
    pub domain: SmolStr,
    /// Aspects found across the whole review.
    pub aspects: Vec<Aspect>,
    /// Sentence-level breakdown.
    pub sentences: Vec<AbsaSentence>,
}

impl Endpoint for AbsaParams {
    const PATH: &'static str = "/absa";
    type Output = AbsaResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        let domain = require(&self.domain, "domain")?;
        Ok(FormRequest::new(format!("{}/{}", Self::PATH, domain), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_takes_precedence_over_url() {
        let params = SentimentParams::builder()
            .text("I love this")
            .url("https://example.com")
            .build();
        let form = params.form().unwrap();
        assert_eq!(form.body().get("text"), Some("I love this"));
        assert!(!form.body().contains("url"));
    }

    #[test]
    fn url_is_the_fallback() {
        let params = SentimentParams::builder().url("https://example.com").build();
        let form = params.form().unwrap();
        assert_eq!(form.body().get("url"), Some("https://example.com"));
        assert!(!form.body().contains("text"));
    }

    #[test]
    fn no_source_fails_before_dispatch() {
        let err = SentimentParams::default().form().unwrap_err();
        assert!(matches!(err, Error::MissingSource { inline: "text", reference: "url" }));
    }

    #[test]
    fn mode_is_optional() {
        let bare = SentimentParams::builder().text("ok").build();
        assert!(!bare.form().unwrap().body().contains("mode"));

        let tweet = SentimentParams::builder().text("ok").mode("tweet").build();
        assert_eq!(tweet.form().unwrap().body().get("mode"), Some("tweet"));
    }

    #[test]
    fn absa_interpolates_the_domain_into_the_path() {
        let params = AbsaParams::builder()
            .text("Clean rooms, surly staff.")
            .domain("hotels")
            .build();
        let form = params.form().unwrap();
        assert_eq!(form.path(), "/absa/hotels");
        assert!(!form.body().contains("domain"));
    }

    #[test]
    fn absa_requires_a_domain_even_with_a_valid_source() {
        let params = AbsaParams {
            text: Some("Great product!".into()),
            ..Default::default()
        };
        assert!(matches!(
            params.form().unwrap_err(),
            Error::MissingRequiredField("domain")
        ));
    }

    #[test]
    fn absa_reports_the_missing_source_first() {
        let err = AbsaParams::default().form().unwrap_err();
        assert!(matches!(err, Error::MissingSource { .. }));
    }
}
