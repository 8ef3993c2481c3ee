//! Document classification.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{require, Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for classifying a document with the default scheme.
///
/// Either `text` or `url` is required; `text` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ClassifyParams {
    /// Document text to classify.
    pub text: Option<String>,
    /// Location of the document to classify.
    pub url: Option<String>,
    /// Language of the document, when known (skips detection).
    pub language: Option<String>,
}

/// One category label under the default scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Human-readable category label.
    pub label: SmolStr,
    /// Subject code of the category.
    pub code: SmolStr,
    /// Confidence in the category.
    pub confidence: f32,
}

/// Categories assigned to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyResponse {
    /// Text the classification ran on.
    pub text: SmolStr,
    /// Language the document was classified in.
    pub language: SmolStr,
    /// Assigned categories, most confident first.
    pub categories: Vec<Category>,
}

impl Endpoint for ClassifyParams {
    const PATH: &'static str = "/classify";
    type Output = ClassifyResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        params.push_opt("language", self.language.as_deref());
        Ok(FormRequest::new(Self::PATH, params))
    }
}

/// Parameters for classifying a document under a named taxonomy.
///
/// Either `text` or `url` is required, and `taxonomy` always is: the scheme
/// is part of the request path, e.g. `/classify/iab-qag`.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ClassifyByTaxonomyParams {
    /// Document text to classify.
    pub text: Option<String>,
    /// Location of the document to classify.
    pub url: Option<String>,
    /// Taxonomy to classify under (e.g. `"iab-qag"`).
    #[builder(default)]
    pub taxonomy: String,
    /// Language of the document, when known (skips detection).
    pub language: Option<String>,
}

/// One category under a named taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyCategory {
    /// Identifier of the category within its taxonomy.
    pub id: SmolStr,
    /// Human-readable category label.
    pub label: SmolStr,
    /// Confidence in the category.
    pub confidence: f32,
}

/// Categories assigned to a document under a named taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyByTaxonomyResponse {
    /// Text the classification ran on.
    pub text: SmolStr,
    /// Language the document was classified in.
    pub language: SmolStr,
    /// Taxonomy the categories belong to.
    pub taxonomy: SmolStr,
    /// Assigned categories, most confident first.
    pub categories: Vec<TaxonomyCategory>,
}

impl Endpoint for ClassifyByTaxonomyParams {
    const PATH: &'static str = "/classify";
    type Output = ClassifyByTaxonomyResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::source(
            ("text", self.text.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        params.push_opt("language", self.language.as_deref());
        let taxonomy = require(&self.taxonomy, "taxonomy")?;
        Ok(FormRequest::new(
            format!("{}/{}", Self::PATH, taxonomy),
            params,
        ))
    }
}
