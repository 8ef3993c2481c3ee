//! Document summarization.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::endpoint::{non_empty, Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for summarizing a document into key sentences.
///
/// Either `url`, or both `text` and `title`, are required: an inline
/// document needs its headline to anchor the summary on.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct SummarizeParams {
    /// Title of the document; required alongside `text`.
    pub title: Option<String>,
    /// Document text to summarize.
    pub text: Option<String>,
    /// Location of the document to summarize.
    pub url: Option<String>,
    /// Summary length mode: `"default"` or `"short"`.
    pub mode: Option<String>,
    /// Number of sentences to return (default mode only).
    pub sentences_number: Option<u32>,
    /// Sentences to return as a percentage of the original (default mode
    /// only).
    pub sentences_percentage: Option<u32>,
}

/// Key sentences summarizing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeResponse {
    /// Text the summarization ran on.
    pub text: SmolStr,
    /// The selected sentences, in document order.
    pub sentences: Vec<SmolStr>,
}

impl Endpoint for SummarizeParams {
    const PATH: &'static str = "/summarize";
    type Output = SummarizeResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::new();
        match (
            non_empty(self.text.as_deref()),
            non_empty(self.title.as_deref()),
        ) {
            (Some(text), Some(title)) => {
                params.push("text", text);
                params.push("title", title);
            }
            _ => {
                let url = non_empty(self.url.as_deref()).ok_or(Error::MissingSource {
                    inline: "text (with title)",
                    reference: "url",
                })?;
                params.push("url", url);
            }
        }
        params.push_opt("mode", self.mode.as_deref());
        if let Some(n) = self.sentences_number {
            params.push("sentences_number", n.to_string());
        }
        if let Some(p) = self.sentences_percentage {
            params.push("sentences_percentage", p.to_string());
        }
        Ok(FormRequest::new(Self::PATH, params))
    }
}
