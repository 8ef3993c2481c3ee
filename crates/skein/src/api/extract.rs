//! Article extraction from web pages.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use skein_common::datetime::PublishedAt;
use skein_common::endpoint::{Endpoint, FormRequest, Params};
use skein_common::error::Error;

/// Parameters for extracting the main article from a web page.
///
/// Either `html` or `url` is required; raw markup wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ExtractParams {
    /// Location of the web page.
    pub url: Option<String>,
    /// Raw HTML of the web page.
    pub html: Option<String>,
    /// Whether to also pick the article's best image.
    #[builder(default)]
    pub best_image: bool,
}

/// The main article and page metadata extracted from a web page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractResponse {
    /// Article title.
    pub title: SmolStr,
    /// Article body, stripped of boilerplate.
    pub article: SmolStr,
    /// URL of the article's main image, when requested and found.
    pub image: SmolStr,
    /// Article author.
    pub author: SmolStr,
    /// Publication timestamp; check
    /// [`is_unset`](skein_common::PublishedAt::is_unset) before use.
    #[serde(rename = "publishDate")]
    pub publish_date: PublishedAt,
    /// URLs of videos embedded in the article.
    pub videos: Vec<SmolStr>,
    /// Feed URLs advertised by the page.
    pub feeds: Vec<SmolStr>,
    /// Keywords attached to the page.
    pub keywords: Vec<SmolStr>,
}

impl Endpoint for ExtractParams {
    const PATH: &'static str = "/extract";
    type Output = ExtractResponse;

    fn form(&self) -> Result<FormRequest, Error> {
        let mut params = Params::source(
            ("html", self.html.as_deref()),
            ("url", self.url.as_deref()),
        )?;
        // The service must always receive an explicit choice here, never
        // fall back to a server-side default.
        params.push_flag("best_image", self.best_image);
        Ok(FormRequest::new(Self::PATH, params))
    }
}
