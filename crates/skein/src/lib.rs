//! # Skein
//!
//! Typed Rust client for the Skein text-analysis API.
//!
//! Every analysis capability is one parameter struct under [`api`]: it
//! validates itself, encodes its own form body, and declares its typed
//! response. A [`Client`] owns the credentials, the base URL and the
//! transport, and exposes one uniform [`send`](Client::send) for all of them
//! instead of a hand-copied handler per endpoint.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skein::api::extract::ExtractParams;
//! use skein::api::sentiment::{AbsaParams, SentimentParams};
//! use skein::{Auth, Client};
//!
//! #[tokio::main]
//! async fn main() -> skein::Result<()> {
//!     let client = Client::new(Auth::new("app-id", "app-key"))?;
//!
//!     let sentiment = client
//!         .send(&SentimentParams::builder().text("I love this").mode("tweet").build())
//!         .await?;
//!     println!("{} ({:.2})", sentiment.polarity, sentiment.polarity_confidence);
//!
//!     let review = AbsaParams::builder()
//!         .text("Clean rooms, surly staff.")
//!         .domain("hotels")
//!         .build();
//!     for aspect in client.send(&review).await?.aspects {
//!         println!("{}: {}", aspect.aspect, aspect.polarity);
//!     }
//!
//!     let article = client
//!         .send(&ExtractParams::builder().url("https://example.com/story").build())
//!         .await?;
//!     if article.publish_date.is_unset() {
//!         println!("{}: no usable publish date", article.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Validation happens before I/O: a request missing its document source is
//! rejected locally and never touches the network. Transport failures pass
//! through unchanged; there are no retries and no hidden logging.

#![warn(missing_docs)]

/// Typed endpoint definitions, one module per analysis capability.
pub mod api;
/// Client construction and the shared call primitive.
pub mod client;

pub use client::{Auth, Client, DEFAULT_BASE_URL};
pub use skein_common::{
    Endpoint, Error, HttpClient, PublishedAt, RateLimits, Response, Result,
};

pub use skein_common as common;
