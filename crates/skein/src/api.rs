//! Typed endpoint definitions, one module per analysis capability.
//!
//! Each module holds a parameter struct implementing
//! [`Endpoint`](skein_common::Endpoint) plus the typed response tree it
//! decodes into. Response fields the payload omits take their zero value;
//! confidence scores are `f32` with no contract beyond "higher is more
//! confident".

pub mod classify;
pub mod concepts;
pub mod elsa;
pub mod entities;
pub mod extract;
pub mod hashtags;
pub mod language;
pub mod sentiment;
pub mod summarize;
