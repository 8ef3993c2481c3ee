//! Lenient publish-timestamp decoding for article extraction.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// Publication timestamp with the extraction endpoint's lenient contract.
///
/// The service scrapes `publishDate` out of arbitrary pages and passes
/// whatever it found straight through, so the field can be a valid RFC 3339
/// instant, garbage, or missing entirely. Decoding therefore never fails the
/// call: an unparseable value degrades to [`PublishedAt::Invalid`] with the
/// raw string preserved, and a missing or null field is
/// [`PublishedAt::Absent`]. Callers check [`is_unset`](PublishedAt::is_unset)
/// rather than expecting a parse failure to surface as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PublishedAt {
    /// The field was missing or null.
    #[default]
    Absent,
    /// The field was present but not parseable; the raw value is preserved.
    Invalid(SmolStr),
    /// A parsed publication instant.
    At(DateTime<FixedOffset>),
}

impl PublishedAt {
    /// Parse an RFC 3339 string, degrading to [`PublishedAt::Invalid`].
    pub fn parse(raw: &str) -> Self {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Self::At(dt),
            Err(_) => Self::Invalid(SmolStr::new(raw)),
        }
    }

    /// True unless an instant was actually parsed.
    pub fn is_unset(&self) -> bool {
        !matches!(self, Self::At(_))
    }

    /// The parsed instant, if there is one.
    pub fn datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::At(dt) => Some(dt),
            _ => None,
        }
    }

    /// The raw value of a field that was present but unparseable.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Invalid(raw) => Some(raw),
            _ => None,
        }
    }
}

impl fmt::Display for PublishedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("unset"),
            Self::Invalid(raw) => write!(f, "invalid ({raw})"),
            Self::At(dt) => f.write_str(&dt.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for PublishedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<SmolStr> = Option::deserialize(deserializer)?;
        Ok(match value.as_deref() {
            None | Some("") => Self::Absent,
            Some(raw) => Self::parse(raw),
        })
    }
}

impl Serialize for PublishedAt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Invalid(raw) => serializer.serialize_str(raw),
            Self::At(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

impl From<DateTime<FixedOffset>> for PublishedAt {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::At(dt)
    }
}
