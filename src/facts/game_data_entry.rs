use super::ContentType;
use crate::Result;
use chrono::{DateTime, Utc};
use ohno::app_err;
use serde::Serialize;
use std::collections::BTreeMap;

/// Lowest valid reliability score.
pub const MIN_RELIABILITY: f64 = 0.0;

/// Highest valid reliability score.
pub const MAX_RELIABILITY: f64 = 10.0;

/// `site_specific` key describing which part of a page an entry came from.
pub const SECTION_TYPE: &str = "section_type";

/// `site_specific` key holding the author or channel name.
pub const AUTHOR: &str = "author";

/// `site_specific` key holding the upstream publication date.
pub const PUBLICATION_DATE: &str = "publication_date";

/// Source-specific metadata attached to an entry. Keys that are absent are simply unknown.
pub type SiteSpecific = BTreeMap<String, String>;

/// Builds a [`SiteSpecific`] map, dropping attributes that have no value.
pub fn site_specific<'a>(attributes: impl IntoIterator<Item = (&'a str, Option<String>)>) -> SiteSpecific {
    attributes
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

/// One normalized unit of collected information.
///
/// Entries are validated when constructed and cannot be modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDataEntry {
    content: String,
    url: String,
    reliability_score: f64,
    content_type: ContentType,
    collection_timestamp: DateTime<Utc>,
    text_length: usize,
    site_specific: SiteSpecific,
}

impl GameDataEntry {
    /// Create a new entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` or `url` is empty, or if `reliability_score`
    /// is not within `[0, 10]`.
    pub fn new(
        content: impl Into<String>,
        url: impl Into<String>,
        reliability_score: f64,
        content_type: ContentType,
        site_specific: SiteSpecific,
    ) -> Result<Self> {
        let content = content.into();
        let url = url.into();

        if content.is_empty() {
            return Err(app_err!("{content_type} entry must have content"));
        }

        if url.is_empty() {
            return Err(app_err!("{content_type} entry must have a URL"));
        }

        if !(MIN_RELIABILITY..=MAX_RELIABILITY).contains(&reliability_score) {
            return Err(app_err!(
                "reliability score for '{url}' must be between {MIN_RELIABILITY} and {MAX_RELIABILITY}, got {reliability_score}"
            ));
        }

        Ok(Self {
            text_length: content.chars().count(),
            content,
            url,
            reliability_score,
            content_type,
            collection_timestamp: Utc::now(),
            site_specific,
        })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn reliability_score(&self) -> f64 {
        self.reliability_score
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub const fn collection_timestamp(&self) -> DateTime<Utc> {
        self.collection_timestamp
    }

    /// Length of the content in characters.
    #[must_use]
    pub const fn text_length(&self) -> usize {
        self.text_length
    }

    #[must_use]
    pub const fn site_specific(&self) -> &SiteSpecific {
        &self.site_specific
    }

    /// Look up a single `site_specific` attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.site_specific.get(key).map(String::as_str)
    }
}
