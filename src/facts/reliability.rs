//! Domain-reputation reliability scoring.
//!
//! Scores are deterministic: the same URL, length, and publication date always produce the
//! same value for a given evaluation time. Providers that have no source-specific heuristic
//! use [`score`] directly.

use chrono::{DateTime, Utc};
use url::Url;

const DOMAIN_WEIGHT: f64 = 0.7;
const LENGTH_WEIGHT: f64 = 0.15;
const FRESHNESS_WEIGHT: f64 = 0.15;

/// Score given to domains missing from [`DOMAIN_SCORES`].
pub const DEFAULT_DOMAIN_SCORE: f64 = 4.0;

const MIN_CONTENT_LENGTH: usize = 100;
const MAX_CONTENT_LENGTH: usize = 5000;
const MAX_AGE_DAYS: f64 = 365.0;

/// Reputation of known registrable domains.
pub const DOMAIN_SCORES: &[(&str, f64)] = &[
    // flagship gaming sites
    ("ign.com", 9.0),
    ("gamespot.com", 9.0),
    ("fandom.com", 8.0),
    // enthusiast press
    ("eurogamer.net", 7.0),
    ("polygon.com", 7.0),
    ("rockpapershotgun.com", 7.0),
    // user-generated content
    ("reddit.com", 5.0),
    ("steamcommunity.com", 5.0),
    ("youtube.com", 5.0),
];

/// Input to [`combined_score`].
#[derive(Debug, Clone, Copy)]
pub struct ScoreSource<'a> {
    pub url: &'a str,
    pub content_length: Option<usize>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl<'a> ScoreSource<'a> {
    #[must_use]
    pub const fn new(url: &'a str) -> Self {
        Self {
            url,
            content_length: None,
            publish_date: None,
        }
    }
}

/// Score a piece of content by where it lives, how long it is, and how old it is.
///
/// Returns exactly 0 for an empty or unparseable URL, or one without a host.
/// A content length of 0 counts as missing. With neither optional input, the raw domain
/// score is returned.
#[must_use]
pub fn score(url: &str, content_length: Option<usize>, publish_date: Option<DateTime<Utc>>) -> f64 {
    score_at(url, content_length, publish_date, Utc::now())
}

/// Same as [`score`], evaluating freshness relative to `now`.
#[must_use]
pub fn score_at(url: &str, content_length: Option<usize>, publish_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(domain_score) = domain_score(url) else {
        return 0.0;
    };

    let content_length = content_length.filter(|&len| len > 0);
    if content_length.is_none() && publish_date.is_none() {
        return domain_score;
    }

    let length = content_length.map_or(1.0, length_score);
    let freshness = publish_date.map_or(1.0, |date| freshness_score(date, now));

    let weighted = domain_score * DOMAIN_WEIGHT + length * LENGTH_WEIGHT + freshness * FRESHNESS_WEIGHT;
    (weighted * 10.0 / 7.0).clamp(0.0, 10.0)
}

/// Mean score of `sources`, ignoring any that score exactly 0.
///
/// Returns 0 when there is nothing valid to average.
#[must_use]
pub fn combined_score(sources: &[ScoreSource<'_>]) -> f64 {
    combined_score_at(sources, Utc::now())
}

/// Same as [`combined_score`], evaluating freshness relative to `now`.
#[must_use]
pub fn combined_score_at(sources: &[ScoreSource<'_>], now: DateTime<Utc>) -> f64 {
    let (sum, count) = sources
        .iter()
        .map(|s| score_at(s.url, s.content_length, s.publish_date, now))
        .filter(|&s| s > 0.0)
        .fold((0.0, 0_u32), |(sum, count), s| (sum + s, count + 1));

    if count == 0 { 0.0 } else { sum / f64::from(count) }
}

/// The last two dot-separated labels of a host name.
#[must_use]
pub fn registrable_domain(host: &str) -> &str {
    let host = host.trim_end_matches('.');
    match host.rmatch_indices('.').nth(1) {
        Some((index, _)) => host.get(index + 1..).unwrap_or(host),
        None => host,
    }
}

fn domain_score(url: &str) -> Option<f64> {
    if url.is_empty() {
        return None;
    }

    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let domain = registrable_domain(&host);

    Some(
        DOMAIN_SCORES
            .iter()
            .find(|(known, _)| *known == domain)
            .map_or(DEFAULT_DOMAIN_SCORE, |(_, score)| *score),
    )
}

#[expect(clippy::cast_precision_loss, reason = "lengths are bounded by the interpolation range")]
fn length_score(length: usize) -> f64 {
    if length < MIN_CONTENT_LENGTH {
        return 0.5;
    }

    if length > MAX_CONTENT_LENGTH {
        return 1.0;
    }

    0.5 + 0.5 * (length - MIN_CONTENT_LENGTH) as f64 / (MAX_CONTENT_LENGTH - MIN_CONTENT_LENGTH) as f64
}

#[expect(clippy::cast_precision_loss, reason = "sub-second precision is irrelevant for day-scale ages")]
fn freshness_score(publish_date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_days = ((now - publish_date).num_seconds().max(0) as f64) / 86_400.0;
    if age_days > MAX_AGE_DAYS {
        return 0.5;
    }

    1.0 - 0.5 * age_days / MAX_AGE_DAYS
}
