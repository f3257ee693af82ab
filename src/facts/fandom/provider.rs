use super::{FandomPage, FandomSearch};
use crate::Result;
use crate::facts::http::{self, Fetched};
use crate::facts::{Collector, ContentType, GameDataEntry, MAX_RELIABILITY, RateLimiter, SECTION_TYPE, ensure_entries_match, site_specific};
use async_trait::async_trait;
use core::time::Duration;
use ohno::app_err;
use regex::Regex;
use std::sync::LazyLock;

const LOG_TARGET: &str = "    fandom";

pub const FANDOM_BASE_URL: &str = "https://api.fandom.com";

const BASE_SCORE: f64 = 7.0;
const RATE_LIMIT_CODE: &str = "rate_limit_exceeded";
const NOT_FOUND_CODE: &str = "not_found";

static WIKI_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").expect("invalid regex"));
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex"));

/// Collects page abstracts and sections from the Fandom wiki search API.
#[derive(Debug)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl Provider {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: Option<&str>, min_interval: Duration) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or(FANDOM_BASE_URL).to_string(),
            rate_limiter: RateLimiter::new(min_interval),
        }
    }

    fn page_entries(page: &FandomPage) -> Result<Vec<GameDataEntry>> {
        let mut entries = Vec::with_capacity(page.sections.len() + 1);

        if !page.summary.is_empty() {
            entries.push(GameDataEntry::new(
                page.summary.as_str(),
                page.url.as_str(),
                wiki_score(&page.summary),
                ContentType::Fandom,
                site_specific([(SECTION_TYPE, Some("abstract".to_string()))]),
            )?);
        }

        for section in page.sections.iter().filter(|s| !s.content.is_empty()) {
            entries.push(GameDataEntry::new(
                section.content.as_str(),
                format!("{}#{}", page.url, section_anchor(&section.title)),
                wiki_score(&section.content),
                ContentType::Fandom,
                site_specific([(SECTION_TYPE, Some(section.title.to_lowercase()))]),
            )?);
        }

        Ok(entries)
    }
}

#[async_trait]
impl Collector for Provider {
    fn content_type(&self) -> ContentType {
        ContentType::Fandom
    }

    async fn collect(&self, game_name: &str) -> Result<Vec<GameDataEntry>> {
        self.rate_limiter.wait().await;

        let url = http::endpoint(&self.base_url, "api/v1/search", [("query", game_name)])?;
        let search: FandomSearch = match http::get_json(&self.client, &url, "Fandom").await? {
            Fetched::Found(search) => search,
            Fetched::RateLimited { .. } => {
                log::warn!(target: LOG_TARGET, "Fandom rate limit exceeded while searching for '{game_name}'");
                return Ok(Vec::new());
            }
            Fetched::NotFound => return Err(app_err!("Fandom search endpoint not found at '{}'", self.base_url)),
        };

        let pages = match (search.success, search.data, search.error) {
            (true, Some(data), _) => data.pages,
            (_, _, Some(error)) if error.code == RATE_LIMIT_CODE => {
                log::warn!(target: LOG_TARGET, "Fandom rate limit exceeded while searching for '{game_name}': {}", error.message);
                return Ok(Vec::new());
            }
            (_, _, Some(error)) if error.code == NOT_FOUND_CODE => {
                log::info!(target: LOG_TARGET, "No Fandom pages found for '{game_name}'");
                return Ok(Vec::new());
            }
            (_, _, Some(error)) => return Err(app_err!("Fandom rejected the search ({}): {}", error.code, error.message)),
            (_, _, None) => return Err(app_err!("invalid Fandom response format: no data and no error")),
        };

        let mut entries = Vec::new();
        for page in &pages {
            log::debug!(target: LOG_TARGET, "Processing Fandom page '{}' ({})", page.title, page.id);
            entries.extend(Self::page_entries(page)?);
        }

        ensure_entries_match(ContentType::Fandom, &entries)?;
        log::info!(target: LOG_TARGET, "Collected {} Fandom entries for '{game_name}'", entries.len());
        Ok(entries)
    }
}

/// Fragment identifying a section within its page.
#[must_use]
pub fn section_anchor(title: &str) -> String {
    WHITESPACE_REGEX.replace_all(&title.to_lowercase(), "_").into_owned()
}

/// Wiki heuristic: longer and better-structured text is more trustworthy.
#[must_use]
pub fn wiki_score(content: &str) -> f64 {
    let length = content.chars().count();
    let mut score = BASE_SCORE;

    if length > 1000 {
        score += 1.0;
    }

    if length > 2000 {
        score += 1.0;
    }

    if content.contains("\n\n") {
        score += 0.5;
    }

    if WIKI_LINK_REGEX.is_match(content) {
        score += 0.5;
    }

    score.min(MAX_RELIABILITY)
}
