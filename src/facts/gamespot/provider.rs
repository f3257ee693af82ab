use super::{GamespotArticle, GamespotArticles};
use crate::Result;
use crate::facts::http::{self, Fetched};
use crate::facts::{
    AUTHOR, Collector, ContentType, GameDataEntry, PUBLICATION_DATE, RateLimiter, SECTION_TYPE, ensure_entries_match, site_specific,
};
use async_trait::async_trait;
use core::time::Duration;
use ohno::app_err;

const LOG_TARGET: &str = "  gamespot";

pub const GAMESPOT_BASE_URL: &str = "https://www.gamespot.com";

/// Score assigned to every kept GameSpot article.
pub const ARTICLE_SCORE: f64 = 7.5;

/// Article categories worth collecting; everything else is dropped.
pub const ALLOWED_CATEGORIES: &[&str] = &["Reviews", "Previews"];

/// Collects reviews and previews from the GameSpot article API.
#[derive(Debug)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    rate_limiter: RateLimiter,
}

impl Provider {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: Option<&str>, api_key: Option<&str>, min_interval: Duration) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or(GAMESPOT_BASE_URL).to_string(),
            api_key: api_key.map(ToString::to_string),
            rate_limiter: RateLimiter::new(min_interval),
        }
    }

    fn article_entry(article: GamespotArticle) -> Result<GameDataEntry> {
        GameDataEntry::new(
            article.body,
            article.site_detail_url,
            ARTICLE_SCORE,
            ContentType::Gamespot,
            site_specific([
                (AUTHOR, article.authors),
                (PUBLICATION_DATE, article.publish_date),
                (SECTION_TYPE, Some(article.categories.name)),
            ]),
        )
    }
}

#[async_trait]
impl Collector for Provider {
    fn content_type(&self) -> ContentType {
        ContentType::Gamespot
    }

    async fn collect(&self, game_name: &str) -> Result<Vec<GameDataEntry>> {
        self.rate_limiter.wait().await;

        let mut params = vec![("q", game_name)];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.as_str()));
        }

        let url = http::endpoint(&self.base_url, "api/articles/", params)?;
        let articles: GamespotArticles = match http::get_json(&self.client, &url, "GameSpot").await? {
            Fetched::Found(articles) => articles,
            Fetched::RateLimited { retry_after } => return Err(http::rate_limit_error("GameSpot", retry_after)),
            Fetched::NotFound => return Err(app_err!("GameSpot article endpoint not found at '{}'", self.base_url)),
        };

        log::debug!(
            target: LOG_TARGET,
            "GameSpot returned {} of {} articles for '{game_name}' (offset {}, limit {})",
            articles.results.len(),
            articles.total,
            articles.offset,
            articles.limit
        );

        let mut entries = Vec::new();
        for article in articles.results {
            if !ALLOWED_CATEGORIES.contains(&article.categories.name.as_str()) {
                log::trace!(target: LOG_TARGET, "Skipping GameSpot article {} in category '{}'", article.id, article.categories.name);
                continue;
            }

            entries.push(Self::article_entry(article)?);
        }

        ensure_entries_match(ContentType::Gamespot, &entries)?;
        log::info!(target: LOG_TARGET, "Collected {} GameSpot entries for '{game_name}'", entries.len());
        Ok(entries)
    }
}
