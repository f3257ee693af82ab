use super::{IgnArticle, IgnArticles};
use crate::Result;
use crate::facts::http::{self, Fetched};
use crate::facts::{AUTHOR, Collector, ContentType, GameDataEntry, PUBLICATION_DATE, RateLimiter, ensure_entries_match, site_specific};
use async_trait::async_trait;
use core::time::Duration;
use ohno::{EnrichableExt, app_err};

const LOG_TARGET: &str = "       ign";

pub const IGN_BASE_URL: &str = "https://api.ign.com";

/// Score assigned to every IGN article.
pub const ARTICLE_SCORE: f64 = 8.0;

/// Collects news articles from the IGN article search API.
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
            base_url: base_url.unwrap_or(IGN_BASE_URL).to_string(),
            rate_limiter: RateLimiter::new(min_interval),
        }
    }

    fn article_entry(article: IgnArticle) -> Result<GameDataEntry> {
        let article_id = article.article_id;
        GameDataEntry::new(
            article.content.body,
            article.url,
            ARTICLE_SCORE,
            ContentType::Ign,
            site_specific([(AUTHOR, article.metadata.author), (PUBLICATION_DATE, article.metadata.publish_date)]),
        )
        .map_err(|e| e.enrich_with(|| format!("invalid IGN article '{article_id}'")))
    }
}

#[async_trait]
impl Collector for Provider {
    fn content_type(&self) -> ContentType {
        ContentType::Ign
    }

    async fn collect(&self, game_name: &str) -> Result<Vec<GameDataEntry>> {
        self.rate_limiter.wait().await;

        let url = http::endpoint(&self.base_url, "v1/articles", [("q", game_name)])?;
        let articles: IgnArticles = match http::get_json(&self.client, &url, "IGN").await? {
            Fetched::Found(articles) => articles,
            Fetched::RateLimited { retry_after } => return Err(http::rate_limit_error("IGN", retry_after)),
            Fetched::NotFound => return Err(app_err!("IGN article endpoint not found at '{}'", self.base_url)),
        };

        log::debug!(
            target: LOG_TARGET,
            "IGN returned {} of {} articles for '{game_name}' (page {} of {})",
            articles.articles.len(),
            articles.pagination.total,
            articles.pagination.current_page,
            articles.pagination.total_pages
        );

        let entries = articles
            .articles
            .into_iter()
            .map(Self::article_entry)
            .collect::<Result<Vec<_>>>()?;

        ensure_entries_match(ContentType::Ign, &entries)?;
        log::info!(target: LOG_TARGET, "Collected {} IGN entries for '{game_name}'", entries.len());
        Ok(entries)
    }
}
