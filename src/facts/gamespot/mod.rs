mod gamespot_data;
mod provider;

pub use gamespot_data::{GamespotArticle, GamespotArticles, GamespotCategory};
pub use provider::{ALLOWED_CATEGORIES, ARTICLE_SCORE, GAMESPOT_BASE_URL, Provider};
