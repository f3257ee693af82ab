mod ign_data;
mod provider;

pub use ign_data::{IgnArticle, IgnArticleContent, IgnArticleMetadata, IgnArticles, IgnPagination};
pub use provider::{ARTICLE_SCORE, IGN_BASE_URL, Provider};
