use serde::Deserialize;

/// Body of the article search endpoint.
///
/// Pagination is required so that a body of the wrong shape is rejected even when it
/// happens to contain an `articles` array.
#[derive(Debug, Clone, Deserialize)]
pub struct IgnArticles {
    pub articles: Vec<IgnArticle>,
    pub pagination: IgnPagination,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnArticle {
    pub article_id: String,
    pub metadata: IgnArticleMetadata,
    pub content: IgnArticleContent,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnArticleMetadata {
    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub publish_date: Option<String>,

    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IgnArticleContent {
    pub body: String,

    #[serde(default)]
    pub snippets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnPagination {
    pub total: u64,
    pub current_page: u64,
    pub total_pages: u64,
}
