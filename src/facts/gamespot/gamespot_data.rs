use serde::Deserialize;

/// Body of the article search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GamespotArticles {
    pub results: Vec<GamespotArticle>,
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamespotArticle {
    pub id: u64,
    pub title: String,

    #[serde(default)]
    pub deck: String,

    pub body: String,

    #[serde(default)]
    pub authors: Option<String>,

    #[serde(default)]
    pub publish_date: Option<String>,

    pub site_detail_url: String,
    pub categories: GamespotCategory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamespotCategory {
    pub name: String,
}
