use serde::Deserialize;

/// Body of the wiki search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FandomSearch {
    pub success: bool,

    #[serde(default)]
    pub data: Option<FandomPages>,

    #[serde(default)]
    pub error: Option<FandomError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FandomPages {
    pub pages: Vec<FandomPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FandomPage {
    pub id: u64,
    pub title: String,

    #[serde(rename = "abstract")]
    pub summary: String,

    pub url: String,

    #[serde(default)]
    pub sections: Vec<FandomSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FandomSection {
    pub title: String,
    pub level: u32,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FandomError {
    pub code: String,

    #[serde(default)]
    pub message: String,
}
