use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of the video search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeSearch {
    #[serde(default)]
    pub items: Vec<YoutubeVideo>,

    #[serde(default)]
    pub error: Option<YoutubeApiError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub id: YoutubeVideoId,
    pub snippet: YoutubeSnippet,

    #[serde(default)]
    pub content_details: Option<YoutubeContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideoId {
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSnippet {
    pub published_at: DateTime<Utc>,
    pub channel_title: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeContentDetails {
    /// ISO-8601 duration such as `PT15M30S`.
    pub duration: String,
}

/// Error object returned in place of results.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeApiError {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
}

/// Body of the transcript endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeTranscript {
    #[serde(default)]
    pub video_id: Option<String>,

    #[serde(default)]
    pub transcript: Vec<YoutubeTranscriptSegment>,

    #[serde(default)]
    pub error: Option<YoutubeApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeTranscriptSegment {
    pub text: String,
    pub start: f64,

    #[serde(default)]
    pub duration: f64,
}
