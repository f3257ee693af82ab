mod provider;
mod youtube_data;

pub use provider::{Options, Provider, TRANSCRIPT_BASE_URL, YOUTUBE_BASE_URL, parse_duration, watch_url};
pub use youtube_data::{
    YoutubeApiError, YoutubeContentDetails, YoutubeSearch, YoutubeSnippet, YoutubeTranscript, YoutubeTranscriptSegment, YoutubeVideo,
    YoutubeVideoId,
};
