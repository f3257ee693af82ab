use super::{YoutubeSearch, YoutubeTranscript, YoutubeVideo};
use crate::Result;
use crate::facts::http::{self, Fetched};
use crate::facts::{
    AUTHOR, Collector, ContentType, DEFAULT_MIN_INTERVAL, GameDataEntry, PUBLICATION_DATE, RateLimiter, SECTION_TYPE,
    ensure_entries_match, reliability, site_specific,
};
use async_trait::async_trait;
use chrono::SecondsFormat;
use core::fmt;
use core::time::Duration;
use ohno::app_err;
use regex::Regex;
use std::sync::LazyLock;

const LOG_TARGET: &str = "   youtube";

pub const YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const TRANSCRIPT_BASE_URL: &str = "https://youtube-transcript.googleapis.com/v1/transcripts";

const WATCH_URL: &str = "https://www.youtube.com/watch";

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").expect("invalid regex")
});

/// Settings for a YouTube [`Provider`].
#[derive(Clone)]
pub struct Options {
    pub base_url: Option<String>,
    pub transcript_url: Option<String>,
    pub api_key: String,

    /// Channel titles to accept. Empty accepts every channel.
    pub channels: Vec<String>,

    pub min_duration: Duration,
    pub max_duration: Duration,
    pub min_interval: Duration,
}

impl Options {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: None,
            transcript_url: None,
            api_key: api_key.into(),
            channels: Vec::new(),
            min_duration: Duration::from_secs(10 * 60),
            max_duration: Duration::from_secs(30 * 60),
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("base_url", &self.base_url)
            .field("transcript_url", &self.transcript_url)
            .field("api_key", &"<redacted>")
            .field("channels", &self.channels)
            .field("min_duration", &self.min_duration)
            .field("max_duration", &self.max_duration)
            .field("min_interval", &self.min_interval)
            .finish()
    }
}

/// Collects caption transcripts of gaming videos from the YouTube Data API.
#[derive(Debug)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
    transcript_url: String,
    options: Options,
    rate_limiter: RateLimiter,
}

impl Provider {
    /// # Errors
    ///
    /// Fails when the API key is blank or the duration window is inverted.
    pub fn new(client: reqwest::Client, options: Options) -> Result<Self> {
        if options.api_key.trim().is_empty() {
            return Err(app_err!("a YouTube API key is required"));
        }

        if options.min_duration > options.max_duration {
            return Err(app_err!(
                "YouTube minimum duration ({}s) exceeds maximum duration ({}s)",
                options.min_duration.as_secs(),
                options.max_duration.as_secs()
            ));
        }

        Ok(Self {
            client,
            base_url: options.base_url.clone().unwrap_or_else(|| YOUTUBE_BASE_URL.to_string()),
            transcript_url: options.transcript_url.clone().unwrap_or_else(|| TRANSCRIPT_BASE_URL.to_string()),
            rate_limiter: RateLimiter::new(options.min_interval),
            options,
        })
    }

    fn is_allowed_channel(&self, channel: &str) -> bool {
        self.options.channels.is_empty() || self.options.channels.iter().any(|c| c.eq_ignore_ascii_case(channel))
    }

    /// The video's length if it falls inside the configured window.
    fn accepted_duration(&self, video: &YoutubeVideo) -> Option<Duration> {
        let details = video.content_details.as_ref()?;
        let duration = parse_duration(&details.duration)?;
        (self.options.min_duration..=self.options.max_duration)
            .contains(&duration)
            .then_some(duration)
    }

    async fn search(&self, game_name: &str) -> Result<Vec<YoutubeVideo>> {
        self.rate_limiter.wait().await;

        let url = http::endpoint(
            &self.base_url,
            "search",
            [
                ("part", "snippet"),
                ("type", "video"),
                ("q", game_name),
                ("key", self.options.api_key.as_str()),
            ],
        )?;

        let search: YoutubeSearch = match http::get_json(&self.client, &url, "YouTube").await? {
            Fetched::Found(search) => search,
            Fetched::RateLimited { retry_after } => return Err(http::rate_limit_error("YouTube", retry_after)),
            Fetched::NotFound => return Err(app_err!("YouTube search endpoint not found at '{}'", self.base_url)),
        };

        if let Some(error) = search.error {
            return Err(app_err!("YouTube API error: {}", error.message));
        }

        Ok(search.items)
    }

    /// Fetch and flatten a video's captions. `None` means the video has no usable transcript.
    async fn transcript(&self, video_id: &str) -> Result<Option<String>> {
        self.rate_limiter.wait().await;

        let url = http::resource(&self.transcript_url, video_id)?;
        let mut transcript: YoutubeTranscript = match http::get_json(&self.client, &url, "YouTube transcripts").await? {
            Fetched::Found(transcript) => transcript,
            Fetched::NotFound => {
                log::info!(target: LOG_TARGET, "No transcript available for video {video_id}");
                return Ok(None);
            }
            Fetched::RateLimited { .. } => {
                log::warn!(target: LOG_TARGET, "Transcript service rate limited the request for video {video_id}");
                return Ok(None);
            }
        };

        if let Some(error) = transcript.error {
            log::info!(target: LOG_TARGET, "No transcript available for video {video_id}: {}", error.message);
            return Ok(None);
        }

        if transcript.transcript.is_empty() {
            log::info!(target: LOG_TARGET, "Transcript for video {video_id} is empty");
            return Ok(None);
        }

        transcript.transcript.sort_by(|a, b| a.start.total_cmp(&b.start));
        let text = transcript
            .transcript
            .iter()
            .map(|segment| segment.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok((!text.is_empty()).then_some(text))
    }
}

#[async_trait]
impl Collector for Provider {
    fn content_type(&self) -> ContentType {
        ContentType::Youtube
    }

    async fn collect(&self, game_name: &str) -> Result<Vec<GameDataEntry>> {
        let videos = self.search(game_name).await?;
        log::debug!(target: LOG_TARGET, "YouTube returned {} videos for '{game_name}'", videos.len());

        let mut entries = Vec::new();
        for video in videos {
            let video_id = video.id.video_id.as_str();

            if !self.is_allowed_channel(&video.snippet.channel_title) {
                log::debug!(target: LOG_TARGET, "Skipping video {video_id} from channel '{}'", video.snippet.channel_title);
                continue;
            }

            let Some(duration) = self.accepted_duration(&video) else {
                log::debug!(target: LOG_TARGET, "Skipping video {video_id} outside the accepted duration window");
                continue;
            };

            let Some(content) = self.transcript(video_id).await? else {
                continue;
            };

            let url = watch_url(video_id);
            let published = video.snippet.published_at;
            let score = reliability::score(&url, Some(content.chars().count()), Some(published));

            entries.push(GameDataEntry::new(
                content,
                url,
                score,
                ContentType::Youtube,
                site_specific([
                    (AUTHOR, Some(video.snippet.channel_title.clone())),
                    (PUBLICATION_DATE, Some(published.to_rfc3339_opts(SecondsFormat::Secs, true))),
                    (SECTION_TYPE, Some(format!("VIDEO_DURATION_{}", duration.as_secs()))),
                ]),
            )?);
        }

        ensure_entries_match(ContentType::Youtube, &entries)?;
        log::info!(target: LOG_TARGET, "Collected {} YouTube entries for '{game_name}'", entries.len());
        Ok(entries)
    }
}

/// Public page of a video.
#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL}?v={video_id}")
}

/// Parse an ISO-8601 duration such as `PT1H2M3S`.
#[must_use]
pub fn parse_duration(text: &str) -> Option<Duration> {
    let captures = DURATION_REGEX.captures(text)?;

    let mut seconds: u64 = 0;
    let mut any = false;
    for (group, unit) in [(1, 86_400), (2, 3_600), (3, 60), (4, 1)] {
        if let Some(value) = captures.get(group) {
            let value: u64 = value.as_str().parse().ok()?;
            seconds = seconds.checked_add(value.checked_mul(unit)?)?;
            any = true;
        }
    }

    any.then(|| Duration::from_secs(seconds))
}
