//! Configuration for the command-line tool.

#[expect(clippy::module_inception, reason = "the module holds the Config type and its loader")]
mod config;

pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML, DEFAULT_YOUTUBE_CHANNELS, SourceConfig, YoutubeConfig};
