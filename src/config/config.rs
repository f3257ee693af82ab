use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use directories::BaseDirs;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "game-intel.toml";

const MAX_COLLECTOR_TIMEOUT_SECS: u64 = 60;

/// YouTube channels accepted when the configuration does not list any
pub const DEFAULT_YOUTUBE_CHANNELS: &[&str] = &[
    "IGN",
    "GameSpot",
    "Gameranx",
    "GamingBolt",
    "Digital Foundry",
    "Skill Up",
    "ACG",
    "Easy Allies",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum seconds a single source may spend on one query
    #[serde(default = "default_collector_timeout_secs")]
    pub collector_timeout_secs: u64,

    /// Minimum milliseconds between two requests to the same source
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,

    /// Seconds to reuse a response for the same game; 0 disables caching
    #[serde(default)]
    pub cache_ttl_secs: u64,

    #[serde(default)]
    pub fandom: SourceConfig,

    #[serde(default)]
    pub ign: SourceConfig,

    #[serde(default)]
    pub gamespot: SourceConfig,

    #[serde(default)]
    pub youtube: YoutubeConfig,
}

/// Settings shared by every source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Overrides the public API location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct YoutubeConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_url: Option<String>,

    /// Channel titles to accept; empty accepts every channel
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,

    #[serde(default = "default_min_duration_secs")]
    pub min_duration_secs: u64,

    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: u64,
}

const fn default_collector_timeout_secs() -> u64 {
    30
}

const fn default_min_request_interval_ms() -> u64 {
    200
}

const fn default_enabled() -> bool {
    true
}

fn default_channels() -> Vec<String> {
    DEFAULT_YOUTUBE_CHANNELS.iter().map(ToString::to_string).collect()
}

const fn default_min_duration_secs() -> u64 {
    10 * 60
}

const fn default_max_duration_secs() -> u64 {
    30 * 60
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: None,
        }
    }
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: None,
            transcript_url: None,
            channels: default_channels(),
            min_duration_secs: default_min_duration_secs(),
            max_duration_secs: default_max_duration_secs(),
        }
    }
}

impl Config {
    /// Find the configuration file to use.
    ///
    /// An explicit path always wins. Otherwise `game-intel.toml` in `workspace_root` is
    /// used, then `game-intel/config.toml` in the platform configuration directory.
    #[must_use]
    pub fn resolve_path(workspace_root: &Utf8Path, config_path: Option<&Utf8Path>) -> Option<Utf8PathBuf> {
        if let Some(path) = config_path {
            return Some(path.to_path_buf());
        }

        let local = workspace_root.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        BaseDirs::new()
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().join("game-intel").join("config.toml")).ok())
            .filter(|path| path.is_file())
    }

    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(workspace_root: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = Self::resolve_path(workspace_root, config_path) else {
            log::debug!("No configuration file found, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(&path).into_app_err_with(|| format!("reading game-intel configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;

        log::debug!("Loaded configuration from '{path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or a URL cannot be parsed
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_COLLECTOR_TIMEOUT_SECS).contains(&self.collector_timeout_secs) {
            return Err(app_err!(
                "collector_timeout_secs must be between 1 and {MAX_COLLECTOR_TIMEOUT_SECS}, got {}",
                self.collector_timeout_secs
            ));
        }

        validate_url("fandom.base_url", self.fandom.base_url.as_deref())?;
        validate_url("ign.base_url", self.ign.base_url.as_deref())?;
        validate_url("gamespot.base_url", self.gamespot.base_url.as_deref())?;
        validate_url("youtube.base_url", self.youtube.base_url.as_deref())?;
        validate_url("youtube.transcript_url", self.youtube.transcript_url.as_deref())?;

        if self.youtube.min_duration_secs > self.youtube.max_duration_secs {
            return Err(app_err!(
                "youtube.min_duration_secs ({}) must not exceed youtube.max_duration_secs ({})",
                self.youtube.min_duration_secs,
                self.youtube.max_duration_secs
            ));
        }

        Ok(())
    }

    #[must_use]
    pub const fn collector_timeout(&self) -> Duration {
        Duration::from_secs(self.collector_timeout_secs)
    }

    #[must_use]
    pub const fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    /// `None` when response caching is disabled.
    #[must_use]
    pub const fn cache_ttl(&self) -> Option<Duration> {
        if self.cache_ttl_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.cache_ttl_secs))
        }
    }
}

fn validate_url(key: &str, value: Option<&str>) -> Result<()> {
    if let Some(value) = value {
        let _ = Url::parse(value).into_app_err_with(|| format!("{key} is not a valid URL: '{value}'"))?;
    }

    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, root)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.collector_timeout(), Duration::from_secs(30));
        assert_eq!(config.min_request_interval(), Duration::from_millis(200));
        assert_eq!(config.cache_ttl(), None);
        assert!(config.fandom.enabled && config.ign.enabled && config.gamespot.enabled && config.youtube.enabled);
        assert_eq!(config.youtube.min_duration_secs, 600);
        assert_eq!(config.youtube.max_duration_secs, 1800);
        assert!(!config.youtube.channels.is_empty());
    }

    #[test]
    fn test_empty_file_uses_field_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.collector_timeout_secs, 30);
        assert_eq!(config.youtube.channels, default_channels());
        config.validate().unwrap();
    }

    #[test]
    fn test_youtube_table_without_channels_keeps_default_channels() {
        let config: Config = toml::from_str("[youtube]
min_duration_secs = 300
").unwrap();
        assert_eq!(config.youtube.min_duration_secs, 300);
        assert_eq!(config.youtube.channels, default_channels());

        let config: Config = toml::from_str("[youtube]
channels = []
").unwrap();
        assert!(config.youtube.channels.is_empty());
    }

    #[test]
    fn test_embedded_channels_match_builtin_defaults() {
        assert_eq!(Config::default().youtube.channels, default_channels());
        assert_eq!(YoutubeConfig::default().channels, default_channels());
    }

    #[test]
    fn test_validate_timeout_out_of_range() {
        let config = Config {
            collector_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            collector_timeout_secs: 61,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_timeout_boundaries() {
        for secs in [1, 60] {
            let config = Config {
                collector_timeout_secs: secs,
                ..Config::default()
            };
            config.validate().unwrap();
        }
    }

    #[test]
    fn test_validate_bad_base_url() {
        let config = Config {
            ign: SourceConfig {
                enabled: true,
                base_url: Some("not a url".to_string()),
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ign.base_url"));
    }

    #[test]
    fn test_validate_inverted_duration_window() {
        let config = Config {
            youtube: YoutubeConfig {
                min_duration_secs: 1800,
                max_duration_secs: 600,
                ..YoutubeConfig::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cache_ttl_enabled() {
        let config = Config {
            cache_ttl_secs: 90,
            ..Config::default()
        };
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<Config, _> = toml::from_str("unknown_field = 1\n");
        assert!(result.is_err());

        let result: Result<Config, _> = toml::from_str("[fandom]\napi_key = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_save_default_and_load() {
        let (_tmp, root) = temp_root();
        let output_path = root.join(CONFIG_FILE_NAME);
        Config::save_default(&output_path).unwrap();

        let loaded = Config::load(&root, Some(&output_path)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_finds_file_in_workspace_root() {
        let (_tmp, root) = temp_root();
        fs::write(root.join(CONFIG_FILE_NAME), "cache_ttl_secs = 5\n").unwrap();

        assert_eq!(Config::resolve_path(&root, None), Some(root.join(CONFIG_FILE_NAME)));
        let config = Config::load(&root, None).unwrap();
        assert_eq!(config.cache_ttl_secs, 5);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_explicit_path_fails() {
        let (_tmp, root) = temp_root();
        let missing = root.join("missing.toml");
        let err = Config::load(&root, Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("reading game-intel configuration file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_rejects_invalid_values() {
        let (_tmp, root) = temp_root();
        let path = root.join("bad.toml");
        fs::write(&path, "collector_timeout_secs = 600\n").unwrap();

        let err = Config::load(&root, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("collector_timeout_secs"));
    }

    #[test]
    fn test_default_config_toml_is_not_empty() {
        assert!(!DEFAULT_CONFIG_TOML.is_empty());
    }
}
