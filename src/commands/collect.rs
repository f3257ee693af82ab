use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use crate::Result;
use crate::config::Config;
use crate::facts::{Aggregator, build_http_client, fandom, gamespot, ign, youtube};
use crate::reports::{generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "   collect";

/// Value of `--json` that sends the report to standard output.
const STDOUT_PATH: &str = "-";

#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Name of the game to look up
    #[arg(value_name = "GAME")]
    pub game: String,

    /// Path to configuration file (default is `game-intel.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// GameSpot API key
    #[arg(long, value_name = "KEY", env = "GAMESPOT_API_KEY", hide_env_values = true)]
    pub gamespot_api_key: Option<String>,

    /// YouTube Data API key; YouTube is skipped without one
    #[arg(long, value_name = "KEY", env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Write the response as JSON to a file, or to stdout when PATH is `-`
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Print the console report. If omitted, it is shown only when no JSON report is requested.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Build an aggregator with one provider per enabled source.
///
/// YouTube is registered only when an API key is available.
pub fn build_aggregator(config: &Config, gamespot_api_key: Option<&str>, youtube_api_key: Option<&str>) -> Result<Aggregator> {
    let client = build_http_client()?;
    let min_interval = config.min_request_interval();

    let mut aggregator = Aggregator::new().with_collector_timeout(config.collector_timeout());
    if let Some(ttl) = config.cache_ttl() {
        aggregator = aggregator.with_response_cache(ttl);
    }

    if config.fandom.enabled {
        aggregator.register_collector(fandom::Provider::new(client.clone(), config.fandom.base_url.as_deref(), min_interval));
    }

    if config.ign.enabled {
        aggregator.register_collector(ign::Provider::new(client.clone(), config.ign.base_url.as_deref(), min_interval));
    }

    if config.gamespot.enabled {
        aggregator.register_collector(gamespot::Provider::new(
            client.clone(),
            config.gamespot.base_url.as_deref(),
            gamespot_api_key,
            min_interval,
        ));
    }

    if config.youtube.enabled {
        match youtube_api_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => {
                let options = youtube::Options {
                    base_url: config.youtube.base_url.clone(),
                    transcript_url: config.youtube.transcript_url.clone(),
                    api_key: key.to_string(),
                    channels: config.youtube.channels.clone(),
                    min_duration: Duration::from_secs(config.youtube.min_duration_secs),
                    max_duration: Duration::from_secs(config.youtube.max_duration_secs),
                    min_interval,
                };
                aggregator.register_collector(youtube::Provider::new(client, options)?);
            }
            None => log::warn!(target: LOG_TARGET, "No YouTube API key provided, skipping YouTube"),
        }
    }

    log::debug!(target: LOG_TARGET, "Registered {} collectors", aggregator.collector_count());
    Ok(aggregator)
}

pub async fn process_collect<H: Host>(host: &mut H, args: &CollectArgs) -> Result<()> {
    init_logging(args.log_level);

    let game = args.game.trim();
    if game.is_empty() {
        let _ = writeln!(host.error(), "❌ A game name is required");
        host.exit(1);
        return Err(app_err!("a game name is required"));
    }

    let config = Config::load(Utf8Path::new("."), args.config.as_deref())?;

    if config.youtube.enabled && args.youtube_api_key.as_deref().is_none_or(|key| key.trim().is_empty()) {
        let _ = writeln!(
            host.error(),
            "Note: YouTube is skipped because no API key was given (use --youtube-api-key or YOUTUBE_API_KEY)"
        );
    }

    let aggregator = build_aggregator(&config, args.gamespot_api_key.as_deref(), args.youtube_api_key.as_deref())?;
    if aggregator.collector_count() == 0 {
        let _ = writeln!(host.error(), "Note: every source is disabled, the response will be empty");
    }

    let response = aggregator.collect_game_information(game).await;

    let json_to_stdout = args.json.as_deref().is_some_and(|path| path.as_str() == STDOUT_PATH);
    if let Some(path) = &args.json {
        let mut json_output = String::new();
        generate_json(&response, &mut json_output)?;

        if json_to_stdout {
            let _ = write!(host.output(), "{json_output}");
        } else {
            fs::write(path, json_output).into_app_err_with(|| format!("writing JSON report to '{path}'"))?;
            log::info!(target: LOG_TARGET, "Wrote JSON report to '{path}'");
        }
    }

    if args.console || args.json.is_none() {
        let mut console_output = String::new();
        generate_console(&response, args.color.use_colors_on_stdout(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    Ok(())
}
