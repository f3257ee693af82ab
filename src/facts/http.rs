//! Shared HTTP plumbing for the source providers.

use crate::Result;
use core::time::Duration;
use ohno::{AppError, IntoAppError, app_err};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "      http";

/// Upper bound on a single request, including reading the body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Longest excerpt of an unexpected response body quoted in an error.
const MAX_ERROR_EXCERPT: usize = 200;

const USER_AGENT: &str = concat!("game-intel/", env!("CARGO_PKG_VERSION"));

/// Outcome of a GET that the caller may want to treat as something other than an error.
#[derive(Debug)]
pub enum Fetched<T> {
    Found(T),
    RateLimited { retry_after: Option<Duration> },
    NotFound,
}

pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .into_app_err("unable to create HTTP client")
}

/// Join `path` onto `base` and append `params` as an encoded query string.
pub fn endpoint<'a>(base: &str, path: &str, params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Url> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse_with_params(&joined, params).into_app_err_with(|| format!("invalid endpoint URL '{joined}'"))
}

/// Join `segment` onto `base` without adding a query string.
pub fn resource(base: &str, segment: &str) -> Result<Url> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), segment.trim_start_matches('/'));
    Url::parse(&joined).into_app_err_with(|| format!("invalid resource URL '{joined}'"))
}

/// Fetch `url` and decode its JSON body into `T`.
///
/// 429 and 404 are reported through [`Fetched`]; any other unsuccessful status is an error
/// quoting the upstream message when the body carries one.
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &Url, source: &str) -> Result<Fetched<T>> {
    // the query may carry an API key
    let location = format!("{}{}", url.host_str().unwrap_or_default(), url.path());
    log::debug!(target: LOG_TARGET, "Querying {source} at '{location}'");

    let response = client
        .get(url.clone())
        .send()
        .await
        .into_app_err_with(|| format!("could not send request to {source} at '{location}'"))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = parse_retry_after(response.headers());
        log::debug!(target: LOG_TARGET, "{source} rate limited the request to '{location}'");
        return Ok(Fetched::RateLimited { retry_after });
    }

    if status == StatusCode::NOT_FOUND {
        log::debug!(target: LOG_TARGET, "{source} has nothing at '{location}'");
        return Ok(Fetched::NotFound);
    }

    let body = response
        .text()
        .await
        .into_app_err_with(|| format!("could not read response body from {source}"))?;

    if !status.is_success() {
        return Err(app_err!("unexpected HTTP status {status} from {source}: {}", error_message(&body)));
    }

    let value = serde_json::from_str(&body).into_app_err_with(|| format!("invalid {source} response format"))?;
    Ok(Fetched::Found(value))
}

fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Text carried by every rate-limit error, see [`is_rate_limit_error`].
pub const RATE_LIMIT_EXCEEDED: &str = "API rate limit exceeded";

/// Error for a 429 that a collector does not absorb.
pub fn rate_limit_error(source: &str, retry_after: Option<Duration>) -> AppError {
    match retry_after {
        Some(delay) => app_err!("{source} {RATE_LIMIT_EXCEEDED}, retry after {}s", delay.as_secs()),
        None => app_err!("{source} {RATE_LIMIT_EXCEEDED}"),
    }
}

/// Whether `error` came from [`rate_limit_error`], possibly wrapped in more context.
#[must_use]
pub fn is_rate_limit_error(error: &AppError) -> bool {
    error.to_string().contains(RATE_LIMIT_EXCEEDED)
}

/// Pull a human-readable message out of an error body.
pub fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let error = &value["error"];
        if let Some(message) = error["message"].as_str().or_else(|| error.as_str()).or_else(|| value["message"].as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no details provided".to_string();
    }

    trimmed.chars().take(MAX_ERROR_EXCERPT).collect()
}
