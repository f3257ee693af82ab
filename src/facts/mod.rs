//! Data collection and aggregation for video games
//!
//! This module gathers information about a game from several external sources: a wiki
//! (Fandom), a news site (IGN), a review site (GameSpot), and a video platform (YouTube).
//!
//! # Implementation Model
//!
//! Every source is wrapped in a provider that implements the [`Collector`] contract. A
//! provider owns its own [`RateLimiter`], fetches from its API through the typed schemas
//! in its `*_data` module, and returns validated [`GameDataEntry`] values.
//!
//! The [`Aggregator`] holds the registered collectors and runs them concurrently for each
//! query. A failing or stalled collector is logged and contributes nothing; the remaining
//! results are deduplicated by URL and then by content, and summarized into a
//! [`GameDataResponse`].
//!
//! The [`reliability`] module provides the generic domain-reputation scorer used by
//! providers that do not carry their own heuristic.

mod aggregator;
mod collector;
mod content_type;
mod dedup;
pub mod fandom;
mod game_data_entry;
mod game_data_response;
pub mod gamespot;
pub(crate) mod http;
pub mod ign;
mod rate_limiter;
pub mod reliability;
mod response_cache;
pub mod youtube;

pub use aggregator::{Aggregator, DEFAULT_COLLECTOR_TIMEOUT};
pub use collector::{Collector, ensure_entries_match};
pub use content_type::ContentType;
pub use dedup::remove_duplicates;
pub use game_data_entry::{AUTHOR, GameDataEntry, MAX_RELIABILITY, MIN_RELIABILITY, PUBLICATION_DATE, SECTION_TYPE, SiteSpecific, site_specific};
pub use game_data_response::{CollectionStats, GameDataResponse};
pub use http::{RATE_LIMIT_EXCEEDED, build_client as build_http_client, is_rate_limit_error};
pub use rate_limiter::{DEFAULT_MIN_INTERVAL, RateLimiter};
pub use response_cache::{ResponseCache, normalize_game_name};
