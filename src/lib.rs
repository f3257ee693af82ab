//! game-intel crate
//!
//! Collects descriptive information about a video game from several independent web sources,
//! normalizes it into a common record shape, removes duplicates, and scores how much each
//! record can be trusted.
//!
//! # Module Organization
//!
//! - [`facts`]: Data model, source collectors, and the concurrent aggregator
//! - [`config`]: TOML configuration for the command-line tool
//! - [`commands`]: Command-line interface and orchestration
//! - [`reports`]: Console and JSON rendering of aggregate responses

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

pub mod config;

pub mod facts;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
