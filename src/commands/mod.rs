//! Command-line interface and orchestration for game-intel
//!
//! This module implements the CLI commands and wires the configuration, the source
//! collectors, the aggregator, and the report generators into end-to-end workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **collect**: Query every enabled source for one game, then print or save the
//!   aggregate response
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file for syntax and value errors
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. The collect command:
//!
//! 1. Sets up logging and loads configuration
//! 2. Builds an HTTP client and one provider per enabled source
//! 3. Registers the providers with an aggregator and runs the query
//! 4. Generates the console and/or JSON reports
//!
//! All output goes through the [`Host`] abstraction so the commands can be exercised
//! in tests without touching the real terminal or terminating the process.

mod collect;
mod common;
mod host;
mod init;
mod run;
mod validate;

pub use collect::{CollectArgs, build_aggregator, process_collect};
pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
