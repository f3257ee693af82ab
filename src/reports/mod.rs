//! Report generation for aggregate game responses
//!
//! Both generators take a [`GameDataResponse`](crate::facts::GameDataResponse) and write
//! into any `core::fmt::Write` sink, so callers decide whether output lands on a
//! terminal, in a file, or in a test buffer.
//!
//! - **Console**: a human-readable summary with optional ANSI colors
//! - **JSON**: the full response, pretty-printed

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
