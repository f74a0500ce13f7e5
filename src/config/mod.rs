//! Configuration model for codeprompt.
//!
//! This module defines the Config struct that represents `.codeprompt.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! and sensible defaults for optional fields. Values are checked by their
//! types during parsing: an unknown `log_level` is a parse error.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use operations::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use types::LogLevel;
