//! Logging setup for the codeprompt binary.
//!
//! Log output goes to stderr so that stdout carries only the rendered prompt.

use crate::config::LogLevel;
use crate::error::{CodepromptError, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Pick the effective level: the `--log-level` flag wins over the config.
pub fn effective_level(flag: Option<&str>, configured: LogLevel) -> Result<LogLevel> {
    match flag {
        Some(raw) => LogLevel::from_str(raw).ok_or_else(|| {
            CodepromptError::UserError(format!(
                "invalid --log-level '{}': expected one of {}",
                raw,
                LogLevel::NAMES.join(", ")
            ))
        }),
        None => Ok(configured),
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` directives are honored on top of `level`. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::from(level).into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}
