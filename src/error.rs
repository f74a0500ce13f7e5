//! Error types for codeprompt.
//!
//! The prompt engine itself cannot fail; these errors come from the layers
//! around it (config loading, input files, argument parsing).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for codeprompt operations.
#[derive(Error, Debug)]
pub enum CodepromptError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// The config file could not be read or parsed.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A params or diagnostics document had the wrong shape.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// An input file could not be read.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl CodepromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CodepromptError::UserError(_) => exit_codes::USER_ERROR,
            CodepromptError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            CodepromptError::InvalidParams(_) => exit_codes::CONFIG_FAILURE,
            CodepromptError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for codeprompt operations.
pub type Result<T> = std::result::Result<T, CodepromptError>;
