//! Exit code constants for the codeprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown template kind)
//! - 2: Configuration or parameter file failure
//! - 3: I/O failure reading an input file

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unknown template kind.
pub const USER_ERROR: i32 = 1;

/// Config or params file could not be parsed or failed validation.
pub const CONFIG_FAILURE: i32 = 2;

/// An input file (template, selection, diagnostics) could not be read.
pub const IO_FAILURE: i32 = 3;
