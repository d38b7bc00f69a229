//! Exit code constants for the promptfill CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, malformed JSON/YAML)
//! - 2: Validation failure (missing placeholder value, rejected parameters)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or malformed input documents.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a placeholder has no value or parameters were rejected.
pub const VALIDATION_FAILURE: i32 = 2;
