//! Stable exit codes for tally CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, invalid config, or any other error.
pub const INVALID: i32 = 1;
/// No input values were provided (nothing to accumulate).
pub const EMPTY: i32 = 2;
