//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code, also used for usage errors.
pub const ERROR: i32 = 2;

/// Input closed while the session was being set up.
pub const INTERRUPTED: i32 = 130;
