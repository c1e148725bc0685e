//! Stable exit codes for mdcat CLI commands.

/// Command succeeded. `combine` also exits with this when files were skipped.
pub const OK: i32 = 0;
/// Command failed: unwritable output, unreadable input, invalid manifest.
pub const INVALID: i32 = 1;
/// `mdcat check` found at least one listed file missing.
pub const MISSING: i32 = 2;
