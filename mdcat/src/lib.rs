//! Ordered markdown file combiner.
//!
//! Concatenates a fixed, ordered list of files from one directory into a
//! single output file, closing each entry with a fence delimiter and blank
//! lines. Missing entries are reported and skipped.
//!
//! - **[`combine`]**: the single linear pass over the file sequence.
//! - **[`manifest`]**: the explicit configuration value (directory, output,
//!   file sequence) and its TOML form.

pub mod combine;
pub mod exit_codes;
pub mod logging;
pub mod manifest;
