//! Single-pass concatenation of an ordered file sequence.
//!
//! Each existing entry is copied verbatim into the output, followed by
//! [`DELIMITER`] and [`SPACING`]. Entries that do not resolve to a regular
//! file are reported on the console and skipped. Any other I/O failure aborts
//! the run; whatever was already written to the output stays on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Fence line written after every combined file.
pub const DELIMITER: &str = "```\n";
/// Blank lines written after the delimiter.
pub const SPACING: &str = "\n\n\n\n";

/// Outcome of one [`combine`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineReport {
    pub output_file: PathBuf,
    /// Names appended to the output, in sequence order.
    pub written: Vec<String>,
    /// Names skipped because they did not resolve to a file, in sequence order.
    pub missing: Vec<String>,
}

/// Presence of each listed file, without producing output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl CheckReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Console line emitted for a listed file that does not exist.
pub fn missing_notice(name: &str, input_dir: &Path) -> String {
    format!("File {} not found in {}", name, input_dir.display())
}

/// Combine `files` from `input_dir` into `output_file`, reporting missing
/// entries on stdout.
pub fn combine(input_dir: &Path, output_file: &Path, files: &[String]) -> Result<CombineReport> {
    let stdout = io::stdout();
    let mut console = stdout.lock();
    combine_with_console(input_dir, output_file, files, &mut console)
}

/// Same as [`combine`], writing missing-file notices to `console`.
///
/// The output is truncated before the first entry is read, so an empty
/// sequence (or one where every entry is missing) leaves an empty file.
pub fn combine_with_console<W: Write>(
    input_dir: &Path,
    output_file: &Path,
    files: &[String],
    console: &mut W,
) -> Result<CombineReport> {
    let output = File::create(output_file)
        .with_context(|| format!("create output {}", output_file.display()))?;
    let mut writer = BufWriter::new(output);
    let mut report = CombineReport {
        output_file: output_file.to_path_buf(),
        written: Vec::new(),
        missing: Vec::new(),
    };

    for name in files {
        let Some(path) = resolve(input_dir, name) else {
            warn!(name = %name, input_dir = %input_dir.display(), "input file missing");
            writeln!(console, "{}", missing_notice(name, input_dir))
                .context("write missing-file notice")?;
            report.missing.push(name.clone());
            continue;
        };
        let bytes = append_entry(&mut writer, &path, output_file)?;
        debug!(name = %name, bytes, "appended input file");
        report.written.push(name.clone());
    }

    writer
        .flush()
        .with_context(|| format!("flush output {}", output_file.display()))?;
    Ok(report)
}

/// Resolve every name the way [`combine`] does and split by presence.
pub fn check(input_dir: &Path, files: &[String]) -> CheckReport {
    let mut report = CheckReport::default();
    for name in files {
        match resolve(input_dir, name) {
            Some(_) => report.present.push(name.clone()),
            None => report.missing.push(name.clone()),
        }
    }
    report
}

fn resolve(input_dir: &Path, name: &str) -> Option<PathBuf> {
    let path = input_dir.join(name);
    path.is_file().then_some(path)
}

/// Copy one input file followed by the delimiter and spacing.
///
/// The input handle is closed before returning.
fn append_entry<W: Write>(writer: &mut W, path: &Path, output_file: &Path) -> Result<u64> {
    let mut input = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let bytes = io::copy(&mut input, writer).with_context(|| format!("read {}", path.display()))?;
    writer
        .write_all(DELIMITER.as_bytes())
        .and_then(|()| writer.write_all(SPACING.as_bytes()))
        .with_context(|| format!("write {}", output_file.display()))?;
    Ok(bytes)
}
