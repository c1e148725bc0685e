//! Ordered markdown file combiner.
//!
//! Reads `mdcat.toml` (or the built-in Formik tutorial set when it is absent)
//! and concatenates the listed files into one markdown document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use mdcat::combine::{check, combine, missing_notice};
use mdcat::exit_codes;
use mdcat::logging;
use mdcat::manifest::{
    DEFAULT_MANIFEST, Manifest, ManifestOverrides, load_manifest, write_manifest,
};

#[derive(Parser)]
#[command(
    name = "mdcat",
    version,
    about = "Combine an ordered list of markdown files into one document"
)]
struct Cli {
    /// Manifest listing the input directory, output file and file sequence.
    #[arg(long, global = true, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Concatenate the listed files into the output file (overwriting it).
    Combine {
        /// Directory the file names are resolved against.
        #[arg(short, long)]
        input_dir: Option<PathBuf>,
        /// File to create or overwrite.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// File names in order; replaces the manifest sequence when given.
        files: Vec<String>,
    },
    /// Report listed files that are missing, without writing output.
    Check {
        /// Directory the file names are resolved against.
        #[arg(short, long)]
        input_dir: Option<PathBuf>,
        /// File names in order; replaces the manifest sequence when given.
        files: Vec<String>,
    },
    /// Write the default manifest if missing.
    Init {
        /// Overwrite an existing manifest.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Combine {
            input_dir,
            output,
            files,
        } => cmd_combine(
            &cli.manifest,
            ManifestOverrides {
                input_dir,
                output_file: output,
                files,
            },
        ),
        Command::Check { input_dir, files } => cmd_check(
            &cli.manifest,
            ManifestOverrides {
                input_dir,
                output_file: None,
                files,
            },
        ),
        Command::Init { force } => cmd_init(&cli.manifest, force),
    }
}

fn cmd_combine(manifest_path: &Path, overrides: ManifestOverrides) -> Result<i32> {
    let manifest = load_manifest(manifest_path)?.apply_overrides(overrides)?;
    info!(
        input_dir = %manifest.input_dir.display(),
        output_file = %manifest.output_file.display(),
        files = manifest.files.len(),
        "combining"
    );
    let report = combine(&manifest.input_dir, &manifest.output_file, &manifest.files)
        .context("combine markdown files")?;
    info!(
        written = report.written.len(),
        missing = report.missing.len(),
        "combine finished"
    );
    println!(
        "Combined markdown files into {}",
        report.output_file.display()
    );
    Ok(exit_codes::OK)
}

fn cmd_check(manifest_path: &Path, overrides: ManifestOverrides) -> Result<i32> {
    let manifest = load_manifest(manifest_path)?.apply_overrides(overrides)?;
    let report = check(&manifest.input_dir, &manifest.files);
    for name in &report.missing {
        println!("{}", missing_notice(name, &manifest.input_dir));
    }
    if report.is_complete() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::MISSING)
    }
}

fn cmd_init(manifest_path: &Path, force: bool) -> Result<i32> {
    if !force && manifest_path.exists() {
        info!(path = %manifest_path.display(), "manifest exists, leaving it");
        return Ok(exit_codes::OK);
    }
    write_manifest(manifest_path, &Manifest::default())
        .with_context(|| format!("write {}", manifest_path.display()))?;
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_combine_defaults() {
        let cli = Cli::parse_from(["mdcat", "combine"]);
        assert_eq!(cli.manifest, PathBuf::from(DEFAULT_MANIFEST));
        assert!(matches!(
            cli.command,
            Command::Combine {
                input_dir: None,
                output: None,
                ref files,
            } if files.is_empty()
        ));
    }

    #[test]
    fn parse_combine_overrides() {
        let cli = Cli::parse_from([
            "mdcat",
            "combine",
            "--input-dir",
            "docs",
            "-o",
            "All.md",
            "b.md",
            "a.md",
        ]);
        let Command::Combine {
            input_dir,
            output,
            files,
        } = cli.command
        else {
            panic!("expected combine");
        };
        assert_eq!(input_dir, Some(PathBuf::from("docs")));
        assert_eq!(output, Some(PathBuf::from("All.md")));
        assert_eq!(files, vec!["b.md", "a.md"]);
    }

    #[test]
    fn parse_global_manifest_after_subcommand() {
        let cli = Cli::parse_from(["mdcat", "check", "--manifest", "other.toml"]);
        assert_eq!(cli.manifest, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["mdcat", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }
}
