//! Combine manifest stored as TOML (default `mdcat.toml`).
//!
//! The manifest names the input directory, the output file, and the ordered
//! file sequence. It is loaded once per run and passed explicitly into the
//! combiner.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Manifest file name looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "mdcat.toml";

const FORMIK_INPUT_DIR: &str = "FormikInputTutorials";
const FORMIK_OUTPUT: &str = "Formik.md";
const FORMIK_FILES: [&str; 20] = [
    "Formik_Field.md",
    "Formik_TextInput.md",
    "Formik_EmailInput.md",
    "Formik_PasswordInput.md",
    "Formik_NumberInput.md",
    "Formik_CheckboxInput.md",
    "Formik_RadioInput.md",
    "Formik_SelectInput.md",
    "Formik_TextAreaInput.md",
    "Formik_DateInput.md",
    "Formik_RangeInput.md",
    "Formik_SearchInput.md",
    "Formik_TimeInput.md",
    "Formik_ColorInput.md",
    "Formik_FileInput.md",
    "Formik_MonthInput.md",
    "Formik_WeekInput.md",
    "Formik_TelephoneInput.md",
    "Formik_UrlInput.md",
    "Formik_HiddenInput.md",
];

/// Input directory, output file and ordered file sequence for one run.
///
/// Missing keys fall back to the built-in Formik tutorial set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Manifest {
    /// Directory every entry in `files` is resolved against. Empty means the
    /// working directory.
    pub input_dir: PathBuf,

    /// File created (or truncated) by `combine`.
    pub output_file: PathBuf,

    /// File names in concatenation order. Duplicates are allowed.
    pub files: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(FORMIK_INPUT_DIR),
            output_file: PathBuf::from(FORMIK_OUTPUT),
            files: FORMIK_FILES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Command-line replacements for manifest fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    /// Replaces the whole sequence when non-empty.
    pub files: Vec<String>,
}

impl Manifest {
    pub fn validate(&self) -> Result<()> {
        if self.output_file.as_os_str().is_empty() {
            bail!("output_file must be non-empty");
        }
        for (index, name) in self.files.iter().enumerate() {
            if name.is_empty() {
                bail!("files[{}] must be non-empty", index);
            }
        }
        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply_overrides(mut self, overrides: ManifestOverrides) -> Result<Self> {
        if let Some(input_dir) = overrides.input_dir {
            self.input_dir = input_dir;
        }
        if let Some(output_file) = overrides.output_file {
            self.output_file = output_file;
        }
        if !overrides.files.is_empty() {
            self.files = overrides.files;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Load a manifest from a TOML file.
///
/// If the file is missing, returns `Manifest::default()`.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        let manifest = Manifest::default();
        manifest.validate()?;
        return Ok(manifest);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let manifest: Manifest =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    manifest
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(manifest)
}

/// Atomically write a manifest to disk (temp file + rename).
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    manifest.validate()?;
    let mut buf = toml::to_string_pretty(manifest).context("serialize manifest toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp manifest {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace manifest {}", path.display()))?;
    Ok(())
}
