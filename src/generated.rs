//! Checks of the infrastructure files created by the generation script

use crate::result::TestResult;
use crate::validation::validate_yaml_file;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files which the generation script writes into the output directory
pub const GENERATED_FILES: [&str; 3] = ["credentials.yaml", "is.yaml", "aro.yaml"];

/// Returns the paths of the expected generated files in `dir`.
pub fn generated_file_paths(dir: &Path) -> Vec<PathBuf> {
    GENERATED_FILES.iter().map(|file| dir.join(file)).collect()
}

/// Verifies that `dir` contains all generated files and that every one of
/// them is a valid YAML file with data.
///
/// All files are checked; the first failure is returned.
pub fn verify_generated_files(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("Output directory [{}] does not exist", dir.display());
    }

    let mut result = TestResult::default();
    for path in generated_file_paths(dir) {
        let validation = validate_yaml_file(&path);
        debug!(path = %path.display(), valid = validation.is_ok(), "Generated file checked");
        result.combine(&validation);
    }

    result.into()
}
