//! Interaction with `kubectl`

use crate::command::run_command;
use crate::validation::validate_yaml_file;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::debug;

/// Substrings which mark apply output as failed wherever they occur
const FAILURE_INDICATORS: [&str; 6] = [
    "error",
    "failed",
    "invalid",
    "unable to",
    "forbidden",
    "unauthorized",
];

/// Status words which `kubectl apply` prints for every applied resource
const SUCCESS_INDICATORS: [&str; 3] = ["created", "configured", "unchanged"];

/// Decides if the given output of `kubectl apply` reports success.
///
/// Matching is case-insensitive. A single failing line fails the whole
/// output, even if other lines report success. Output without any known
/// status word is not considered successful.
pub fn is_apply_success(output: &str) -> bool {
    let output = output.to_lowercase();

    if output.trim().is_empty() {
        return false;
    }

    if output.lines().any(is_failure_line) {
        return false;
    }

    output.lines().any(is_success_line)
}

fn is_failure_line(line: &str) -> bool {
    FAILURE_INDICATORS
        .iter()
        .any(|indicator| line.contains(indicator))
        || line.trim_start().starts_with("warning")
        || is_not_found_message(line)
}

/// `not found` only counts if it follows a message head like
/// `Error from server:` and not e.g. as part of a resource name.
fn is_not_found_message(line: &str) -> bool {
    line.find("not found")
        .map_or(false, |position| line[..position].contains(':'))
}

fn is_success_line(line: &str) -> bool {
    line.split(|c: char| !c.is_alphanumeric() && c != '-' && c != '_')
        .any(|word| SUCCESS_INDICATORS.contains(&word))
}

/// Applies the manifest at `path` to the cluster of the given kubectl
/// context and returns the output of `kubectl`.
///
/// The manifest is validated first. The call fails if `kubectl` exits with
/// an error or if its output does not report success.
pub fn apply_file<P: AsRef<Path>>(context: &str, path: P) -> Result<String> {
    let path = path.as_ref();

    validate_yaml_file(path)
        .with_context(|| format!("Manifest [{}] cannot be applied", path.display()))?;

    let path_arg = path.to_string_lossy().into_owned();
    debug!(context, path = %path.display(), "Applying manifest");
    let output = run_command("kubectl", &["--context", context, "apply", "-f", path_arg.as_str()])?;

    if is_apply_success(&output) {
        Ok(output)
    } else {
        Err(anyhow!(
            "Manifest [{}] was not applied successfully: {}",
            path.display(),
            output.trim()
        ))
    }
}
