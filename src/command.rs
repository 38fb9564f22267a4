//! Execution of the external tools which the test suite drives

use anyhow::{anyhow, bail, Result};
use std::env;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Tools which must be installed to run the test suite
pub const REQUIRED_TOOLS: [&str; 7] = ["docker", "kind", "az", "oc", "helm", "git", "kubectl"];

/// Checks if the given command can be executed.
///
/// A name containing a path separator is checked directly, otherwise it is
/// searched in `PATH`.
pub fn command_exists(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    if name.contains('/') {
        return is_executable(Path::new(name));
    }

    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| is_executable(&dir.join(name))))
        .unwrap_or(false)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Checks that all given tools are installed.
///
/// The error lists every missing tool.
pub fn check_prerequisites(tools: &[&str]) -> Result<()> {
    let missing: Vec<&str> = tools
        .iter()
        .copied()
        .filter(|tool| !command_exists(tool))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Required tools are not installed: {}", missing.join(", ")))
    }
}

/// Runs the given program and returns its standard output followed by its
/// standard error.
///
/// A non-zero exit status is returned as an error containing the output.
pub fn run_command<S>(program: &str, args: &[S]) -> Result<String>
where
    S: AsRef<OsStr>,
{
    let command_line = std::iter::once(program.to_owned())
        .chain(args.iter().map(|arg| {
            let arg: &OsStr = arg.as_ref();
            arg.to_string_lossy().into_owned()
        }))
        .collect::<Vec<_>>()
        .join(" ");
    debug!(command = command_line.as_str(), "Running command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|error| anyhow!("Command [{}] could not be started: {}", program, error))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        bail!(
            "Command [{}] failed with {}: {}",
            command_line,
            output.status,
            combined.trim()
        );
    }

    Ok(combined)
}
