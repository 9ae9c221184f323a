//! Executable resolution for wrapped tools.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use super::Tool;
use crate::error::{Result, XcToolsError};

/// Resolve the executable to invoke for `tool`.
///
/// Precedence: explicit override path, then each alternative path in listed
/// order, then a scan of the environment search path for the tool's
/// executable names. The first candidate that exists and is executable wins.
/// No version probe happens here; the resolved binary is trusted to be the
/// right tool.
pub fn locate(tool: &dyn Tool, override_path: Option<&Path>) -> Result<PathBuf> {
    let mut searched = Vec::new();

    if let Some(path) = override_path {
        if is_executable(path) {
            debug!(
                "{} resolved via explicit override: {}",
                tool.name(),
                path.display()
            );
            return Ok(path.to_path_buf());
        }
        searched.push(path.to_path_buf());
    }

    for candidate in tool.alternative_paths() {
        if is_executable(&candidate) {
            debug!("{} resolved at {}", tool.name(), candidate.display());
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    if let Some(found) = scan_search_path(tool) {
        return Ok(found);
    }
    for name in tool.executable_names() {
        searched.push(PathBuf::from(format!("$PATH/{}", executable_file_name(name))));
    }

    Err(XcToolsError::ToolNotFound {
        tool: tool.name().to_string(),
        searched,
    })
}

fn scan_search_path(tool: &dyn Tool) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;

    for dir in env::split_paths(&path_var) {
        for name in tool.executable_names() {
            let candidate = dir.join(executable_file_name(name));
            if is_executable(&candidate) {
                debug!(
                    "{} found on search path at {}",
                    tool.name(),
                    candidate.display()
                );
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(windows)]
fn executable_file_name(name: &str) -> String {
    format!("{name}.exe")
}

#[cfg(not(windows))]
fn executable_file_name(name: &str) -> String {
    name.to_string()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
