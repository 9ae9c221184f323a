use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration loaded from `.xctools.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
}

/// Default override paths for the wrapped executables.
///
/// A command-line `--tool-path` beats these; these beat built-in search.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to the `pod` executable.
    pub pod: Option<PathBuf>,
    /// Path to the `xcodebuild` executable.
    pub xcodebuild: Option<PathBuf>,
}
