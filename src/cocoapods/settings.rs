//! Per-invocation settings for the `pod` tool.
//!
//! Constructed fresh by the caller for every call; nothing here is shared
//! or cached across invocations.

use std::path::PathBuf;

/// Settings shared by every `pod` invocation.
#[derive(Debug, Default, Clone)]
pub struct PodSettings {
    /// Explicit path to the `pod` executable, overriding discovery.
    pub tool_path: Option<PathBuf>,
}

/// Settings for `pod install`.
#[derive(Debug, Default, Clone)]
pub struct PodInstallSettings {
    /// Explicit path to the `pod` executable, overriding discovery.
    pub tool_path: Option<PathBuf>,
    /// Skip cleaning of pod sources. Removed in CocoaPods 1.0.
    pub no_clean: bool,
    /// Skip integrating the pods into the Xcode project. Removed in
    /// CocoaPods 1.0 in favor of a Podfile directive.
    pub no_integrate: bool,
    /// Skip the spec-repo refresh before resolving. Removed in CocoaPods
    /// 1.0 for `install`.
    pub no_repo_update: bool,
    /// Silence all pod output.
    pub silent: bool,
    /// Ask pod for verbose output.
    pub verbose: bool,
    /// Strip ANSI escape sequences from pod output.
    pub no_ansi: bool,
}

impl PodInstallSettings {
    pub(crate) fn probe(&self) -> PodSettings {
        PodSettings {
            tool_path: self.tool_path.clone(),
        }
    }
}

/// Settings for `pod update`.
///
/// Unlike `install`, `--no-repo-update` stayed valid for `update` across
/// the 1.0 boundary, so only the clean/integrate flags are gated.
#[derive(Debug, Default, Clone)]
pub struct PodUpdateSettings {
    /// Explicit path to the `pod` executable, overriding discovery.
    pub tool_path: Option<PathBuf>,
    /// Skip cleaning of pod sources. Removed in CocoaPods 1.0.
    pub no_clean: bool,
    /// Skip integrating the pods into the Xcode project. Removed in
    /// CocoaPods 1.0 in favor of a Podfile directive.
    pub no_integrate: bool,
    /// Skip the spec-repo refresh before resolving.
    pub no_repo_update: bool,
    /// Silence all pod output.
    pub silent: bool,
    /// Ask pod for verbose output.
    pub verbose: bool,
    /// Strip ANSI escape sequences from pod output.
    pub no_ansi: bool,
}

impl PodUpdateSettings {
    pub(crate) fn probe(&self) -> PodSettings {
        PodSettings {
            tool_path: self.tool_path.clone(),
        }
    }
}
