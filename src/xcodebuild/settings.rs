//! Per-invocation settings for the xcodebuild driver.

use std::path::PathBuf;

/// Settings shared by every xcodebuild invocation.
#[derive(Debug, Default, Clone)]
pub struct XcodeSettings {
    /// Explicit path to the xcodebuild executable, overriding discovery.
    pub tool_path: Option<PathBuf>,
}

/// Settings for an `xcodebuild` build or archive run.
///
/// Each field maps 1:1 to a documented xcodebuild flag; `None`/`false`
/// means the flag is omitted. Key/value collections are ordered because
/// their order on the command line is significant to xcodebuild.
#[derive(Debug, Default, Clone)]
pub struct XcodeBuildSettings {
    /// Explicit path to the xcodebuild executable, overriding discovery.
    pub tool_path: Option<PathBuf>,
    /// `-verbose`: additional status output.
    pub verbose: bool,
    /// `-checkFirstLaunchStatus`: report pending first-launch tasks.
    pub check_first_launch_status: bool,
    /// `-project NAME`
    pub project: Option<String>,
    /// `-target NAME`
    pub target: Option<String>,
    /// `-alltargets`
    pub all_targets: bool,
    /// `-workspace PATH`
    pub workspace: Option<PathBuf>,
    /// `-scheme NAME`
    pub scheme: Option<String>,
    /// `-configuration NAME`
    pub configuration: Option<String>,
    /// `-xcconfig PATH`: build-settings override file.
    pub xcconfig: Option<PathBuf>,
    /// `-arch ARCH`
    pub arch: Option<String>,
    /// `-sdk NAME`: base SDK for the build.
    pub sdk: Option<String>,
    /// `-toolchain NAME`
    pub toolchain: Option<String>,
    /// `-destination key=value[,...]`, in insertion order.
    pub destination: Vec<(String, String)>,
    /// `-destination-timeout SECS`; only meaningful with a destination.
    pub destination_timeout: Option<u32>,
    /// `-parallelizeTargets`
    pub parallelize_targets: bool,
    /// `-jobs N`: maximum concurrent build operations.
    pub jobs: Option<u32>,
    /// `-dry-run`
    pub dry_run: bool,
    /// `-resultBundlePath PATH`
    pub result_bundle_path: Option<PathBuf>,
    /// `-derivedDataPath PATH`
    pub derived_data_path: Option<PathBuf>,
    /// `-archivePath PATH`
    pub archive_path: Option<PathBuf>,
    /// `-exportArchive`
    pub export_archive: bool,
    /// `-exportOptionsPlist PATH`
    pub export_options_plist: Option<PathBuf>,
    /// `-skipUnavailableActions`
    pub skip_unavailable_actions: bool,
    /// Run the `archive` action instead of `build`.
    pub archive: bool,
    /// Append the `clean` action.
    pub clean: bool,
    /// Trailing `KEY=VALUE` build-setting overrides, in insertion order.
    pub build_settings: Vec<(String, String)>,
}
