//! xcodebuild command assembly, execution, and `-showsdks` parsing.

use std::path::{Path, PathBuf};

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::invoke::Tool;
use crate::invoke::args::ArgumentBuilder;
use crate::invoke::locator;
use crate::invoke::process::{self, Invocation, ProcessOutput};

use super::settings::{XcodeBuildSettings, XcodeSettings};

// One `-showsdks` line: indented display name, then `-sdk <identifier>`.
// The exact shape is pinned by the golden fixtures under tests/fixtures.
static SDK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+(.+?)\s+-sdk\s+(.+?)\s*$").expect("hard-coded pattern"));

/// The xcodebuild tool identity.
pub struct XcodeBuild;

impl Tool for XcodeBuild {
    fn name(&self) -> &str {
        "xcodebuild"
    }

    fn executable_names(&self) -> &[&str] {
        &["xcodebuild"]
    }

    fn alternative_paths(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from("/usr/bin/xcodebuild"),
            PathBuf::from("/usr/local/bin/xcodebuild"),
            PathBuf::from("/Applications/Xcode.app/Contents/Developer/usr/bin/xcodebuild"),
        ]
    }
}

/// One installable SDK reported by `xcodebuild -showsdks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkDescriptor {
    /// Human-readable name, e.g. `iOS 16.0`.
    pub display_name: String,
    /// The `-sdk` value xcodebuild accepts, e.g. `iphoneos16.0`.
    pub sdk_value: String,
}

/// Run xcodebuild with the given settings.
pub fn build(settings: &XcodeBuildSettings) -> Result<ProcessOutput> {
    let exe = locator::locate(&XcodeBuild, settings.tool_path.as_deref())?;
    let args = build_args(settings)?;

    info!("xcodebuild {}", args.render_line());
    process::run(&Invocation::new(exe, args))
}

/// List the SDKs available on this machine (`xcodebuild -showsdks`).
pub fn show_sdks(settings: &XcodeSettings) -> Result<Vec<SdkDescriptor>> {
    let exe = locator::locate(&XcodeBuild, settings.tool_path.as_deref())?;

    let mut args = ArgumentBuilder::new();
    args.append("-showsdks");

    let output = process::run(&Invocation::new(exe, args).capture_stdout())?;
    Ok(parse_sdks(&output.stdout))
}

/// Extract SDK descriptors from `-showsdks` output lines.
///
/// Lines that do not carry a `-sdk` token (section headers, blanks) are
/// skipped; matches are yielded in input order.
pub fn parse_sdks<I>(lines: I) -> Vec<SdkDescriptor>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            SDK_LINE.captures(line.as_ref()).map(|captures| SdkDescriptor {
                display_name: captures[1].to_string(),
                sdk_value: captures[2].to_string(),
            })
        })
        .collect()
}

fn build_args(settings: &XcodeBuildSettings) -> Result<ArgumentBuilder> {
    let mut builder = ArgumentBuilder::new();

    if settings.verbose {
        builder.append("-verbose");
    }
    if settings.check_first_launch_status {
        builder.append("-checkFirstLaunchStatus");
    }
    if let Some(project) = &settings.project {
        builder.append("-project");
        builder.append(project);
    }
    if let Some(target) = &settings.target {
        builder.append("-target");
        builder.append(target);
    }
    if settings.all_targets {
        builder.append("-alltargets");
    }
    if let Some(workspace) = &settings.workspace {
        builder.append("-workspace");
        append_absolute(&mut builder, workspace)?;
    }
    if let Some(scheme) = &settings.scheme {
        builder.append("-scheme");
        builder.append(scheme);
    }
    if let Some(configuration) = &settings.configuration {
        builder.append("-configuration");
        builder.append(configuration);
    }
    if let Some(xcconfig) = &settings.xcconfig {
        builder.append("-xcconfig");
        append_absolute(&mut builder, xcconfig)?;
    }
    if let Some(arch) = &settings.arch {
        builder.append("-arch");
        builder.append(arch);
    }
    if let Some(sdk) = &settings.sdk {
        builder.append("-sdk");
        builder.append(sdk);
    }
    if let Some(toolchain) = &settings.toolchain {
        builder.append("-toolchain");
        builder.append(toolchain);
    }
    if !settings.destination.is_empty() {
        builder.append("-destination");
        builder.append(join_pairs(&settings.destination, ","));

        if let Some(timeout) = settings.destination_timeout {
            builder.append("-destination-timeout");
            builder.append(timeout.to_string());
        }
    }
    if settings.parallelize_targets {
        builder.append("-parallelizeTargets");
    }
    if let Some(jobs) = settings.jobs {
        builder.append("-jobs");
        builder.append(jobs.to_string());
    }
    if settings.dry_run {
        builder.append("-dry-run");
    }
    if let Some(path) = &settings.result_bundle_path {
        builder.append("-resultBundlePath");
        append_absolute(&mut builder, path)?;
    }
    if let Some(path) = &settings.derived_data_path {
        builder.append("-derivedDataPath");
        append_absolute(&mut builder, path)?;
    }
    if let Some(path) = &settings.archive_path {
        builder.append("-archivePath");
        append_absolute(&mut builder, path)?;
    }
    if settings.export_archive {
        builder.append("-exportArchive");
    }
    if let Some(path) = &settings.export_options_plist {
        builder.append("-exportOptionsPlist");
        append_absolute(&mut builder, path)?;
    }
    if settings.skip_unavailable_actions {
        builder.append("-skipUnavailableActions");
    }

    builder.append(if settings.archive { "archive" } else { "build" });
    if settings.clean {
        builder.append("clean");
    }

    for (key, value) in &settings.build_settings {
        builder.append(format!("{key}={value}"));
    }

    Ok(builder)
}

fn append_absolute(builder: &mut ArgumentBuilder, path: &Path) -> Result<()> {
    let absolute = std::path::absolute(path)?;
    builder.append(absolute.display().to_string());
    Ok(())
}

fn join_pairs(pairs: &[(String, String)], separator: &str) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(separator)
}
