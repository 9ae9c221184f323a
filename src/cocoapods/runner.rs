//! `pod` command assembly and execution.
//!
//! Argument order matches what CocoaPods documents: the verb first, then
//! version-gated cleanup flags, then verbosity flags, then the project
//! directory.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;
use crate::invoke::Tool;
use crate::invoke::args::ArgumentBuilder;
use crate::invoke::gate::{CapabilityGate, FlagRule};
use crate::invoke::locator;
use crate::invoke::process::{self, Invocation, ProcessOutput};
use crate::invoke::version::ToolVersion;

use super::settings::{PodInstallSettings, PodSettings, PodUpdateSettings};

// CocoaPods 1.0 dropped the pre-1.0 cleanup flags; they became Podfile
// directives.
const POD_1_0: ToolVersion = ToolVersion::new(1, 0);

const INTEGRATE_GUIDANCE: &str =
    "Use `install! 'cocoapods', :integrate_targets => false` in your Podfile instead";

const INSTALL_GATE: CapabilityGate = CapabilityGate::new(
    "CocoaPods",
    &[
        FlagRule {
            flag: "--no-clean",
            removed_in: POD_1_0,
            guidance: None,
        },
        FlagRule {
            flag: "--no-integrate",
            removed_in: POD_1_0,
            guidance: Some(INTEGRATE_GUIDANCE),
        },
        FlagRule {
            flag: "--no-repo-update",
            removed_in: POD_1_0,
            guidance: None,
        },
    ],
);

// `pod update` kept --no-repo-update past 1.0.
const UPDATE_GATE: CapabilityGate = CapabilityGate::new(
    "CocoaPods",
    &[
        FlagRule {
            flag: "--no-clean",
            removed_in: POD_1_0,
            guidance: None,
        },
        FlagRule {
            flag: "--no-integrate",
            removed_in: POD_1_0,
            guidance: Some(INTEGRATE_GUIDANCE),
        },
    ],
);

/// The CocoaPods tool identity.
pub struct CocoaPods;

impl Tool for CocoaPods {
    fn name(&self) -> &str {
        "CocoaPods"
    }

    fn executable_names(&self) -> &[&str] {
        &["pod"]
    }

    fn alternative_paths(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from("/usr/local/bin/pod"),
            PathBuf::from("/usr/bin/pod"),
        ]
    }
}

/// Run `pod install` for the given project directory.
///
/// The installed CocoaPods version is probed first so pre-1.0 cleanup
/// flags can be withheld (with an advisory) on newer installs.
pub fn install(
    project_dir: Option<&Path>,
    settings: &PodInstallSettings,
) -> Result<ProcessOutput> {
    let exe = locator::locate(&CocoaPods, settings.tool_path.as_deref())?;
    let detected = version(&settings.probe())?;

    let (args, advisories) = install_args(project_dir, settings, detected.as_ref())?;
    for advisory in &advisories {
        warn!("{advisory}");
    }

    info!("pod {}", args.render_line());
    process::run(&Invocation::new(exe, args))
}

/// Run `pod update`, optionally restricted to specific pods.
pub fn update(
    project_dir: Option<&Path>,
    pod_names: &[String],
    settings: &PodUpdateSettings,
) -> Result<ProcessOutput> {
    let exe = locator::locate(&CocoaPods, settings.tool_path.as_deref())?;
    let detected = version(&settings.probe())?;

    let (args, advisories) = update_args(project_dir, pod_names, settings, detected.as_ref())?;
    for advisory in &advisories {
        warn!("{advisory}");
    }

    info!("pod {}", args.render_line());
    process::run(&Invocation::new(exe, args))
}

/// `pod --version`, parsed from the first output line carrying a version.
///
/// Returns `Ok(None)` when the tool prints nothing parseable; callers
/// treat that as "assume an old install".
pub fn version(settings: &PodSettings) -> Result<Option<ToolVersion>> {
    let exe = locator::locate(&CocoaPods, settings.tool_path.as_deref())?;

    let mut args = ArgumentBuilder::new();
    args.append("--version");

    let output = process::run(&Invocation::new(exe, args).capture_stdout())?;
    Ok(ToolVersion::first_in_lines(&output.stdout))
}

/// Refresh the local CocoaPods spec repos (`pod repo update`).
pub fn repo_update(settings: &PodSettings) -> Result<ProcessOutput> {
    let exe = locator::locate(&CocoaPods, settings.tool_path.as_deref())?;

    let mut args = ArgumentBuilder::new();
    args.append("repo");
    args.append("update");

    info!("pod {}", args.render_line());
    process::run(&Invocation::new(exe, args))
}

fn install_args(
    project_dir: Option<&Path>,
    settings: &PodInstallSettings,
    version: Option<&ToolVersion>,
) -> Result<(ArgumentBuilder, Vec<String>)> {
    let mut builder = ArgumentBuilder::new();
    builder.append("install");

    let mut requested: Vec<&'static str> = Vec::new();
    if settings.no_clean {
        requested.push("--no-clean");
    }
    if settings.no_integrate {
        requested.push("--no-integrate");
    }
    if settings.no_repo_update {
        requested.push("--no-repo-update");
    }

    let outcome = INSTALL_GATE.classify(version, &requested);
    for flag in &outcome.accepted {
        builder.append(*flag);
    }

    append_common_flags(&mut builder, settings.silent, settings.verbose, settings.no_ansi);
    append_project_directory(&mut builder, project_dir)?;

    Ok((builder, outcome.advisories))
}

fn update_args(
    project_dir: Option<&Path>,
    pod_names: &[String],
    settings: &PodUpdateSettings,
    version: Option<&ToolVersion>,
) -> Result<(ArgumentBuilder, Vec<String>)> {
    let mut builder = ArgumentBuilder::new();
    builder.append("update");

    for name in pod_names {
        builder.append(name);
    }

    let mut requested: Vec<&'static str> = Vec::new();
    if settings.no_clean {
        requested.push("--no-clean");
    }
    if settings.no_integrate {
        requested.push("--no-integrate");
    }

    let outcome = UPDATE_GATE.classify(version, &requested);
    for flag in &outcome.accepted {
        builder.append(*flag);
    }

    if settings.no_repo_update {
        builder.append("--no-repo-update");
    }

    append_common_flags(&mut builder, settings.silent, settings.verbose, settings.no_ansi);
    append_project_directory(&mut builder, project_dir)?;

    Ok((builder, outcome.advisories))
}

fn append_common_flags(builder: &mut ArgumentBuilder, silent: bool, verbose: bool, no_ansi: bool) {
    if silent {
        builder.append("--silent");
    }
    if verbose {
        builder.append("--verbose");
    }
    if no_ansi {
        builder.append("--no-ansi");
    }
}

fn append_project_directory(builder: &mut ArgumentBuilder, project_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = project_dir {
        let absolute = std::path::absolute(dir)?;
        builder.append(format!("--project-directory={}", absolute.display()));
    }
    Ok(())
}
