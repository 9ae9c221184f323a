//! Handlers for the `xcode` subcommands.

use colored::Colorize;

use crate::cli::{OutputFormat, XcodeCommand};
use crate::config::types::Config;
use crate::error::Result;
use crate::xcodebuild::{self, XcodeBuildSettings, XcodeSettings};

use super::{effective_tool_path, finish};

pub fn handle_xcode(command: XcodeCommand, config: &Config) -> Result<()> {
    match command {
        XcodeCommand::Build {
            tool_path,
            xcode_verbose,
            check_first_launch_status,
            project,
            target,
            all_targets,
            workspace,
            scheme,
            configuration,
            xcconfig,
            arch,
            sdk,
            toolchain,
            destination,
            destination_timeout,
            parallelize_targets,
            jobs,
            dry_run,
            result_bundle_path,
            derived_data_path,
            archive_path,
            export_archive,
            export_options_plist,
            skip_unavailable_actions,
            archive,
            clean,
            settings,
        } => {
            let build_settings = XcodeBuildSettings {
                tool_path: effective_tool_path(tool_path, config.tools.xcodebuild.as_ref()),
                verbose: xcode_verbose,
                check_first_launch_status,
                project,
                target,
                all_targets,
                workspace,
                scheme,
                configuration,
                xcconfig,
                arch,
                sdk,
                toolchain,
                destination,
                destination_timeout,
                parallelize_targets,
                jobs,
                dry_run,
                result_bundle_path,
                derived_data_path,
                archive_path,
                export_archive,
                export_options_plist,
                skip_unavailable_actions,
                archive,
                clean,
                build_settings: settings,
            };

            let action = if build_settings.archive { "archive" } else { "build" };
            println!("🔨 Running xcodebuild {action}");

            let output = xcodebuild::build(&build_settings)?;
            finish("xcodebuild", &output)
        }

        XcodeCommand::Sdks { tool_path, format } => {
            let settings = XcodeSettings {
                tool_path: effective_tool_path(tool_path, config.tools.xcodebuild.as_ref()),
            };

            let sdks = xcodebuild::show_sdks(&settings)?;

            match format {
                OutputFormat::Table => {
                    if sdks.is_empty() {
                        println!("No SDKs reported");
                    } else {
                        println!("📱 Installed SDKs ({}):", sdks.len());
                        for sdk in &sdks {
                            println!("  {:<34} {}", sdk.display_name, sdk.sdk_value.cyan());
                        }
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&sdks)?);
                }
            }

            Ok(())
        }
    }
}
