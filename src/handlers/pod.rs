//! Handlers for the `pod` subcommands.

use crate::cli::{OutputFormat, PodCommand};
use crate::cocoapods::{self, PodInstallSettings, PodSettings, PodUpdateSettings};
use crate::config::types::Config;
use crate::error::Result;

use super::{effective_tool_path, finish};

pub fn handle_pod(command: PodCommand, config: &Config) -> Result<()> {
    match command {
        PodCommand::Install {
            project_dir,
            tool_path,
            no_clean,
            no_integrate,
            no_repo_update,
            silent,
            pod_verbose,
            no_ansi,
        } => {
            let settings = PodInstallSettings {
                tool_path: effective_tool_path(tool_path, config.tools.pod.as_ref()),
                no_clean,
                no_integrate,
                no_repo_update,
                silent,
                verbose: pod_verbose,
                no_ansi,
            };

            match &project_dir {
                Some(dir) => println!("📦 Running pod install in {}", dir.display()),
                None => println!("📦 Running pod install"),
            }

            let output = cocoapods::install(project_dir.as_deref(), &settings)?;
            finish("pod install", &output)
        }

        PodCommand::Update {
            project_dir,
            pods,
            tool_path,
            no_clean,
            no_integrate,
            no_repo_update,
            silent,
            pod_verbose,
            no_ansi,
        } => {
            let settings = PodUpdateSettings {
                tool_path: effective_tool_path(tool_path, config.tools.pod.as_ref()),
                no_clean,
                no_integrate,
                no_repo_update,
                silent,
                verbose: pod_verbose,
                no_ansi,
            };

            if pods.is_empty() {
                println!("📦 Running pod update for all pods");
            } else {
                println!("📦 Running pod update for: {}", pods.join(", "));
            }

            let output = cocoapods::update(project_dir.as_deref(), &pods, &settings)?;
            finish("pod update", &output)
        }

        PodCommand::Version { tool_path, format } => {
            let settings = PodSettings {
                tool_path: effective_tool_path(tool_path, config.tools.pod.as_ref()),
            };

            let version = cocoapods::version(&settings)?;

            match format {
                OutputFormat::Table => match version {
                    Some(v) => println!("CocoaPods {v}"),
                    None => println!("CocoaPods did not report a parseable version"),
                },
                OutputFormat::Json => {
                    let payload = serde_json::json!({ "version": version });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }

            Ok(())
        }

        PodCommand::RepoUpdate { tool_path } => {
            let settings = PodSettings {
                tool_path: effective_tool_path(tool_path, config.tools.pod.as_ref()),
            };

            println!("📦 Updating CocoaPods spec repos");
            let output = cocoapods::repo_update(&settings)?;
            finish("pod repo update", &output)
        }
    }
}
