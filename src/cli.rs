use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xc-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive CocoaPods and xcodebuild from one CLI")]
#[command(
    long_about = "A command-line front end for the two Apple build tools: the CocoaPods dependency manager (pod) and the Xcode build-toolchain driver (xcodebuild). Locates the installed executables, translates typed options into the documented command-line flags, and parses version and SDK listings back into structured output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CocoaPods dependencies for an Xcode project
    #[command(subcommand)]
    Pod(PodCommand),

    /// Drive the xcodebuild toolchain
    #[command(subcommand)]
    Xcode(XcodeCommand),
}

#[derive(Subcommand)]
pub enum PodCommand {
    /// Run `pod install` for a project directory
    Install {
        /// Project directory containing the Podfile
        #[arg(value_name = "PROJECT_DIR")]
        project_dir: Option<PathBuf>,

        /// Explicit path to the pod executable
        #[arg(long, value_name = "PATH")]
        tool_path: Option<PathBuf>,

        /// Skip cleaning of pod sources (CocoaPods < 1.0 only)
        #[arg(long)]
        no_clean: bool,

        /// Skip Xcode project integration (CocoaPods < 1.0 only)
        #[arg(long)]
        no_integrate: bool,

        /// Skip the spec-repo refresh before resolving
        #[arg(long)]
        no_repo_update: bool,

        /// Silence all pod output
        #[arg(long)]
        silent: bool,

        /// Ask pod for verbose output
        #[arg(long = "pod-verbose")]
        pod_verbose: bool,

        /// Strip ANSI escape sequences from pod output
        #[arg(long)]
        no_ansi: bool,
    },

    /// Run `pod update`, optionally restricted to specific pods
    Update {
        /// Project directory containing the Podfile
        #[arg(value_name = "PROJECT_DIR")]
        project_dir: Option<PathBuf>,

        /// Pod names to update; all pods when omitted
        #[arg(value_name = "POD")]
        pods: Vec<String>,

        /// Explicit path to the pod executable
        #[arg(long, value_name = "PATH")]
        tool_path: Option<PathBuf>,

        /// Skip cleaning of pod sources (CocoaPods < 1.0 only)
        #[arg(long)]
        no_clean: bool,

        /// Skip Xcode project integration (CocoaPods < 1.0 only)
        #[arg(long)]
        no_integrate: bool,

        /// Skip the spec-repo refresh before resolving
        #[arg(long)]
        no_repo_update: bool,

        /// Silence all pod output
        #[arg(long)]
        silent: bool,

        /// Ask pod for verbose output
        #[arg(long = "pod-verbose")]
        pod_verbose: bool,

        /// Strip ANSI escape sequences from pod output
        #[arg(long)]
        no_ansi: bool,
    },

    /// Print the installed CocoaPods version
    Version {
        /// Explicit path to the pod executable
        #[arg(long, value_name = "PATH")]
        tool_path: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Refresh the local CocoaPods spec repos (`pod repo update`)
    RepoUpdate {
        /// Explicit path to the pod executable
        #[arg(long, value_name = "PATH")]
        tool_path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum XcodeCommand {
    /// Run xcodebuild with the given settings
    Build {
        /// Explicit path to the xcodebuild executable
        #[arg(long, value_name = "PATH")]
        tool_path: Option<PathBuf>,

        /// Pass -verbose to xcodebuild
        #[arg(long = "xcode-verbose")]
        xcode_verbose: bool,

        /// Check if any first-launch tasks need to be performed
        #[arg(long)]
        check_first_launch_status: bool,

        /// Build the given project
        #[arg(long, value_name = "NAME")]
        project: Option<String>,

        /// Build the given target
        #[arg(long, value_name = "NAME")]
        target: Option<String>,

        /// Build all targets
        #[arg(long)]
        all_targets: bool,

        /// Build the given workspace
        #[arg(short, long, value_name = "PATH")]
        workspace: Option<PathBuf>,

        /// Build the given scheme
        #[arg(short, long, value_name = "NAME")]
        scheme: Option<String>,

        /// Build configuration to use for each target
        #[arg(long, value_name = "NAME")]
        configuration: Option<String>,

        /// Apply the build settings in this file as overrides
        #[arg(long, value_name = "PATH")]
        xcconfig: Option<PathBuf>,

        /// Build each target for the given architecture
        #[arg(long, value_name = "ARCH")]
        arch: Option<String>,

        /// Base SDK for the build
        #[arg(long, value_name = "NAME")]
        sdk: Option<String>,

        /// Use the given toolchain
        #[arg(long, value_name = "NAME")]
        toolchain: Option<String>,

        /// Destination device description, as KEY=VALUE (repeatable)
        #[arg(long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
        destination: Vec<(String, String)>,

        /// Seconds to wait while searching for the destination device
        #[arg(long, value_name = "SECS")]
        destination_timeout: Option<u32>,

        /// Build independent targets in parallel
        #[arg(long)]
        parallelize_targets: bool,

        /// Maximum number of concurrent build operations
        #[arg(long, value_name = "N")]
        jobs: Option<u32>,

        /// Do everything except actually running the commands
        #[arg(long)]
        dry_run: bool,

        /// Directory for the result bundle
        #[arg(long, value_name = "PATH")]
        result_bundle_path: Option<PathBuf>,

        /// Directory for build products and other derived data
        #[arg(long, value_name = "PATH")]
        derived_data_path: Option<PathBuf>,

        /// Directory for created archives, or the archive to export
        #[arg(long, value_name = "PATH")]
        archive_path: Option<PathBuf>,

        /// Export an archive instead of building
        #[arg(long)]
        export_archive: bool,

        /// Plist with options for the export process
        #[arg(long, value_name = "PATH")]
        export_options_plist: Option<PathBuf>,

        /// Skip scheme actions that cannot be performed
        #[arg(long)]
        skip_unavailable_actions: bool,

        /// Run the archive action instead of build
        #[arg(long)]
        archive: bool,

        /// Clean before the selected action
        #[arg(long)]
        clean: bool,

        /// Build-setting override, as KEY=VALUE (repeatable)
        #[arg(long = "setting", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        settings: Vec<(String, String)>,
    },

    /// List the SDKs available on this machine
    Sdks {
        /// Explicit path to the xcodebuild executable
        #[arg(long, value_name = "PATH")]
        tool_path: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
