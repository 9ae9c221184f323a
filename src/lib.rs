//! # xctools-cli
//!
//! A Rust-based command-line wrapper around the two Apple build tools every
//! iOS pipeline leans on: the CocoaPods dependency manager (`pod`) and the
//! Xcode build-toolchain driver (`xcodebuild`).
//!
//! ## Features
//!
//! - **Tool discovery**: resolves the installed executables through explicit
//!   overrides, well-known install locations, and the search path
//! - **Typed settings**: per-invocation settings objects translate 1:1 into
//!   the documented command-line flags
//! - **Version gating**: options the installed CocoaPods no longer accepts
//!   are withheld and downgraded to advisory warnings
//! - **Structured output**: version strings and SDK listings are parsed back
//!   into data, with JSON output on request
//!
//! ## Example
//!
//! ```rust,no_run
//! use xctools_cli::cocoapods::{self, PodInstallSettings};
//! use std::path::Path;
//!
//! # fn main() -> xctools_cli::Result<()> {
//! let settings = PodInstallSettings {
//!     no_ansi: true,
//!     ..Default::default()
//! };
//! let output = cocoapods::install(Some(Path::new("./MyApp")), &settings)?;
//! println!("pod exited with {:?}", output.code);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod cocoapods;
pub mod config;
pub mod error;
pub mod handlers;
pub mod invoke;
pub mod xcodebuild;

// Re-export commonly used types and functions
pub use error::{Result, XcToolsError};
pub use invoke::version::ToolVersion;
pub use xcodebuild::SdkDescriptor;

use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Pod(pod) => handlers::handle_pod(pod, config),
        Commands::Xcode(xcode) => handlers::handle_xcode(xcode, config),
    }
}
