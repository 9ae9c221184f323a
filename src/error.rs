//! Error types for tool resolution and invocation.
//!
//! A wrapped tool exiting non-zero is deliberately NOT represented here:
//! the exit code is data on [`crate::invoke::process::ProcessOutput`] and
//! its meaning belongs to the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or launching a wrapped tool
#[derive(Debug, Error)]
pub enum XcToolsError {
    /// No candidate executable resolved for the tool
    #[error("{tool} executable not found; paths tried: {}", searched_list(.searched))]
    ToolNotFound {
        /// Human-readable tool name
        tool: String,
        /// Every candidate path that was checked, in order
        searched: Vec<PathBuf>,
    },

    /// The OS refused to start the resolved binary
    #[error("failed to launch {}: {source}", .program.display())]
    Launch {
        /// The resolved executable that could not be started
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON rendering of results failed
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised while loading an explicitly requested config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

fn searched_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, XcToolsError>;
