//! External-tool invocation shim.
//!
//! Everything needed to turn a settings object into a subprocess call:
//! locate the executable, assemble the argument vector, spawn and wait,
//! and parse the small amount of text the tools print back.

pub mod args;
pub mod gate;
pub mod locator;
pub mod process;
pub mod version;

use std::path::PathBuf;

/// Identity of a wrapped command-line tool.
///
/// Implemented once per tool family and composed with the generic
/// [`locator::locate`] and [`process::run`] routines, so per-tool
/// customization stays data, not subclassing.
pub trait Tool {
    /// Human-readable tool name, used in errors and logs.
    fn name(&self) -> &str;

    /// Executable names to look up on the search path, in preference order.
    fn executable_names(&self) -> &[&str];

    /// Well-known absolute install locations, in preference order.
    fn alternative_paths(&self) -> Vec<PathBuf>;
}
