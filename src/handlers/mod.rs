// Handler modules
pub mod pod;
pub mod xcode;

// Re-export all handler functions
pub use pod::handle_pod;
pub use xcode::handle_xcode;

use std::path::PathBuf;
use std::process;

use colored::Colorize;

use crate::error::Result;
use crate::invoke::process::ProcessOutput;

/// CLI `--tool-path` beats the configured default.
fn effective_tool_path(cli: Option<PathBuf>, configured: Option<&PathBuf>) -> Option<PathBuf> {
    cli.or_else(|| configured.cloned())
}

/// Report the wrapped tool's outcome and mirror its exit status.
///
/// A failing tool is the tool's verdict, not ours: the captured code is
/// passed through unchanged.
fn finish(operation: &str, output: &ProcessOutput) -> Result<()> {
    if output.success() {
        println!("✅ {} completed", operation.green());
        return Ok(());
    }

    let code = output.code.unwrap_or(1);
    eprintln!(
        "❌ {}",
        format!("{operation} exited with status {code}").red()
    );
    process::exit(code);
}
