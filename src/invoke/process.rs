//! Blocking subprocess execution with optional output capture.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use super::args::{ArgumentBuilder, quote};
use crate::error::{Result, XcToolsError};

/// One fully-specified child process launch.
///
/// The argument vector is fixed at construction; nothing mutates it after
/// the handoff.
#[derive(Debug)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    capture_stdout: bool,
    capture_stderr: bool,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: ArgumentBuilder) -> Self {
        Self {
            program: program.into(),
            args: args.render(),
            working_dir: None,
            capture_stdout: false,
            capture_stderr: false,
        }
    }

    /// Launch in `dir` instead of the current working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Buffer standard output instead of inheriting the console.
    pub fn capture_stdout(mut self) -> Self {
        self.capture_stdout = true;
        self
    }

    /// Buffer standard error instead of inheriting the console.
    pub fn capture_stderr(mut self) -> Self {
        self.capture_stderr = true;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Shell-style rendering of the full command line, for logging.
    pub fn command_line(&self) -> String {
        let mut line = quote(&self.program.display().to_string());
        for arg in &self.args {
            line.push(' ');
            line.push_str(&quote(arg));
        }
        line
    }
}

/// Captured outcome of a finished child process.
///
/// Created at process exit and read-only afterward. Streams that were not
/// captured are empty.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Exit code; `None` when the child was killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Spawn the invocation and block until the child exits.
///
/// A non-zero exit is not an error here: the caller decides what a failing
/// tool means. Only a failure to start the process at all maps to `Err`.
pub fn run(invocation: &Invocation) -> Result<ProcessOutput> {
    debug!("running {}", invocation.command_line());

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);

    if let Some(dir) = &invocation.working_dir {
        command.current_dir(dir);
    }

    command.stdout(if invocation.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    command.stderr(if invocation.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    let output = command.output().map_err(|source| XcToolsError::Launch {
        program: invocation.program.clone(),
        source,
    })?;

    let result = ProcessOutput {
        code: output.status.code(),
        stdout: into_lines(&output.stdout),
        stderr: into_lines(&output.stderr),
    };
    debug!(
        "{} exited with {:?}",
        invocation.program.display(),
        result.code
    );

    Ok(result)
}

fn into_lines(raw: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(raw)
        .lines()
        .map(str::to_string)
        .collect()
}
