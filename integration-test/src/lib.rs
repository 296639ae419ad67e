//! Test driver for termlaunch integration tests.
//!
//! Runs the built `termlaunch` binary with a controlled environment:
//! - `TERMLAUNCH_RC` points at a caller-supplied (or nonexistent) file so the
//!   user's own preferences never leak in
//! - stdout (the launch plan) and stderr (errors, logs) are captured separately

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Outcome of one termlaunch run.
#[derive(Debug)]
pub struct LaunchRun {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl LaunchRun {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Plan lines starting with `window`.
    pub fn windows(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with("window "))
            .collect()
    }

    /// Plan lines starting with `  tab`.
    pub fn tabs(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with("  tab "))
            .collect()
    }
}

/// Builder for a termlaunch invocation.
pub struct LaunchSession {
    binary: PathBuf,
    args: Vec<OsString>,
    env: Vec<(String, String)>,
    rc: Option<PathBuf>,
    cwd: Option<PathBuf>,
}

impl LaunchSession {
    /// `binary` is the path to the termlaunch binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        LaunchSession {
            binary: binary.into(),
            args: Vec::new(),
            env: Vec::new(),
            rc: None,
            cwd: None,
        }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(OsString::from));
        self
    }

    /// Append one argument that need not be UTF-8.
    pub fn arg_os(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Use `path` as the preferences file.
    pub fn rc(mut self, path: &Path) -> Self {
        self.rc = Some(path.to_path_buf());
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn run(self) -> std::io::Result<LaunchRun> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("TERMLAUNCH_SCREEN");
        let rc = self
            .rc
            .unwrap_or_else(|| PathBuf::from("/nonexistent/termlaunch/terminalrc"));
        cmd.env("TERMLAUNCH_RC", rc);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());

        let output = cmd.output()?;
        Ok(LaunchRun {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
