//! Dependency installation through the package manager
//!
//! Runs `<package manager> install` in the project directory and streams its
//! output line by line while it runs. There is no timeout: installs run to
//! completion or until the user interrupts them.

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::runtime::check::{self, RuntimeInfo};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// A package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installer {
    program: String,
    args: Vec<String>,
}

impl Installer {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `<package manager> install` for the configured package manager
    pub fn from_config(config: &SetupConfig) -> Self {
        Self::new(config.package_manager.program(), ["install"])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The command as the user would type it
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check that the package manager answers `--version`
    pub async fn detect(&self) -> RuntimeInfo {
        check::check_program(&self.program, &self.program).await
    }

    /// Run the install in `dir`, streaming output as it arrives
    pub async fn install(&self, dir: &Path) -> Result<()> {
        println!();
        println!("{} {}", "Running:".dimmed(), self.command_line().yellow());
        println!();

        let mut child = TokioCommand::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.program))?;

        let stdout = child
            .stdout
            .take()
            .context("Failed to capture installer stdout")?;
        let stderr = child
            .stderr
            .take()
            .context("Failed to capture installer stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_open = true;
        let mut stderr_open = true;

        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_open = false;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for {}", self.program))?;
        println!();

        if status.success() {
            Ok(())
        } else {
            Err(SetupError::InstallFailed {
                program: self.program.clone(),
                code: status.code().unwrap_or(-1),
            }
            .into())
        }
    }
}
