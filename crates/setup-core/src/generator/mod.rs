//! Project generation workflow
//!
//! [`ProjectGenerator`] turns a [`SetupAnswers`] record into a project on disk:
//! directories first, then every file from [`templates::plan`], then the
//! dependency install. Any filesystem failure before the install is fatal and
//! nothing already written is undone. A failed install is only reported,
//! because the scaffold is usable without installed dependencies.

mod reporter;

pub use reporter::Reporter;

use crate::answers::SetupAnswers;
use crate::config::SetupConfig;
use crate::runtime::Installer;
use crate::templates::{self, TemplateFile};
use anyhow::{Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Empty folders created under the base directory
pub const SCAFFOLD_DIRS: [&str; 8] = [
    "models",
    "routes",
    "middleware",
    "controllers",
    "config",
    "utils",
    "services",
    "types",
];

/// Result of the dependency install step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// Install disabled through configuration
    Skipped,
    /// Install failed; the scaffold is still complete
    Failed {
        error: String,
        /// Commands the user can run to finish the install by hand
        manual_steps: Vec<String>,
    },
}

/// Summary of a finished generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_path: PathBuf,
    /// Every file written, in generation order
    pub files: Vec<PathBuf>,
    pub install: InstallOutcome,
}

/// Writes a project described by a [`SetupAnswers`] record
pub struct ProjectGenerator<'a, R: Reporter> {
    answers: &'a SetupAnswers,
    cwd: PathBuf,
    installer: Option<Installer>,
    reporter: R,
}

impl<'a, R: Reporter> ProjectGenerator<'a, R> {
    /// `cwd` is the directory the project name is resolved against.
    /// Without an installer the install step is skipped.
    pub fn new(
        answers: &'a SetupAnswers,
        cwd: impl Into<PathBuf>,
        installer: Option<Installer>,
        reporter: R,
    ) -> Self {
        Self {
            answers,
            cwd: cwd.into(),
            installer,
            reporter,
        }
    }

    /// Directory the project is written to
    pub fn project_path(&self) -> PathBuf {
        self.answers.project_name.resolve(&self.cwd)
    }

    /// Directory holding the entry point and scaffold folders
    pub fn base_dir(&self) -> PathBuf {
        let project_path = self.project_path();
        if self.answers.use_src_directory {
            project_path.join("src")
        } else {
            project_path
        }
    }

    /// Run every step, install included
    pub async fn run(mut self) -> Result<GenerationReport> {
        let files = self.scaffold().await?;
        let install = self.install().await;

        Ok(GenerationReport {
            project_path: self.project_path(),
            files,
            install,
        })
    }

    /// Create directories and write all files; returns the written paths
    pub async fn scaffold(&mut self) -> Result<Vec<PathBuf>> {
        let project_path = self.project_path();
        let base_dir = self.base_dir();

        if !self.answers.project_name.is_current_dir() {
            reported(
                &mut self.reporter,
                "Creating project directory...",
                "Project directory created",
                "Failed to create project directory",
                create_dir(&project_path),
            )
            .await?;
        }

        reported(
            &mut self.reporter,
            "Creating folder structure...",
            "Folder structure created",
            "Failed to create folder structure",
            create_folder_structure(&base_dir),
        )
        .await?;

        let package_name = self.answers.project_name.package_name(&project_path);
        let steps = templates::plan(self.answers, &package_name)?;

        let mut written = Vec::new();
        for step in &steps {
            let paths = reported(
                &mut self.reporter,
                &format!("Creating {}...", step.label),
                &format!("{} created", step.label),
                &format!("Failed to create {}", step.label),
                write_files(&project_path, &step.files),
            )
            .await?;
            written.extend(paths);
        }

        Ok(written)
    }

    /// Install dependencies; failures are reported, never returned
    pub async fn install(&mut self) -> InstallOutcome {
        let Some(installer) = self.installer.clone() else {
            self.reporter.info("Skipping dependency installation");
            return InstallOutcome::Skipped;
        };

        let project_path = self.project_path();
        let display_name = self.answers.project_name.package_name(&project_path);

        let result = if installer.detect().await.available {
            self.reporter.info(&format!(
                "Installing dependencies in {} (this may take a minute)...",
                display_name
            ));
            installer.install(&project_path).await
        } else {
            Err(crate::SetupError::PackageManagerMissing(installer.program().to_string()).into())
        };

        match result {
            Ok(()) => {
                self.reporter.succeed("Dependencies installed successfully");
                InstallOutcome::Installed
            }
            Err(e) => {
                let manual_steps = manual_install_steps(self.answers, &installer);
                self.reporter.fail("Failed to install dependencies");
                self.reporter.warn(&format!(
                    "Please run manually:\n{}",
                    manual_steps
                        .iter()
                        .map(|step| format!("  {}", step))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                self.reporter.info(&format!("Error: {:#}", e));
                InstallOutcome::Failed {
                    error: format!("{:#}", e),
                    manual_steps,
                }
            }
        }
    }
}

/// Commands that finish a failed install by hand
fn manual_install_steps(answers: &SetupAnswers, installer: &Installer) -> Vec<String> {
    let mut steps = Vec::new();
    if !answers.project_name.is_current_dir() {
        steps.push(format!("cd {}", answers.project_name));
    }
    steps.push(installer.command_line());
    steps
}

/// Instructions printed once generation is done
pub fn next_steps(
    answers: &SetupAnswers,
    config: &SetupConfig,
    install: &InstallOutcome,
) -> Vec<String> {
    let mut steps = Vec::new();

    if !answers.project_name.is_current_dir() {
        steps.push(format!("cd {}", answers.project_name));
    }

    if !matches!(install, InstallOutcome::Installed) {
        steps.push(config.package_manager.install_command());
    }

    steps.push(config.package_manager.run_dev_command());

    steps
}

/// Run `operation` between a start and a success/failure report
async fn reported<T, R, F>(
    reporter: &mut R,
    running: &str,
    done: &str,
    failed: &str,
    operation: F,
) -> Result<T>
where
    R: Reporter,
    F: Future<Output = Result<T>>,
{
    reporter.start(running);
    match operation.await {
        Ok(value) => {
            reporter.succeed(done);
            Ok(value)
        }
        Err(e) => {
            reporter.fail(failed);
            Err(e)
        }
    }
}

async fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

async fn create_folder_structure(base_dir: &Path) -> Result<()> {
    create_dir(base_dir).await?;
    for folder in SCAFFOLD_DIRS {
        create_dir(&base_dir.join(folder)).await?;
    }
    Ok(())
}

async fn write_files(project_path: &Path, files: &[TemplateFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target_path = project_path.join(&file.path);
        if let Some(parent) = target_path.parent() {
            create_dir(parent).await?;
        }

        fs::write(&target_path, &file.contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        written.push(target_path);
    }

    Ok(written)
}
