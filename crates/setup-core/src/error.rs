//! Typed errors for setup validation and dependency installation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Project name '{0}' must be a relative path inside the current directory")]
    ProjectNameOutsideCwd(String),

    #[error("Unknown package manager '{0}' (expected one of: npm, pnpm, yarn, bun)")]
    UnknownPackageManager(String),

    #[error("{0} is not installed or not on PATH")]
    PackageManagerMissing(String),

    #[error("{program} install exited with code {code}")]
    InstallFailed { program: String, code: i32 },
}
