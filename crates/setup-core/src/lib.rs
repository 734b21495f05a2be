//! Setup Core - Shared library for the Express project scaffolder
//!
//! This library turns a small set of answers into an Express project on disk.
//! The `express-setup` binary is a thin wrapper around it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure template functions, runtime detection, the installer
//! - **Layer 2: Workflow Orchestration** - `ProjectGenerator` driven by `SetupAnswers`,
//!   reporting through the `Reporter` trait so custom UIs can plug in
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use setup_core::{ProjectGenerator, SetupAnswers, SetupConfig, runtime::Installer};
//!
//! let answers = SetupAnswers::default();
//! let config = SetupConfig::from_env()?;
//! let installer = Installer::from_config(&config);
//! let cwd = std::env::current_dir()?;
//! let report = ProjectGenerator::new(&answers, cwd, installer, MyReporter)
//!     .run()
//!     .await?;
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod generator;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{Language, ModuleSystem, ProjectName, SetupAnswers, Variant};
pub use config::{PackageManager, SetupConfig};
pub use error::SetupError;
pub use generator::{GenerationReport, InstallOutcome, ProjectGenerator, Reporter};

#[cfg(feature = "tui")]
pub use tui::run;
