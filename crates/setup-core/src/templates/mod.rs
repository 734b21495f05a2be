//! Template rendering for every generated file
//!
//! This module provides:
//! - The (language, module system) variant table
//! - Renderers for package.json, tsconfig.json, the entry point, lint and format configs
//! - [`plan`], which turns an answer record into the ordered list of files to write

pub mod entry;
pub mod eslint;
pub mod manifest;
pub mod prettier;
pub mod static_files;
pub mod tsconfig;
pub mod variant;

use crate::answers::SetupAnswers;
use anyhow::Result;
use std::path::PathBuf;

pub use manifest::PackageJson;
pub use prettier::PrettierConfig;
pub use tsconfig::TsConfig;
pub use variant::{profile, EntryDialect, VariantProfile, VARIANTS};

/// A rendered file, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub contents: String,
}

impl TemplateFile {
    fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// One reported generation step and the files it writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStep {
    /// What the step produces, e.g. "package.json" or "ESLint configuration"
    pub label: &'static str,
    pub files: Vec<TemplateFile>,
}

impl TemplateStep {
    fn new(label: &'static str, files: Vec<TemplateFile>) -> Self {
        Self { label, files }
    }
}

/// Render every file for `answers`, in generation order
///
/// Optional files are left out entirely when their answer is "no".
pub fn plan(answers: &SetupAnswers, package_name: &str) -> Result<Vec<TemplateStep>> {
    let mut steps = Vec::new();

    steps.push(TemplateStep::new(
        manifest::FILE_NAME,
        vec![TemplateFile::new(
            manifest::FILE_NAME,
            PackageJson::new(answers, package_name).to_json()?,
        )],
    ));

    if answers.language.is_typescript() {
        steps.push(TemplateStep::new(
            tsconfig::FILE_NAME,
            vec![TemplateFile::new(
                tsconfig::FILE_NAME,
                TsConfig::new(answers).to_json()?,
            )],
        ));
    }

    steps.push(TemplateStep::new(
        ".env file",
        vec![TemplateFile::new(
            static_files::ENV_FILE_NAME,
            static_files::ENV,
        )],
    ));

    if answers.create_gitignore {
        steps.push(TemplateStep::new(
            static_files::GITIGNORE_FILE_NAME,
            vec![TemplateFile::new(
                static_files::GITIGNORE_FILE_NAME,
                static_files::GITIGNORE,
            )],
        ));
    }

    steps.push(TemplateStep::new(
        "index file",
        vec![TemplateFile::new(
            answers.entry_path(),
            entry::render(answers.variant()),
        )],
    ));

    if answers.use_eslint {
        steps.push(TemplateStep::new(
            "ESLint configuration",
            vec![TemplateFile::new(
                eslint::file_name(answers),
                eslint::render(answers),
            )],
        ));
    }

    if answers.use_prettier {
        steps.push(TemplateStep::new(
            "Prettier configuration",
            vec![
                TemplateFile::new(
                    prettier::CONFIG_FILE_NAME,
                    PrettierConfig::default().to_json()?,
                ),
                TemplateFile::new(prettier::IGNORE_FILE_NAME, prettier::IGNORE),
            ],
        ));
    }

    Ok(steps)
}
