//! The answer record collected from the user
//!
//! Every generation decision is a pure function of [`SetupAnswers`]. The
//! generator only ever borrows it immutably.

use crate::error::SetupError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Name given for "scaffold into the current directory"
pub const CURRENT_DIR: &str = ".";

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Source file extension (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Import/export dialect of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleSystem {
    Esm,
    CommonJs,
}

impl ModuleSystem {
    pub const ALL: [ModuleSystem; 2] = [ModuleSystem::Esm, ModuleSystem::CommonJs];

    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleSystem::Esm => "ESM",
            ModuleSystem::CommonJs => "CommonJS",
        }
    }

    /// Value of the `type` field in package.json
    pub fn package_type(&self) -> &'static str {
        match self {
            ModuleSystem::Esm => "module",
            ModuleSystem::CommonJs => "commonjs",
        }
    }

    pub fn is_esm(&self) -> bool {
        matches!(self, ModuleSystem::Esm)
    }
}

impl fmt::Display for ModuleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A (language, module system) pair; the key of every variant table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    pub language: Language,
    pub module_system: ModuleSystem,
}

impl Variant {
    pub fn new(language: Language, module_system: ModuleSystem) -> Self {
        Self {
            language,
            module_system,
        }
    }

    /// All supported combinations
    pub fn all() -> impl Iterator<Item = Variant> {
        Language::ALL.into_iter().flat_map(|language| {
            ModuleSystem::ALL
                .into_iter()
                .map(move |module_system| Variant::new(language, module_system))
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.language, self.module_system)
    }
}

/// Validated project name: trimmed, never empty, and relative to the working directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse user input, rejecting blank names and names that leave the working directory
    ///
    /// `./` segments are dropped, so `./api` and `api` name the same project.
    pub fn parse(input: &str) -> Result<Self, SetupError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SetupError::EmptyProjectName);
        }
        if trimmed == CURRENT_DIR {
            return Ok(Self::current_dir());
        }

        let mut segments = Vec::new();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_string_lossy()),
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) | Component::ParentDir => {
                    return Err(SetupError::ProjectNameOutsideCwd(trimmed.to_string()));
                }
            }
        }

        if segments.is_empty() {
            return Ok(Self::current_dir());
        }
        Ok(Self(segments.join("/")))
    }

    /// The current working directory
    pub fn current_dir() -> Self {
        Self(CURRENT_DIR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the project is scaffolded into the working directory itself
    pub fn is_current_dir(&self) -> bool {
        self.0 == CURRENT_DIR
    }

    /// Directory the project will be written to
    pub fn resolve(&self, cwd: &Path) -> PathBuf {
        if self.is_current_dir() {
            cwd.to_path_buf()
        } else {
            cwd.join(&self.0)
        }
    }

    /// Name to put in package.json for a project at `project_path`
    pub fn package_name(&self, project_path: &Path) -> String {
        if self.is_current_dir() {
            project_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "app".to_string())
        } else {
            self.0.clone()
        }
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the user chose; immutable once collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    pub project_name: ProjectName,
    pub language: Language,
    pub module_system: ModuleSystem,
    pub use_src_directory: bool,
    pub use_eslint: bool,
    pub use_prettier: bool,
    pub create_gitignore: bool,
}

impl SetupAnswers {
    pub fn variant(&self) -> Variant {
        Variant::new(self.language, self.module_system)
    }

    /// Relative directory holding the sources ("src" or the project root)
    pub fn source_dir(&self) -> &'static str {
        if self.use_src_directory {
            "src"
        } else {
            "."
        }
    }

    /// Relative path of the entry point, e.g. `src/index.ts`
    pub fn entry_path(&self) -> String {
        let prefix = if self.use_src_directory { "src/" } else { "" };
        format!("{}index.{}", prefix, self.language.extension())
    }
}

/// Defaults of the interactive questions
impl Default for SetupAnswers {
    fn default() -> Self {
        Self {
            project_name: ProjectName::default(),
            language: Language::TypeScript,
            module_system: ModuleSystem::Esm,
            use_src_directory: true,
            use_eslint: true,
            use_prettier: true,
            create_gitignore: true,
        }
    }
}
