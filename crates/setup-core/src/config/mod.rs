//! Process-level configuration read from the environment

use crate::error::SetupError;
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the package manager used for installs
pub const PACKAGE_MANAGER_ENV: &str = "EXPRESS_SETUP_PACKAGE_MANAGER";

/// Environment variable that skips the dependency install step
pub const SKIP_INSTALL_ENV: &str = "EXPRESS_SETUP_SKIP_INSTALL";

/// Supported package managers with their binary names
const PACKAGE_MANAGERS: &[(&str, PackageManager)] = &[
    ("npm", PackageManager::Npm),
    ("pnpm", PackageManager::Pnpm),
    ("yarn", PackageManager::Yarn),
    ("bun", PackageManager::Bun),
];

/// Package manager invoked for `install` and shown in next steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Binary name on PATH
    pub fn program(&self) -> &'static str {
        PACKAGE_MANAGERS
            .iter()
            .find(|(_, pm)| pm == self)
            .map(|(name, _)| *name)
            .unwrap_or("npm")
    }

    /// Command line that installs dependencies
    pub fn install_command(&self) -> String {
        format!("{} install", self.program())
    }

    /// Command line that starts the dev server
    pub fn run_dev_command(&self) -> String {
        format!("{} run dev", self.program())
    }
}

impl FromStr for PackageManager {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PACKAGE_MANAGERS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, pm)| *pm)
            .ok_or_else(|| SetupError::UnknownPackageManager(s.to_string()))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Settings that are not part of the answers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupConfig {
    pub package_manager: PackageManager,
    pub skip_install: bool,
}

impl SetupConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let package_manager = match lookup(PACKAGE_MANAGER_ENV) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => PackageManager::default(),
        };

        let skip_install = lookup(SKIP_INSTALL_ENV)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        Ok(Self {
            package_manager,
            skip_install,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
