//! Runtime detection for Node.js and the package manager

use std::process::Stdio;
use tokio::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// "Node.js (v22.1.0)" or "Node.js (not installed)"
    pub fn describe(&self) -> String {
        if self.available {
            format!(
                "{} ({})",
                self.name,
                self.version.as_deref().unwrap_or("unknown")
            )
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Check whether `program --version` runs successfully
pub async fn check_program(name: &str, program: &str) -> RuntimeInfo {
    let output = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: name.to_string(),
                version: (!version.is_empty()).then_some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: name.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub async fn check_node() -> RuntimeInfo {
    check_program("Node.js", "node").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let info = check_program("Nothing", "express-setup-no-such-program").await;
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.describe(), "Nothing (not installed)");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_program_is_available() {
        let info = check_program("True", "true").await;
        assert!(info.available);
        assert!(info.describe().starts_with("True ("));
    }

    #[test]
    fn test_describe_available() {
        let info = RuntimeInfo {
            name: "npm".to_string(),
            version: Some("10.8.1".to_string()),
            available: true,
        };
        assert_eq!(info.describe(), "npm (10.8.1)");
    }
}
