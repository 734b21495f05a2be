//! .prettierrc and .prettierignore

use anyhow::{Context, Result};
use serde::Serialize;

pub const CONFIG_FILE_NAME: &str = ".prettierrc";
pub const IGNORE_FILE_NAME: &str = ".prettierignore";

pub const IGNORE: &str = "node_modules/
dist/
build/
coverage/
*.min.js
package-lock.json
yarn.lock
pnpm-lock.yaml
";

/// Formatting style shared by every generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub semi: bool,
    pub trailing_comma: &'static str,
    pub single_quote: bool,
    pub print_width: u16,
    pub tab_width: u8,
    pub use_tabs: bool,
    pub arrow_parens: &'static str,
    pub end_of_line: &'static str,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            semi: true,
            trailing_comma: "es5",
            single_quote: true,
            print_width: 100,
            tab_width: 2,
            use_tabs: false,
            arrow_parens: "always",
            end_of_line: "lf",
        }
    }
}

impl PrettierConfig {
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("Failed to serialize .prettierrc")?;
        json.push('\n');
        Ok(json)
    }
}
