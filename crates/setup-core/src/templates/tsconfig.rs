//! tsconfig.json generation (TypeScript projects only)

use crate::answers::SetupAnswers;
use anyhow::{Context, Result};
use serde::Serialize;

pub const FILE_NAME: &str = "tsconfig.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub lib: Vec<String>,
    pub out_dir: String,
    pub root_dir: String,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub force_consistent_casing_in_file_names: bool,
    pub resolve_json_module: bool,
    pub module_resolution: String,
    pub declaration: bool,
    pub declaration_map: bool,
    pub source_map: bool,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl TsConfig {
    pub fn new(answers: &SetupAnswers) -> Self {
        let is_esm = answers.module_system.is_esm();
        let include = if answers.use_src_directory {
            "src/**/*"
        } else {
            "**/*"
        };

        Self {
            compiler_options: CompilerOptions {
                target: "ES2022".to_string(),
                module: if is_esm { "ES2022" } else { "commonjs" }.to_string(),
                lib: vec!["ES2022".to_string()],
                out_dir: "dist".to_string(),
                root_dir: answers.source_dir().to_string(),
                strict: true,
                es_module_interop: true,
                skip_lib_check: true,
                force_consistent_casing_in_file_names: true,
                resolve_json_module: true,
                module_resolution: if is_esm { "bundler" } else { "node" }.to_string(),
                declaration: true,
                declaration_map: true,
                source_map: true,
                types: vec!["node".to_string()],
            },
            include: vec![include.to_string()],
            exclude: vec!["node_modules".to_string(), "dist".to_string()],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("Failed to serialize tsconfig.json")?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::ModuleSystem;

    fn render(answers: &SetupAnswers) -> serde_json::Value {
        serde_json::from_str(&TsConfig::new(answers).to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_esm_uses_bundler_resolution() {
        let config = render(&SetupAnswers::default());
        let options = &config["compilerOptions"];

        assert_eq!(options["module"], "ES2022");
        assert_eq!(options["moduleResolution"], "bundler");
        assert_eq!(options["rootDir"], "src");
        assert_eq!(options["strict"], true);
        assert_eq!(config["include"][0], "src/**/*");
        assert_eq!(config["exclude"][1], "dist");
    }

    #[test]
    fn test_commonjs_uses_node_resolution() {
        let answers = SetupAnswers {
            module_system: ModuleSystem::CommonJs,
            use_src_directory: false,
            ..SetupAnswers::default()
        };
        let config = render(&answers);
        let options = &config["compilerOptions"];

        assert_eq!(options["module"], "commonjs");
        assert_eq!(options["moduleResolution"], "node");
        assert_eq!(options["rootDir"], ".");
        assert_eq!(config["include"][0], "**/*");
    }

    #[test]
    fn test_emits_declarations_and_source_maps() {
        let config = render(&SetupAnswers::default());
        let options = &config["compilerOptions"];

        assert_eq!(options["declaration"], true);
        assert_eq!(options["declarationMap"], true);
        assert_eq!(options["sourceMap"], true);
        assert_eq!(options["forceConsistentCasingInFileNames"], true);
    }
}
