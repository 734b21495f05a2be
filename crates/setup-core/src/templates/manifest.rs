//! package.json generation

use crate::answers::SetupAnswers;
use crate::templates::variant;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

pub const FILE_NAME: &str = "package.json";

/// Runtime dependencies installed for every project
const DEPENDENCIES: &[(&str, &str)] = &[
    ("express", "^4.21.1"),
    ("dotenv", "^16.4.5"),
    ("cors", "^2.8.5"),
];

/// Dev dependencies installed for every project
const BASE_DEV_DEPENDENCIES: &[(&str, &str)] = &[("@types/node", "^22.9.0")];

const ESLINT_DEV_DEPENDENCIES: &[(&str, &str)] =
    &[("eslint", "^9.15.0"), ("@eslint/js", "^9.15.0")];

const TYPESCRIPT_ESLINT: (&str, &str) = ("typescript-eslint", "^8.15.0");
const ESLINT_CONFIG_PRETTIER: (&str, &str) = ("eslint-config-prettier", "^9.1.0");
const PRETTIER: (&str, &str) = ("prettier", "^3.3.3");

const FORMAT_SCRIPT: &str = "prettier --write \"**/*.{ts,js,json,md}\"";

/// The package descriptor written to package.json
///
/// Field order here is the key order in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: IndexMap<String, String>,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Build the manifest for `answers`; `package_name` is the resolved project name
    pub fn new(answers: &SetupAnswers, package_name: &str) -> Self {
        let is_typescript = answers.language.is_typescript();
        let entry = answers.entry_path();

        // Compiled output for TypeScript, the source file itself for JavaScript
        let runnable_entry = if is_typescript {
            "dist/index.js".to_string()
        } else {
            entry.clone()
        };

        Self {
            name: package_name.to_string(),
            version: "1.0.0".to_string(),
            description: "Express application".to_string(),
            main: (!answers.module_system.is_esm()).then(|| runnable_entry.clone()),
            module_type: answers.module_system.package_type().to_string(),
            scripts: scripts(answers, &entry, &runnable_entry),
            keywords: Vec::new(),
            author: String::new(),
            license: "ISC".to_string(),
            dependencies: to_map(DEPENDENCIES.iter().copied()),
            dev_dependencies: to_map(dev_dependencies(answers)),
        }
    }

    /// Serialize with two-space indentation and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("Failed to serialize package.json")?;
        json.push('\n');
        Ok(json)
    }
}

fn scripts(answers: &SetupAnswers, entry: &str, runnable_entry: &str) -> IndexMap<String, String> {
    let profile = variant::profile(answers.variant());
    let mut scripts = IndexMap::new();

    scripts.insert(
        "dev".to_string(),
        format!("{} {}", profile.dev_runner, entry),
    );
    scripts.insert("start".to_string(), format!("node {}", runnable_entry));

    if answers.language.is_typescript() {
        scripts.insert("build".to_string(), "tsc".to_string());
    }

    if answers.use_eslint {
        scripts.insert("lint".to_string(), "eslint .".to_string());
        scripts.insert("lint:fix".to_string(), "eslint . --fix".to_string());
    }

    if answers.use_prettier {
        scripts.insert("format".to_string(), FORMAT_SCRIPT.to_string());
    }

    scripts
}

fn dev_dependencies(answers: &SetupAnswers) -> Vec<(&'static str, &'static str)> {
    let profile = variant::profile(answers.variant());
    let mut deps: Vec<(&str, &str)> = BASE_DEV_DEPENDENCIES.to_vec();
    deps.extend_from_slice(profile.dev_dependencies);

    if answers.use_eslint {
        deps.extend_from_slice(ESLINT_DEV_DEPENDENCIES);
        if answers.language.is_typescript() {
            deps.push(TYPESCRIPT_ESLINT);
        }
        if answers.use_prettier {
            deps.push(ESLINT_CONFIG_PRETTIER);
        }
    }

    if answers.use_prettier {
        deps.push(PRETTIER);
    }

    deps
}

fn to_map<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Language, ModuleSystem};

    fn render(answers: &SetupAnswers) -> serde_json::Value {
        let json = PackageJson::new(answers, "api").to_json().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_esm_omits_main() {
        let manifest = render(&SetupAnswers::default());

        assert!(manifest.get("main").is_none());
        assert_eq!(manifest["type"], "module");
        assert_eq!(manifest["scripts"]["dev"], "tsx watch src/index.ts");
        assert_eq!(manifest["scripts"]["build"], "tsc");
        assert_eq!(manifest["scripts"]["start"], "node dist/index.js");
    }

    #[test]
    fn test_commonjs_points_main_at_compiled_entry() {
        let answers = SetupAnswers {
            module_system: ModuleSystem::CommonJs,
            ..SetupAnswers::default()
        };
        let manifest = render(&answers);

        assert_eq!(manifest["main"], "dist/index.js");
        assert_eq!(manifest["type"], "commonjs");
        assert_eq!(
            manifest["scripts"]["dev"],
            "ts-node-dev --respawn --transpile-only src/index.ts"
        );
        assert_eq!(manifest["devDependencies"]["ts-node-dev"], "^2.0.0");
        assert!(manifest["devDependencies"].get("tsx").is_none());
    }

    #[test]
    fn test_javascript_runs_source_directly() {
        let answers = SetupAnswers {
            language: Language::JavaScript,
            module_system: ModuleSystem::CommonJs,
            use_src_directory: false,
            ..SetupAnswers::default()
        };
        let manifest = render(&answers);

        assert_eq!(manifest["main"], "index.js");
        assert_eq!(manifest["scripts"]["dev"], "nodemon index.js");
        assert_eq!(manifest["scripts"]["start"], "node index.js");
        assert!(manifest["scripts"].get("build").is_none());
        assert!(manifest["devDependencies"].get("typescript").is_none());
        assert!(manifest["devDependencies"].get("typescript-eslint").is_none());
        assert_eq!(manifest["devDependencies"]["nodemon"], "^3.1.7");
    }

    #[test]
    fn test_lint_and_format_disabled() {
        let answers = SetupAnswers {
            use_eslint: false,
            use_prettier: false,
            ..SetupAnswers::default()
        };
        let manifest = render(&answers);
        let scripts = manifest["scripts"].as_object().unwrap();
        let dev_deps = manifest["devDependencies"].as_object().unwrap();

        assert!(!scripts.contains_key("lint"));
        assert!(!scripts.contains_key("lint:fix"));
        assert!(!scripts.contains_key("format"));
        assert!(dev_deps
            .keys()
            .all(|name| !name.contains("eslint") && !name.contains("prettier")));
    }

    #[test]
    fn test_prettier_shim_needs_both_tools() {
        let eslint_only = SetupAnswers {
            use_prettier: false,
            ..SetupAnswers::default()
        };
        let manifest = render(&eslint_only);
        assert_eq!(manifest["devDependencies"]["eslint"], "^9.15.0");
        assert!(manifest["devDependencies"]
            .get("eslint-config-prettier")
            .is_none());

        let manifest = render(&SetupAnswers::default());
        assert_eq!(
            manifest["devDependencies"]["eslint-config-prettier"],
            "^9.1.0"
        );
        assert_eq!(manifest["devDependencies"]["prettier"], "^3.3.3");
    }

    #[test]
    fn test_runtime_dependencies_are_fixed() {
        for variant in crate::answers::Variant::all() {
            let answers = SetupAnswers {
                language: variant.language,
                module_system: variant.module_system,
                ..SetupAnswers::default()
            };
            let manifest = render(&answers);
            let deps = manifest["dependencies"].as_object().unwrap();

            assert_eq!(deps.len(), 3);
            assert_eq!(deps["express"], "^4.21.1");
            assert_eq!(deps["dotenv"], "^16.4.5");
            assert_eq!(deps["cors"], "^2.8.5");
        }
    }

    #[test]
    fn test_identical_answers_give_identical_bytes() {
        let answers = SetupAnswers::default();
        let first = PackageJson::new(&answers, "api").to_json().unwrap();
        let second = PackageJson::new(&answers.clone(), "api").to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_order_and_trailing_newline() {
        let json = PackageJson::new(&SetupAnswers::default(), "api")
            .to_json()
            .unwrap();

        assert!(json.ends_with("}\n"));
        assert!(json.starts_with("{\n  \"name\": \"api\""));
        let dev = json.find("\"dev\"").unwrap();
        let start = json.find("\"start\"").unwrap();
        let build = json.find("\"build\"").unwrap();
        assert!(dev < start && start < build);
    }
}
