//! ESLint flat config generation

use crate::answers::{ModuleSystem, SetupAnswers};

const ESM_FILE_NAME: &str = "eslint.config.js";
const COMMONJS_FILE_NAME: &str = "eslint.config.mjs";

const IGNORES: &str =
    "  {\n    ignores: ['dist/', 'node_modules/', '*.config.js', '*.config.mjs'],\n  }";

/// Config file name; CommonJS packages get `.mjs` so the `import` syntax still loads
pub fn file_name(answers: &SetupAnswers) -> &'static str {
    match answers.module_system {
        ModuleSystem::Esm => ESM_FILE_NAME,
        ModuleSystem::CommonJs => COMMONJS_FILE_NAME,
    }
}

/// Render the lint config for the chosen language
///
/// The prettier compatibility layer is only referenced when Prettier is also
/// selected, since `eslint-config-prettier` is only installed in that case.
pub fn render(answers: &SetupAnswers) -> String {
    if answers.language.is_typescript() {
        render_typescript(answers)
    } else {
        render_javascript(answers)
    }
}

fn render_typescript(answers: &SetupAnswers) -> String {
    let mut out = String::new();
    out.push_str("import eslint from '@eslint/js';\n");
    out.push_str("import tseslint from 'typescript-eslint';\n");
    if answers.use_prettier {
        out.push_str("import prettier from 'eslint-config-prettier';\n");
    }

    out.push_str("\nexport default tseslint.config(\n");
    out.push_str("  eslint.configs.recommended,\n");
    out.push_str("  ...tseslint.configs.recommendedTypeChecked,\n");
    if answers.use_prettier {
        out.push_str("  prettier,\n");
    }
    out.push_str(
        "  {
    languageOptions: {
      parserOptions: {
        projectService: true,
        tsconfigRootDir: import.meta.dirname,
      },
    },
    rules: {
      '@typescript-eslint/no-unused-vars': ['warn', { argsIgnorePattern: '^_' }],
      '@typescript-eslint/no-explicit-any': 'warn',
",
    );
    if answers.module_system == ModuleSystem::CommonJs {
        // `import x = require()` is how the CommonJS entry point imports
        out.push_str(
            "      '@typescript-eslint/no-require-imports': ['error', { allowAsImport: true }],\n",
        );
    }
    out.push_str(
        "      'no-console': ['warn', { allow: ['warn', 'error'] }],
    },
  },
",
    );
    out.push_str(IGNORES);
    out.push_str("\n);\n");
    out
}

fn render_javascript(answers: &SetupAnswers) -> String {
    let source_type = match answers.module_system {
        ModuleSystem::Esm => "module",
        ModuleSystem::CommonJs => "script",
    };

    let mut out = String::new();
    out.push_str("import eslint from '@eslint/js';\n");
    if answers.use_prettier {
        out.push_str("import prettier from 'eslint-config-prettier';\n");
    }

    out.push_str("\nexport default [\n");
    out.push_str("  eslint.configs.recommended,\n");
    if answers.use_prettier {
        out.push_str("  prettier,\n");
    }
    out.push_str(&format!(
        "  {{
    languageOptions: {{
      ecmaVersion: 2022,
      sourceType: '{}',
      globals: {{
        console: 'readonly',
        process: 'readonly',
        __dirname: 'readonly',
        __filename: 'readonly',
        module: 'readonly',
        require: 'readonly',
        exports: 'readonly',
      }},
    }},
    rules: {{
      'no-unused-vars': ['warn', {{ argsIgnorePattern: '^_' }}],
      'no-console': ['warn', {{ allow: ['warn', 'error'] }}],
    }},
  }},
",
        source_type
    ));
    out.push_str(IGNORES);
    out.push_str(",\n];\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Language;

    #[test]
    fn test_typescript_config_is_type_aware() {
        let config = render(&SetupAnswers::default());

        assert!(config.contains("export default tseslint.config("));
        assert!(config.contains("...tseslint.configs.recommendedTypeChecked,"));
        assert!(config.contains("import prettier from 'eslint-config-prettier';"));
        assert!(config.contains("'@typescript-eslint/no-explicit-any': 'warn'"));
        assert!(config.contains("argsIgnorePattern: '^_'"));
        assert!(config.contains("'no-console': ['warn', { allow: ['warn', 'error'] }]"));
        assert!(
            config.contains("ignores: ['dist/', 'node_modules/', '*.config.js', '*.config.mjs']")
        );
        assert!(!config.contains("no-require-imports"));
        assert!(config.ends_with(");\n"));
    }

    #[test]
    fn test_commonjs_config_is_an_es_module_file() {
        for language in Language::ALL {
            let commonjs = SetupAnswers {
                language,
                module_system: ModuleSystem::CommonJs,
                ..SetupAnswers::default()
            };
            let esm = SetupAnswers {
                language,
                ..SetupAnswers::default()
            };

            assert_eq!(file_name(&commonjs), "eslint.config.mjs");
            assert_eq!(file_name(&esm), "eslint.config.js");
            assert!(render(&commonjs).starts_with("import eslint from '@eslint/js';"));
        }
    }

    #[test]
    fn test_typescript_commonjs_allows_import_require() {
        let answers = SetupAnswers {
            module_system: ModuleSystem::CommonJs,
            ..SetupAnswers::default()
        };
        assert!(render(&answers).contains("allowAsImport: true"));
    }

    #[test]
    fn test_javascript_config_declares_globals() {
        let answers = SetupAnswers {
            language: Language::JavaScript,
            module_system: ModuleSystem::CommonJs,
            ..SetupAnswers::default()
        };
        let config = render(&answers);

        assert!(config.starts_with("import eslint from '@eslint/js';"));
        assert!(!config.contains("tseslint"));
        assert!(config.contains("sourceType: 'script'"));
        assert!(config.contains("__dirname: 'readonly'"));
        assert!(config.contains("  prettier,\n"));
        assert!(config.ends_with("];\n"));
    }

    #[test]
    fn test_javascript_esm_source_type() {
        let answers = SetupAnswers {
            language: Language::JavaScript,
            ..SetupAnswers::default()
        };
        assert!(render(&answers).contains("sourceType: 'module'"));
    }

    #[test]
    fn test_no_prettier_layer_without_prettier() {
        for language in Language::ALL {
            let answers = SetupAnswers {
                language,
                use_prettier: false,
                ..SetupAnswers::default()
            };
            let config = render(&answers);
            assert!(!config.contains("prettier"), "{}", language);
        }
    }
}
