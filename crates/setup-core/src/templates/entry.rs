//! Entry-point source (index.ts / index.js)

use crate::answers::Variant;
use crate::templates::variant;

/// Body shared by all dialects; `{{...}}` markers are filled from the variant table
const ENTRY_TEMPLATE: &str = r#"{{imports}}

dotenv.config();

const app = express();
const PORT = process.env.PORT || 3000;

// Middleware
app.use(cors());
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Routes
app.get('/', ({{params}}) => {
  res.json({
    message: 'Welcome to Express API',
    status: 'Server is running',
    timestamp: new Date().toISOString(),
  });
});

// Health check endpoint
app.get('/health', ({{params}}) => {
  res.json({ status: 'OK', uptime: process.uptime() });
});

// Start server
app.listen(PORT, () => {
  console.log(`Server is running on http://localhost:${PORT}`);
  console.log(`Environment: ${process.env.NODE_ENV || 'development'}`);
});

{{export}}
"#;

/// Render the entry point for a variant
pub fn render(variant: Variant) -> String {
    let dialect = variant::profile(variant).entry;
    ENTRY_TEMPLATE
        .replace("{{imports}}", dialect.imports)
        .replace("{{params}}", dialect.handler_params)
        .replace("{{export}}", dialect.export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Language, ModuleSystem};

    fn routes(source: &str) -> Vec<&str> {
        source
            .lines()
            .filter_map(|line| line.strip_prefix("app.get('"))
            .filter_map(|rest| rest.split('\'').next())
            .collect()
    }

    #[test]
    fn test_every_variant_defines_two_routes() {
        for variant in Variant::all() {
            let source = render(variant);
            assert_eq!(routes(&source), vec!["/", "/health"], "{}", variant);
            assert!(!source.contains("{{"), "{} left a marker", variant);
            assert!(source.contains("process.env.PORT || 3000"));
            assert!(source.contains("app.use(cors());"));
            assert!(source.contains("new Date().toISOString()"));
        }
    }

    #[test]
    fn test_esm_uses_import_syntax() {
        for language in Language::ALL {
            let source = render(Variant::new(language, ModuleSystem::Esm));
            assert!(source.starts_with("import express"));
            assert!(!source.contains("require("));
            assert!(source.trim_end().ends_with("export default app;"));
        }
    }

    #[test]
    fn test_commonjs_uses_require_syntax() {
        let js = render(Variant::new(Language::JavaScript, ModuleSystem::CommonJs));
        assert!(js.starts_with("const express = require('express');"));
        assert!(js.trim_end().ends_with("module.exports = app;"));

        let ts = render(Variant::new(Language::TypeScript, ModuleSystem::CommonJs));
        assert!(ts.starts_with("import express = require('express');"));
        assert!(ts.trim_end().ends_with("export = app;"));
    }

    #[test]
    fn test_only_typescript_is_annotated() {
        for variant in Variant::all() {
            let source = render(variant);
            let annotated =
                source.contains("res: Response") || source.contains("res: express.Response");
            assert_eq!(annotated, variant.language.is_typescript(), "{}", variant);
        }
    }
}
