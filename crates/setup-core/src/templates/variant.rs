//! Lookup table keyed by (language, module system)
//!
//! Everything that differs between the four project flavours lives in
//! [`VARIANTS`]. Supporting another combination means adding a row here,
//! not another branch in the renderers.

use crate::answers::{Language, ModuleSystem, Variant};

/// How the entry point imports its dependencies and exports the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDialect {
    /// Import block at the top of the file
    pub imports: &'static str,
    /// Parameter list of the route handlers
    pub handler_params: &'static str,
    /// Final statement exporting the app
    pub export: &'static str,
}

/// Everything that is specific to one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    pub variant: Variant,
    /// Watch-mode runner; the entry path is appended to form `scripts.dev`
    pub dev_runner: &'static str,
    /// Dev dependencies needed to run this variant
    pub dev_dependencies: &'static [(&'static str, &'static str)],
    pub entry: EntryDialect,
}

const TS_TYPES: [(&str, &str); 3] = [
    ("@types/express", "^5.0.0"),
    ("@types/cors", "^2.8.17"),
    ("typescript", "^5.7.2"),
];

pub const VARIANTS: &[VariantProfile] = &[
    VariantProfile {
        variant: Variant {
            language: Language::TypeScript,
            module_system: ModuleSystem::Esm,
        },
        dev_runner: "tsx watch",
        dev_dependencies: &[TS_TYPES[0], TS_TYPES[1], TS_TYPES[2], ("tsx", "^4.19.2")],
        entry: EntryDialect {
            imports: "import express, { Request, Response } from 'express';\n\
                      import dotenv from 'dotenv';\n\
                      import cors from 'cors';",
            handler_params: "_req: Request, res: Response",
            export: "export default app;",
        },
    },
    VariantProfile {
        variant: Variant {
            language: Language::TypeScript,
            module_system: ModuleSystem::CommonJs,
        },
        dev_runner: "ts-node-dev --respawn --transpile-only",
        dev_dependencies: &[
            TS_TYPES[0],
            TS_TYPES[1],
            TS_TYPES[2],
            ("ts-node-dev", "^2.0.0"),
        ],
        entry: EntryDialect {
            imports: "import express = require('express');\n\
                      import dotenv = require('dotenv');\n\
                      import cors = require('cors');",
            handler_params: "_req: express.Request, res: express.Response",
            export: "export = app;",
        },
    },
    VariantProfile {
        variant: Variant {
            language: Language::JavaScript,
            module_system: ModuleSystem::Esm,
        },
        dev_runner: "nodemon",
        dev_dependencies: &[("nodemon", "^3.1.7")],
        entry: EntryDialect {
            imports: "import express from 'express';\n\
                      import dotenv from 'dotenv';\n\
                      import cors from 'cors';",
            handler_params: "_req, res",
            export: "export default app;",
        },
    },
    VariantProfile {
        variant: Variant {
            language: Language::JavaScript,
            module_system: ModuleSystem::CommonJs,
        },
        dev_runner: "nodemon",
        dev_dependencies: &[("nodemon", "^3.1.7")],
        entry: EntryDialect {
            imports: "const express = require('express');\n\
                      const dotenv = require('dotenv');\n\
                      const cors = require('cors');",
            handler_params: "_req, res",
            export: "module.exports = app;",
        },
    },
];

/// Look up the profile for a variant
///
/// Every `Variant` value has a row, so this never falls through in practice;
/// the first row is returned if the table is ever left incomplete.
pub fn profile(variant: Variant) -> &'static VariantProfile {
    VARIANTS
        .iter()
        .find(|row| row.variant == variant)
        .unwrap_or(&VARIANTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_exactly_one_row() {
        for variant in Variant::all() {
            let rows = VARIANTS.iter().filter(|row| row.variant == variant).count();
            assert_eq!(rows, 1, "{} should have one row", variant);
            assert_eq!(profile(variant).variant, variant);
        }
    }

    #[test]
    fn test_typescript_rows_carry_compiler() {
        for row in VARIANTS {
            let has_tsc = row
                .dev_dependencies
                .iter()
                .any(|(name, _)| *name == "typescript");
            assert_eq!(has_tsc, row.variant.language.is_typescript());
        }
    }

    #[test]
    fn test_dev_runners() {
        let ts_esm = profile(Variant::new(Language::TypeScript, ModuleSystem::Esm));
        let ts_cjs = profile(Variant::new(Language::TypeScript, ModuleSystem::CommonJs));
        let js_cjs = profile(Variant::new(Language::JavaScript, ModuleSystem::CommonJs));

        assert_eq!(ts_esm.dev_runner, "tsx watch");
        assert!(ts_cjs.dev_runner.starts_with("ts-node-dev"));
        assert_eq!(js_cjs.dev_runner, "nodemon");
    }
}
