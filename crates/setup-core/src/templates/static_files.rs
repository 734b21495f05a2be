//! Fixed-content files: .env and .gitignore

pub const ENV_FILE_NAME: &str = ".env";
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

pub const ENV: &str = "# Server Configuration
PORT=3000
NODE_ENV=development

# Database Configuration
# DB_HOST=localhost
# DB_PORT=5432
# DB_NAME=myapp
# DB_USER=postgres
# DB_PASSWORD=password

# JWT Secret
# JWT_SECRET=your-secret-key
# JWT_EXPIRES_IN=7d

# API Keys
# API_KEY=your-api-key
";

pub const GITIGNORE: &str = "# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*

# Build output
dist/
build/
*.tsbuildinfo

# Environment variables
.env
.env.local
.env.*.local

# IDE
.vscode/
.idea/
*.swp
*.swo
*~
.DS_Store

# Logs
logs/
*.log

# Testing
coverage/
.nyc_output/

# Misc
.cache/
.temp/
.tmp/
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_has_only_port_and_node_env_active() {
        let active: Vec<&str> = ENV
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        assert_eq!(active, vec!["PORT=3000", "NODE_ENV=development"]);
        assert!(ENV.contains("# JWT_SECRET="));
    }

    #[test]
    fn test_gitignore_covers_build_and_env() {
        for entry in ["node_modules/", "dist/", ".env", "coverage/", ".cache/"] {
            assert!(GITIGNORE.lines().any(|line| line == entry), "{}", entry);
        }
    }
}
