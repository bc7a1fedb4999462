//! `nextcraft.config.ts` reading and writing
//!
//! The file is a TypeScript object literal. Its body is close enough to YAML
//! flow syntax that, once comment lines and trailing commas are removed,
//! `serde_yaml` reads it directly.

use crate::error::ConfigError;
use crate::options::{Database, Mode, ProjectOptions, UiLibrary};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "nextcraft.config.ts";

/// Modules recorded in the config after `forge add`
pub const RECORDED_MODULES: &[&str] = &["auth", "next16", "senior"];

/// Persisted project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub mode: Mode,
    pub ui: UiLibrary,
    #[serde(default)]
    pub db: Option<Database>,
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default = "default_seo")]
    pub seo: bool,
    #[serde(default)]
    pub modules: Vec<String>,
}

fn default_seo() -> bool {
    true
}

impl From<&ProjectOptions> for ProjectConfig {
    fn from(options: &ProjectOptions) -> Self {
        let mut modules = Vec::new();
        if options.auth {
            modules.push("auth".to_string());
        }
        Self {
            mode: options.mode,
            ui: options.ui,
            db: options.database,
            auth: options.auth,
            rtl: options.rtl,
            seo: options.seo,
            modules,
        }
    }
}

impl ProjectConfig {
    /// Parse the contents of `nextcraft.config.ts`
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let start = source.find('{').ok_or_else(|| {
            ConfigError::InvalidProjectConfig("no configuration object found".to_string())
        })?;
        let end = source.rfind('}').filter(|end| *end > start).ok_or_else(|| {
            ConfigError::InvalidProjectConfig("unterminated configuration object".to_string())
        })?;

        let body: Vec<&str> = source[start + 1..end]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .map(|line| line.trim_end_matches(','))
            .collect();

        serde_yaml::from_str(&body.join("\n"))
            .map_err(|e| ConfigError::InvalidProjectConfig(e.to_string()))
    }

    /// Whether `module` is already recorded
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }

    /// Record a module; returns false when it was already present
    pub fn add_module(&mut self, module: &str) -> bool {
        if self.has_module(module) {
            return false;
        }
        self.modules.push(module.to_string());
        true
    }

    /// Render the TypeScript source
    pub fn render(&self) -> String {
        let mut out = String::from(
            "/**\n * NextCraft Configuration\n *\n * Records the mode and features this project was generated with.\n * `forge doctor` compares it against the project structure.\n */\nconst nextcraftConfig = {\n",
        );

        out.push_str("  // Project mode: 'frontend' for UI-only, 'fullstack' for complete app\n");
        out.push_str(&format!("  mode: '{}',\n\n", self.mode));
        out.push_str("  // UI framework: 'shadcn', 'chakra', or 'material'\n");
        out.push_str(&format!("  ui: '{}',\n\n", self.ui));
        if let Some(db) = self.db {
            out.push_str("  // Database provider (fullstack only)\n");
            out.push_str(&format!("  db: '{}',\n\n", db));
        }
        out.push_str("  // Enable authentication with Auth.js\n");
        out.push_str(&format!("  auth: {},\n\n", self.auth));
        out.push_str("  // Enable Right-to-Left (RTL) support\n");
        out.push_str(&format!("  rtl: {},\n\n", self.rtl));
        out.push_str("  // Enable SEO optimization (metadata, sitemap, robots)\n");
        out.push_str(&format!("  seo: {},\n", self.seo));
        if !self.modules.is_empty() {
            let modules: Vec<String> = self.modules.iter().map(|m| format!("'{m}'")).collect();
            out.push_str("\n  // Installed modules\n");
            out.push_str(&format!("  modules: [{}],\n", modules.join(", ")));
        }
        out.push_str("} as const\n\nexport default nextcraftConfig\n");
        out
    }
}
