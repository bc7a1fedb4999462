//! Feature generators for existing projects (`forge add <module>`)
//!
//! Each feature is a phase list run through the same [`Generator`] as project
//! creation, so a failing feature leaves the project untouched.

pub mod auth;
pub mod next16;
pub mod resource;
pub mod tooling;

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::error::{ConfigError, Result};
use crate::fs;
use crate::generator::{GenerationSummary, Generator, Phase, PhaseContext, PACKAGE_JSON};
use crate::report::Reporter;
use crate::runtime::run_with_timeout;
use crate::templates::resource::ResourceName;
use std::path::Path;
use std::time::Duration;

/// Module names accepted by `forge add`
pub const AVAILABLE_MODULES: &[&str] = &["auth", "resource", "next16", "senior"];

const PRISMA_GENERATE_TIMEOUT: Duration = Duration::from_secs(120);

/// A module that can be layered onto an existing project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Auth,
    Resource(ResourceName),
    Next16,
    Senior,
}

impl Feature {
    /// Resolve a module name and its optional argument
    pub fn parse(module: &str, argument: Option<&str>) -> Result<Self, ConfigError> {
        match module.to_lowercase().as_str() {
            "auth" => Ok(Feature::Auth),
            "next16" => Ok(Feature::Next16),
            "senior" => Ok(Feature::Senior),
            "resource" => {
                let name = argument
                    .ok_or_else(|| ConfigError::MissingModuleArgument("resource".to_string()))?;
                if !is_valid_resource_name(name) {
                    return Err(ConfigError::InvalidResourceName(name.to_string()));
                }
                Ok(Feature::Resource(ResourceName::new(name)))
            }
            _ => Err(ConfigError::UnknownModule {
                name: module.to_string(),
                available: AVAILABLE_MODULES.join(", "),
            }),
        }
    }

    pub fn module_name(&self) -> &'static str {
        match self {
            Feature::Auth => "auth",
            Feature::Resource(_) => "resource",
            Feature::Next16 => "next16",
            Feature::Senior => "senior",
        }
    }

    pub fn generator(&self) -> Generator {
        match self {
            Feature::Auth => Generator::new()
                .with_phase(auth::AuthDependencies)
                .with_phase(auth::AuthFiles)
                .with_phase(auth::PrismaSchema)
                .with_phase(auth::AuthEnv)
                .with_phase(RecordModule("auth")),
            Feature::Resource(name) => {
                Generator::new().with_phase(resource::ResourceFiles(name.clone()))
            }
            Feature::Next16 => Generator::new()
                .with_phase(next16::Next16Features)
                .with_phase(RecordModule("next16")),
            Feature::Senior => Generator::new()
                .with_phase(tooling::SeniorTooling)
                .with_phase(RecordModule("senior")),
        }
    }
}

/// Resource names become identifiers and routes: a letter, then letters or digits
pub fn is_valid_resource_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy)]
pub struct AddOptions {
    /// Run `npx prisma generate` after the auth feature is written
    pub generate_client: bool,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self {
            generate_client: true,
        }
    }
}

/// Apply a feature to the project at `root`
pub async fn add_feature(
    root: &Path,
    feature: &Feature,
    options: AddOptions,
    reporter: &dyn Reporter,
) -> Result<GenerationSummary> {
    if !fs::file_exists(&root.join(PACKAGE_JSON)).await {
        return Err(ConfigError::NotAProject(root.to_path_buf()).into());
    }

    let summary = feature.generator().run(root, reporter).await?;
    for file in &summary.committed.files {
        reporter.info(&format!("Wrote {file}"));
    }

    if *feature == Feature::Auth && options.generate_client {
        reporter.step("Generating Prisma Client");
        match run_with_timeout(
            "npx",
            &["prisma", "generate"],
            root,
            PRISMA_GENERATE_TIMEOUT,
            reporter,
        )
        .await
        {
            Ok(()) => reporter.success("Prisma Client generated"),
            Err(e) => reporter.warn(&format!(
                "{e}. You may need to run \"npx prisma generate\" manually."
            )),
        }
    }

    reporter.success(&format!("{} module added", feature.module_name()));
    for step in next_steps(feature) {
        reporter.info(step);
    }

    Ok(summary)
}

fn next_steps(feature: &Feature) -> &'static [&'static str] {
    match feature {
        Feature::Auth => &[
            "Next steps:",
            "1. Add GITHUB_CLIENT_ID and GITHUB_CLIENT_SECRET to your .env",
            "2. Add GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET to your .env",
            "3. Set AUTH_SECRET in your .env",
            "4. Install the new dependencies and run \"npx prisma db push\"",
        ],
        Feature::Resource(_) => &[],
        Feature::Next16 => &["See NEXTJS_16.md for the features added to this project"],
        Feature::Senior => &[
            "Next steps:",
            "1. Install the new dev dependencies",
            "2. Run the \"validate\" script to lint, type check and test",
        ],
    }
}

/// Adds a module to `nextcraft.config.ts` when the project has one
pub struct RecordModule(pub &'static str);

impl Phase for RecordModule {
    fn name(&self) -> &'static str {
        "record-module"
    }

    fn inputs(&self) -> &'static [&'static str] {
        &[CONFIG_FILE]
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let Some(source) = ctx.tree.read(CONFIG_FILE) else {
            return Ok(());
        };

        let mut config = match ProjectConfig::parse(source) {
            Ok(config) => config,
            Err(e) => {
                ctx.reporter
                    .warn(&format!("{e}; not recording the {} module", self.0));
                return Ok(());
            }
        };

        if config.add_module(self.0) {
            ctx.tree.write(CONFIG_FILE, config.render());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modules() {
        assert_eq!(Feature::parse("auth", None).unwrap(), Feature::Auth);
        assert_eq!(Feature::parse("Senior", None).unwrap(), Feature::Senior);
        assert_eq!(
            Feature::parse("resource", Some("Post")).unwrap(),
            Feature::Resource(ResourceName::new("post"))
        );
    }

    #[test]
    fn test_unknown_module_lists_available() {
        let err = Feature::parse("blog", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown module 'blog'. Available modules: auth, resource, next16, senior"
        );
    }

    #[test]
    fn test_resource_requires_valid_name() {
        assert!(matches!(
            Feature::parse("resource", None),
            Err(ConfigError::MissingModuleArgument(_))
        ));
        assert!(matches!(
            Feature::parse("resource", Some("blog-post")),
            Err(ConfigError::InvalidResourceName(_))
        ));
        assert!(matches!(
            Feature::parse("resource", Some("1post")),
            Err(ConfigError::InvalidResourceName(_))
        ));
    }

    #[test]
    fn test_feature_phase_lists() {
        assert_eq!(
            Feature::Auth.generator().phase_names(),
            vec!["auth-dependencies", "auth-files", "prisma-schema", "auth-env", "record-module"]
        );
        assert_eq!(
            Feature::Senior.generator().phase_names(),
            vec!["senior-tooling", "record-module"]
        );
    }
}
