//! Generator pipeline
//!
//! A [`Generator`] is an ordered list of [`Phase`]s. Every phase works on the
//! same staged [`ProjectTree`] and [`PackageManifest`]; nothing reaches the disk
//! until all phases have succeeded.

pub mod frontend;
pub mod fullstack;

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::error::Result;
use crate::features::{next16::Next16Features, tooling::SeniorTooling};
use crate::manifest::PackageManifest;
use crate::options::ProjectOptions;
use crate::project::{CommitSummary, ProjectTree};
use crate::report::Reporter;
use std::path::Path;

pub const PACKAGE_JSON: &str = "package.json";

/// Mutable state shared by the phases of one run
pub struct PhaseContext<'a> {
    pub tree: &'a mut ProjectTree,
    pub manifest: &'a mut PackageManifest,
    pub reporter: &'a dyn Reporter,
}

/// One named step of a generator
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    /// Project-relative files this phase reads, loaded before the run starts
    fn inputs(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()>;
}

/// Result of a successful generator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub phases: Vec<&'static str>,
    pub committed: CommitSummary,
}

/// Ordered composition of phases
#[derive(Default)]
pub struct Generator {
    phases: Vec<Box<dyn Phase>>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Phase list for a new project of the given mode
    pub fn for_project(options: &ProjectOptions) -> Self {
        let generator = Self::new()
            .with_phase(frontend::Structure)
            .with_phase_if(options.is_fullstack(), fullstack::FullstackStructure)
            .with_phase(frontend::BaseDependencies::new(&options.name))
            .with_phase(frontend::UiDependencies(options.ui))
            .with_phase_if(
                options.is_fullstack(),
                fullstack::FullstackDependencies { auth: options.auth },
            )
            .with_phase(frontend::ProjectFiles::new(options))
            .with_phase(frontend::AppShell::new(options));

        let generator = match options.database {
            Some(database) if options.is_fullstack() => generator
                .with_phase(fullstack::Prisma {
                    database,
                    auth: options.auth,
                })
                .with_phase_if(options.auth, fullstack::CredentialsAuth)
                .with_phase(fullstack::ApiRoutes),
            _ => generator,
        };

        generator
            .with_phase(SeniorTooling)
            .with_phase(Next16Features)
            .with_phase(WriteProjectConfig(ProjectConfig::from(options)))
    }

    fn with_phase_if(self, condition: bool, phase: impl Phase + 'static) -> Self {
        if condition {
            self.with_phase(phase)
        } else {
            self
        }
    }

    /// Run every phase in order against `root`, then commit.
    ///
    /// The first failing phase aborts the run and nothing is written.
    pub async fn run(&self, root: &Path, reporter: &dyn Reporter) -> Result<GenerationSummary> {
        let mut inputs: Vec<&str> = vec![PACKAGE_JSON];
        for phase in &self.phases {
            for input in phase.inputs() {
                if !inputs.contains(input) {
                    inputs.push(input);
                }
            }
        }

        let mut tree = ProjectTree::load(root, &inputs).await?;
        let mut manifest = PackageManifest::parse(tree.read(PACKAGE_JSON))?;

        let mut summary = GenerationSummary::default();
        {
            let mut ctx = PhaseContext {
                tree: &mut tree,
                manifest: &mut manifest,
                reporter,
            };
            for phase in &self.phases {
                reporter.step(phase.name());
                phase.run(&mut ctx)?;
                summary.phases.push(phase.name());
            }
        }

        if manifest.is_modified() {
            tree.write(PACKAGE_JSON, manifest.to_json_string()?);
        }

        summary.committed = tree.commit().await?;
        Ok(summary)
    }
}

/// Writes `nextcraft.config.ts` for a new project
pub struct WriteProjectConfig(pub ProjectConfig);

impl Phase for WriteProjectConfig {
    fn name(&self) -> &'static str {
        "project-config"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.tree.write(CONFIG_FILE, self.0.render());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, ScaffoldError};
    use crate::options::{Database, Mode, UiLibrary};
    use crate::report::SilentReporter;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn options(mode: Mode, database: Option<Database>, auth: bool) -> ProjectOptions {
        let (options, _) = ProjectOptions::new(
            "demo",
            mode,
            UiLibrary::Shadcn,
            database,
            PathBuf::from("/tmp/demo"),
        )
        .unwrap();
        options.with_auth(auth)
    }

    #[test]
    fn test_frontend_phase_order() {
        let generator = Generator::for_project(&options(Mode::Frontend, None, false));
        assert_eq!(
            generator.phase_names(),
            vec![
                "structure",
                "base-dependencies",
                "ui-dependencies",
                "project-files",
                "app-shell",
                "senior-tooling",
                "next16-features",
                "project-config",
            ]
        );
    }

    #[test]
    fn test_fullstack_phase_order() {
        let generator =
            Generator::for_project(&options(Mode::Fullstack, Some(Database::Sqlite), true));
        assert_eq!(
            generator.phase_names(),
            vec![
                "structure",
                "fullstack-structure",
                "base-dependencies",
                "ui-dependencies",
                "fullstack-dependencies",
                "project-files",
                "app-shell",
                "prisma",
                "auth",
                "api-routes",
                "senior-tooling",
                "next16-features",
                "project-config",
            ]
        );

        let without_auth =
            Generator::for_project(&options(Mode::Fullstack, Some(Database::Sqlite), false));
        assert!(!without_auth.phase_names().contains(&"auth"));
    }

    struct Writes;

    impl Phase for Writes {
        fn name(&self) -> &'static str {
            "writes"
        }

        fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
            ctx.tree.write("a.txt", "a");
            ctx.manifest.add_dependencies(&[("left-pad", "1.0.0")]);
            Ok(())
        }
    }

    struct Fails;

    impl Phase for Fails {
        fn name(&self) -> &'static str {
            "fails"
        }

        fn run(&self, _ctx: &mut PhaseContext<'_>) -> Result<()> {
            Err(ConfigError::MissingDatabase.into())
        }
    }

    #[tokio::test]
    async fn test_failing_phase_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("app");

        let result = Generator::new()
            .with_phase(Writes)
            .with_phase(Fails)
            .run(&root, &SilentReporter)
            .await;

        assert!(matches!(
            result,
            Err(ScaffoldError::Config(ConfigError::MissingDatabase))
        ));
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_manifest_written_once_at_end() {
        let tmp = TempDir::new().unwrap();
        let summary = Generator::new()
            .with_phase(Writes)
            .run(tmp.path(), &SilentReporter)
            .await
            .unwrap();

        assert_eq!(summary.phases, vec!["writes"]);
        assert_eq!(summary.committed.files, vec!["a.txt", "package.json"]);
        let json = std::fs::read_to_string(tmp.path().join("package.json")).unwrap();
        assert!(json.contains("\"left-pad\": \"1.0.0\""));
    }
}
