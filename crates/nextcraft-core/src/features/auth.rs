//! Auth.js v5 with GitHub and Google providers backed by the Prisma adapter

use crate::error::Result;
use crate::generator::{Phase, PhaseContext};
use crate::templates::auth as t;

const SCHEMA: &str = "prisma/schema.prisma";
const ENV: &str = ".env";

const DEPENDENCIES: &[(&str, &str)] = &[
    ("next-auth", "^5.0.0-beta.25"),
    ("@auth/prisma-adapter", "^2.7.4"),
    ("@prisma/client", "^5.7.0"),
];
const DEV_DEPENDENCIES: &[(&str, &str)] = &[("prisma", "^5.7.0")];

pub struct AuthDependencies;

impl Phase for AuthDependencies {
    fn name(&self) -> &'static str {
        "auth-dependencies"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.manifest.add_dependencies(DEPENDENCIES);
        ctx.manifest.add_dev_dependencies(DEV_DEPENDENCIES);
        Ok(())
    }
}

pub struct AuthFiles;

impl Phase for AuthFiles {
    fn name(&self) -> &'static str {
        "auth-files"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.tree.write("src/lib/auth.ts", t::AUTH_CONFIG);
        ctx.tree
            .write("src/app/api/auth/[...nextauth]/route.ts", t::AUTH_ROUTE);
        Ok(())
    }
}

/// Adds the adapter models the schema does not declare yet
pub struct PrismaSchema;

impl Phase for PrismaSchema {
    fn name(&self) -> &'static str {
        "prisma-schema"
    }

    fn inputs(&self) -> &'static [&'static str] {
        &[SCHEMA]
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let existing = ctx.tree.read(SCHEMA);
        if existing.is_none() {
            ctx.reporter
                .info("No prisma/schema.prisma found, creating a SQLite schema");
        }

        let current = existing.unwrap_or(t::BASE_SCHEMA);
        let merged = t::merge_models(current);
        if existing != Some(merged.as_str()) {
            ctx.tree.write(SCHEMA, merged);
        }
        Ok(())
    }
}

/// Appends missing auth placeholders to `.env`
pub struct AuthEnv;

impl Phase for AuthEnv {
    fn name(&self) -> &'static str {
        "auth-env"
    }

    fn inputs(&self) -> &'static [&'static str] {
        &[ENV]
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let existing = ctx.tree.read(ENV);
        let merged = t::merge_env(existing.unwrap_or_default());
        if existing != Some(merged.as_str()) {
            ctx.tree.write(ENV, merged);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::PackageManifest;
    use crate::project::ProjectTree;
    use crate::report::SilentReporter;

    #[test]
    fn test_schema_created_when_missing() {
        let mut tree = ProjectTree::new("/tmp/demo");
        let mut manifest = PackageManifest::parse(None).unwrap();
        let mut ctx = PhaseContext {
            tree: &mut tree,
            manifest: &mut manifest,
            reporter: &SilentReporter,
        };
        PrismaSchema.run(&mut ctx).unwrap();
        AuthEnv.run(&mut ctx).unwrap();

        let schema = tree.read(SCHEMA).unwrap();
        assert!(schema.contains("provider = \"sqlite\""));
        for (model, _) in t::MODELS {
            assert!(t::declares_model(schema, model));
        }
        assert!(tree.read(ENV).unwrap().starts_with("NEXTAUTH_URL="));
    }
}
