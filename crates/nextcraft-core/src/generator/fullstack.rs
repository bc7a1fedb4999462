//! Phases layered on top of the frontend pipeline for fullstack projects

use super::{Phase, PhaseContext};
use crate::error::Result;
use crate::options::Database;
use crate::templates::fullstack as t;

const DIRECTORIES: &[&str] = &["src/app/api", "prisma", "src/lib/db", "src/lib/auth"];

const DEPENDENCIES: &[(&str, &str)] = &[("@prisma/client", "^5.7.0")];
const DEV_DEPENDENCIES: &[(&str, &str)] = &[("prisma", "^5.7.0")];

const AUTH_DEPENDENCIES: &[(&str, &str)] = &[
    ("next-auth", "^4.24.5"),
    ("@auth/prisma-adapter", "^2.7.4"),
    ("bcryptjs", "^2.4.3"),
];
const AUTH_DEV_DEPENDENCIES: &[(&str, &str)] = &[("@types/bcryptjs", "^2.4.6")];

const SCRIPTS: &[(&str, &str)] = &[
    ("db:push", "prisma db push"),
    ("db:studio", "prisma studio"),
    ("db:generate", "prisma generate"),
];

pub struct FullstackStructure;

impl Phase for FullstackStructure {
    fn name(&self) -> &'static str {
        "fullstack-structure"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        for dir in DIRECTORIES {
            ctx.tree.ensure_dir(dir);
        }
        Ok(())
    }
}

/// ORM packages, database scripts and, with auth, the NextAuth stack
pub struct FullstackDependencies {
    pub auth: bool,
}

impl Phase for FullstackDependencies {
    fn name(&self) -> &'static str {
        "fullstack-dependencies"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.manifest.add_dependencies(DEPENDENCIES);
        ctx.manifest.add_dev_dependencies(DEV_DEPENDENCIES);
        if self.auth {
            ctx.manifest.add_dependencies(AUTH_DEPENDENCIES);
            ctx.manifest.add_dev_dependencies(AUTH_DEV_DEPENDENCIES);
        }
        ctx.manifest.add_scripts(SCRIPTS);
        Ok(())
    }
}

/// Environment files, schema and the client singleton
pub struct Prisma {
    pub database: Database,
    pub auth: bool,
}

impl Phase for Prisma {
    fn name(&self) -> &'static str {
        "prisma"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let tree = &mut *ctx.tree;
        tree.write(".env", t::env(self.database, self.auth)?);
        tree.write(".env.example", t::env_example(self.database, self.auth)?);
        tree.write("prisma/schema.prisma", t::schema(self.database, self.auth)?);
        tree.write("src/lib/db/prisma.ts", t::PRISMA_CLIENT);
        Ok(())
    }
}

/// Credentials-based NextAuth configuration and route
pub struct CredentialsAuth;

impl Phase for CredentialsAuth {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.tree
            .write("src/lib/auth/auth-options.ts", t::AUTH_OPTIONS);
        ctx.tree
            .write("src/app/api/auth/[...nextauth]/route.ts", t::NEXTAUTH_ROUTE);
        Ok(())
    }
}

pub struct ApiRoutes;

impl Phase for ApiRoutes {
    fn name(&self) -> &'static str {
        "api-routes"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.tree.write("src/app/api/health/route.ts", t::HEALTH_ROUTE);
        ctx.tree.write("src/app/api/users/route.ts", t::USERS_ROUTE);
        Ok(())
    }
}
