//! Phases shared by every project: layout, dependencies, config files, app shell

use super::{Phase, PhaseContext};
use crate::error::Result;
use crate::options::{ProjectOptions, UiLibrary};
use crate::templates::frontend as t;

const DIRECTORIES: &[&str] = &[
    "src/app",
    "src/components",
    "src/lib",
    "src/hooks",
    "src/config",
    "src/types",
    "public",
];

const DEPENDENCIES: &[(&str, &str)] = &[
    ("next", "^16.0.1"),
    ("react", "^19.2.0"),
    ("react-dom", "^19.2.0"),
    ("@tanstack/react-query", "^5.60.0"),
    ("axios", "^1.7.9"),
    ("zustand", "^5.0.3"),
    ("react-hook-form", "^7.54.0"),
    ("@hookform/resolvers", "^3.10.0"),
    ("zod", "^3.24.1"),
    ("class-variance-authority", "^0.7.1"),
    ("clsx", "^2.1.1"),
    ("tailwind-merge", "^2.6.0"),
    ("tailwind-variants", "^0.3.0"),
    ("lucide-react", "^0.460.0"),
    ("framer-motion", "^11.15.0"),
    ("server-only", "^0.0.1"),
    ("client-only", "^0.0.1"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/node", "^22.10.0"),
    ("@types/react", "^19.0.6"),
    ("@types/react-dom", "^19.0.3"),
    ("typescript", "^5.7.0"),
    ("tailwindcss", "^4.1.0"),
    ("@tailwindcss/postcss", "^4.1.0"),
    ("tailwindcss-animate", "^1.0.7"),
    ("postcss", "^8.4.49"),
    ("eslint", "^9.16.0"),
    ("eslint-config-next", "^16.0.1"),
    ("@typescript-eslint/eslint-plugin", "^8.18.0"),
    ("@typescript-eslint/parser", "^8.18.0"),
    ("prettier", "^3.4.2"),
    ("prettier-plugin-tailwindcss", "^0.6.11"),
    ("husky", "^9.1.7"),
    ("lint-staged", "^15.2.11"),
    ("@testing-library/react", "^16.1.0"),
    ("@testing-library/jest-dom", "^6.6.3"),
    ("vitest", "^2.1.8"),
    ("@vitejs/plugin-react", "^4.3.4"),
    ("babel-plugin-react-compiler", "^1.0.0"),
];

const SCRIPTS: &[(&str, &str)] = &[
    ("dev", "next dev"),
    ("build", "next build"),
    ("start", "next start"),
    ("lint", "eslint ."),
];

pub struct Structure;

impl Phase for Structure {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        for dir in DIRECTORIES {
            ctx.tree.ensure_dir(dir);
        }
        Ok(())
    }
}

/// Package identity, core scripts and the Next.js 16 / React 19 stack
pub struct BaseDependencies {
    name: String,
}

impl BaseDependencies {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Phase for BaseDependencies {
    fn name(&self) -> &'static str {
        "base-dependencies"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let manifest = &mut *ctx.manifest;
        manifest.set_default("name", self.name.as_str());
        manifest.set_default("version", "0.1.0");
        manifest.set_default("private", true);
        manifest.add_scripts(SCRIPTS);
        manifest.add_dependencies(DEPENDENCIES);
        manifest.add_dev_dependencies(DEV_DEPENDENCIES);
        Ok(())
    }
}

pub struct UiDependencies(pub UiLibrary);

impl Phase for UiDependencies {
    fn name(&self) -> &'static str {
        "ui-dependencies"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        ctx.manifest.add_dependencies(self.0.dependencies());
        Ok(())
    }
}

/// Framework, TypeScript, styling and site configuration files
pub struct ProjectFiles {
    name: String,
    ui: UiLibrary,
    seo: bool,
}

impl ProjectFiles {
    pub fn new(options: &ProjectOptions) -> Self {
        Self {
            name: options.name.clone(),
            ui: options.ui,
            seo: options.seo,
        }
    }
}

impl Phase for ProjectFiles {
    fn name(&self) -> &'static str {
        "project-files"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let tree = &mut *ctx.tree;
        tree.write("next.config.ts", t::NEXT_CONFIG);
        tree.write("tsconfig.json", t::TSCONFIG);
        tree.write("next-env.d.ts", t::NEXT_ENV);
        tree.write("postcss.config.mjs", t::POSTCSS_CONFIG);
        tree.write("src/app/globals.css", t::GLOBALS_CSS);
        tree.write(".gitignore", t::GITIGNORE);
        tree.write(".env.example", t::ENV_EXAMPLE);
        tree.write("src/lib/utils.ts", t::UTILS);
        tree.write("src/config/site.ts", t::site_config(&self.name)?);

        if self.ui == UiLibrary::Shadcn {
            tree.write("components.json", t::SHADCN_COMPONENTS_JSON);
        }

        if self.seo {
            tree.write("src/app/sitemap.ts", t::SITEMAP);
            tree.write("src/app/robots.ts", t::ROBOTS);
        }
        Ok(())
    }
}

/// Root layout, home page, providers and the client-side data layer
pub struct AppShell {
    options: ProjectOptions,
}

impl AppShell {
    pub fn new(options: &ProjectOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }
}

impl Phase for AppShell {
    fn name(&self) -> &'static str {
        "app-shell"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let tree = &mut *ctx.tree;
        tree.write("src/app/layout.tsx", t::layout(&self.options)?);
        tree.write("src/app/page.tsx", t::home_page(&self.options.name)?);
        tree.write(
            "src/components/providers.tsx",
            t::providers(self.options.ui, self.options.rtl)?,
        );
        tree.write("src/lib/api-client.ts", t::API_CLIENT);
        tree.write("src/hooks/use-fetch.ts", t::USE_FETCH);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::PackageManifest;
    use crate::options::Mode;
    use crate::project::ProjectTree;
    use crate::report::SilentReporter;
    use std::path::PathBuf;

    fn run(phase: &dyn Phase, tree: &mut ProjectTree, manifest: &mut PackageManifest) {
        let mut ctx = PhaseContext {
            tree,
            manifest,
            reporter: &SilentReporter,
        };
        phase.run(&mut ctx).unwrap();
    }

    fn options(ui: UiLibrary, seo: bool) -> ProjectOptions {
        let (options, _) =
            ProjectOptions::new("demo", Mode::Frontend, ui, None, PathBuf::from("/tmp/demo"))
                .unwrap();
        options.with_seo(seo)
    }

    #[test]
    fn test_base_dependencies() {
        let mut tree = ProjectTree::new("/tmp/demo");
        let mut manifest = PackageManifest::parse(None).unwrap();
        run(&BaseDependencies::new("demo"), &mut tree, &mut manifest);

        assert_eq!(manifest.dependency("next"), Some("^16.0.1"));
        assert_eq!(manifest.dependency("react"), Some("^19.2.0"));
        assert_eq!(manifest.dev_dependency("tailwindcss"), Some("^4.1.0"));
        assert_eq!(manifest.script("dev"), Some("next dev"));
    }

    #[test]
    fn test_project_files_follow_options() {
        let mut tree = ProjectTree::new("/tmp/demo");
        let mut manifest = PackageManifest::parse(None).unwrap();
        run(
            &ProjectFiles::new(&options(UiLibrary::Chakra, false)),
            &mut tree,
            &mut manifest,
        );
        assert!(tree.exists("next.config.ts"));
        assert!(!tree.exists("components.json"));
        assert!(!tree.exists("src/app/sitemap.ts"));

        let mut tree = ProjectTree::new("/tmp/demo");
        run(
            &ProjectFiles::new(&options(UiLibrary::Shadcn, true)),
            &mut tree,
            &mut manifest,
        );
        assert!(tree.exists("components.json"));
        assert!(tree.exists("src/app/sitemap.ts"));
        assert!(tree.exists("src/app/robots.ts"));
    }
}
