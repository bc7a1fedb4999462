//! Code quality tooling: prettier, eslint, husky, commitlint, vitest, editor and CI

use crate::error::Result;
use crate::generator::{Phase, PhaseContext};
use crate::templates::tooling as t;

pub struct SeniorTooling;

impl Phase for SeniorTooling {
    fn name(&self) -> &'static str {
        "senior-tooling"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let tree = &mut *ctx.tree;
        tree.write(".prettierrc", t::PRETTIER_CONFIG);
        tree.write(".prettierignore", t::PRETTIER_IGNORE);
        tree.write("eslint.config.mjs", t::ESLINT_CONFIG);
        tree.write("tsconfig.json", t::TSCONFIG_STRICT);

        tree.write_executable(".husky/pre-commit", t::HUSKY_PRE_COMMIT);
        tree.write(".lintstagedrc", t::LINT_STAGED);
        tree.write("commitlint.config.mjs", t::COMMITLINT_CONFIG);

        tree.write("vitest.config.ts", t::VITEST_CONFIG);
        tree.write("vitest.setup.ts", t::VITEST_SETUP);
        tree.write("__tests__/example.test.tsx", t::EXAMPLE_TEST);

        tree.write(".editorconfig", t::EDITORCONFIG);
        tree.write(".vscode/settings.json", t::VSCODE_SETTINGS);
        tree.write(".vscode/extensions.json", t::VSCODE_EXTENSIONS);
        tree.write(".github/workflows/ci.yml", t::CI_WORKFLOW);

        ctx.manifest.add_dev_dependencies(t::DEV_DEPENDENCIES);
        ctx.manifest.add_scripts(t::SCRIPTS);
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
    fn test_pre_commit_hook_is_executable() {
        let mut tree = ProjectTree::new("/tmp/demo");
        let mut manifest = PackageManifest::parse(None).unwrap();
        let mut ctx = PhaseContext {
            tree: &mut tree,
            manifest: &mut manifest,
            reporter: &SilentReporter,
        };
        SeniorTooling.run(&mut ctx).unwrap();

        let hook = tree
            .staged_files()
            .find(|f| f.relative_path == ".husky/pre-commit")
            .unwrap();
        assert!(hook.executable);
        assert_eq!(manifest.script("typecheck"), Some("tsc --noEmit"));
        assert_eq!(manifest.script("prepare"), Some("husky"));
    }
}
