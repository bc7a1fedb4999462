//! CRUD resource scaffolding (`forge generate resource <name>`)

use crate::error::Result;
use crate::generator::{Phase, PhaseContext};
use crate::templates::auth::declares_model;
use crate::templates::resource::ResourceName;

const SCHEMA: &str = "prisma/schema.prisma";

pub struct ResourceFiles(pub ResourceName);

impl Phase for ResourceFiles {
    fn name(&self) -> &'static str {
        "resource"
    }

    fn inputs(&self) -> &'static [&'static str] {
        &[SCHEMA]
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        for (path, content) in self.0.files()? {
            ctx.tree.write(&path, content);
        }
        ctx.manifest.add_dependencies(&[("sonner", "^1.7.1")]);

        let declared = ctx
            .tree
            .read(SCHEMA)
            .map(|schema| declares_model(schema, &self.0.pascal))
            .unwrap_or(false);
        if !declared {
            ctx.reporter.warn(&format!(
                "Don't forget to add the {} model to prisma/schema.prisma:",
                self.0.pascal
            ));
            ctx.reporter.info(&self.0.model()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::PackageManifest;
    use crate::project::ProjectTree;
    use crate::report::{Level, RecordingReporter};

    fn run(tree: &mut ProjectTree, reporter: &RecordingReporter) {
        let mut manifest = PackageManifest::parse(None).unwrap();
        let mut ctx = PhaseContext {
            tree,
            manifest: &mut manifest,
            reporter,
        };
        ResourceFiles(ResourceName::new("post"))
            .run(&mut ctx)
            .unwrap();
    }

    #[test]
    fn test_model_reminder_without_schema() {
        let mut tree = ProjectTree::new("/tmp/demo");
        let reporter = RecordingReporter::new();
        run(&mut tree, &reporter);

        assert!(tree.exists("src/app/posts/page.tsx"));
        assert_eq!(reporter.at(Level::Warn).len(), 1);
        assert!(reporter
            .at(Level::Info)
            .iter()
            .any(|m| m.starts_with("model Post {")));
    }

    #[test]
    fn test_no_reminder_when_model_exists() {
        let mut tree = ProjectTree::new("/tmp/demo");
        tree.write(SCHEMA, "model Post {\n  id String @id\n}\n");
        let reporter = RecordingReporter::new();
        run(&mut tree, &reporter);

        assert!(reporter.at(Level::Warn).is_empty());
    }
}
