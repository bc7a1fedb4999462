use anyhow::Result;
use nextcraft_core::{add_feature, AddOptions, Feature, Reporter};
use std::path::Path;

/// Layer a module onto the project in `dir`
pub async fn run(
    dir: &Path,
    module: &str,
    name: Option<&str>,
    skip_generate: bool,
    reporter: &dyn Reporter,
) -> Result<()> {
    let feature = Feature::parse(module, name)?;
    let options = AddOptions {
        generate_client: !skip_generate,
    };

    let summary = add_feature(dir, &feature, options, reporter).await?;
    reporter.info(&format!("{} files written", summary.committed.files.len()));
    Ok(())
}
