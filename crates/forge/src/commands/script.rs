use anyhow::{anyhow, Result};
use nextcraft_core::runtime::run_inherited;
use nextcraft_core::{ConfigError, PackageManager, Reporter};
use std::path::Path;

/// Run a package.json script, installing dependencies first when `node_modules` is missing
pub async fn run(dir: &Path, script: &str, reporter: &dyn Reporter) -> Result<()> {
    if !dir.join("package.json").is_file() {
        return Err(ConfigError::NotAProject(dir.to_path_buf()).into());
    }

    let pm = PackageManager::detect(Some(dir));

    if !dir.join("node_modules").is_dir() {
        reporter.step(&format!("Installing dependencies with {}", pm.as_str()));
        run_inherited(pm.as_str(), &pm.install_args(), dir)
            .await
            .map_err(|e| anyhow!("Dependency installation failed: {e}"))?;
        reporter.success("Dependencies installed");
    }

    reporter.step(&pm.run_command(script));
    run_inherited(pm.as_str(), &pm.run_args(script), dir).await?;
    Ok(())
}
