use anyhow::Result;
use colored::Colorize;
use nextcraft_core::runtime::{check_node, node_meets_minimum, MIN_NODE_VERSION};
use nextcraft_core::validate;
use std::path::Path;

enum CheckResult {
    Ok(String),
    Warning(String),
    Error(String),
}

/// Validate the project structure and print a report.
///
/// Errors fail the command; warnings and the Node.js check are advisory.
pub async fn run(dir: &Path) -> Result<()> {
    println!("{}", "NextCraft Doctor - Checking project health".bold());
    println!();

    let report = validate(dir).await;

    check("Project mode", || match report.mode.as_mode() {
        Some(mode) => CheckResult::Ok(mode.to_string()),
        None => CheckResult::Error("could not detect".into()),
    });
    for error in &report.errors {
        check("Structure", || CheckResult::Error(error.clone()));
    }
    for warning in &report.warnings {
        check("Structure", || CheckResult::Warning(warning.clone()));
    }
    check("Node.js", node_check);

    println!();
    if report.valid {
        println!(
            "{} {}",
            "✓".green(),
            format!("Project structure is valid ({} warnings)", report.warnings.len()).green()
        );
        Ok(())
    } else {
        anyhow::bail!("Project structure is invalid ({} errors)", report.errors.len())
    }
}

fn node_check() -> CheckResult {
    let node = check_node();
    let Some(version) = node.version.filter(|_| node.available) else {
        return CheckResult::Warning("not found. Install Node.js 20.9 or newer".into());
    };

    match node_meets_minimum(&version) {
        Some(true) => CheckResult::Ok(version),
        Some(false) => CheckResult::Warning(format!("{version} does not satisfy {MIN_NODE_VERSION}")),
        None => CheckResult::Warning(format!("could not parse version {version}")),
    }
}

fn check(name: &str, f: impl FnOnce() -> CheckResult) {
    match f() {
        CheckResult::Ok(msg) => {
            println!("  {} {} - {}", "✓".green(), name, msg.dimmed());
        }
        CheckResult::Warning(msg) => {
            println!("  {} {} - {}", "!".yellow(), name, msg.yellow());
        }
        CheckResult::Error(msg) => {
            println!("  {} {} - {}", "x".red(), name, msg.red());
        }
    }
}
