//! Node.js detection and version requirements

use semver::{Version, VersionReq};
use std::process::Command;

/// Oldest Node.js release supported by Next.js 16
pub const MIN_NODE_VERSION: &str = ">=20.9.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_program("node", "Node.js")
}

/// Run `<program> --version` and capture the trimmed output
pub fn check_program(program: &str, name: &'static str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Whether a `node --version` string satisfies [`MIN_NODE_VERSION`].
///
/// Returns `None` when the version cannot be parsed.
pub fn node_meets_minimum(version: &str) -> Option<bool> {
    let version = Version::parse(version.trim().trim_start_matches('v')).ok()?;
    let requirement = VersionReq::parse(MIN_NODE_VERSION).ok()?;
    Some(requirement.matches(&version))
}
