//! Node package manager detection and command lines

use std::fmt;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lock", PackageManager::Bun),
    ("bun.lockb", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Detect the package manager for a project.
    ///
    /// Order: the invoking package manager (`npm_config_user_agent`), a lockfile
    /// in `project`, the first of pnpm, yarn and bun found on PATH, then npm.
    pub fn detect(project: Option<&Path>) -> Self {
        if let Some(pm) = std::env::var("npm_config_user_agent")
            .ok()
            .and_then(|ua| Self::from_user_agent(&ua))
        {
            return pm;
        }

        if let Some(pm) = project.and_then(Self::from_lockfile) {
            return pm;
        }

        [PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Bun]
            .into_iter()
            .find(|pm| pm.is_installed())
            .unwrap_or(PackageManager::Npm)
    }

    /// Parse `npm_config_user_agent`, e.g. `pnpm/9.1.0 npm/? node/v22.1.0 linux x64`
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        let agent = user_agent.split('/').next()?.trim();
        match agent {
            "pnpm" => Some(PackageManager::Pnpm),
            "yarn" => Some(PackageManager::Yarn),
            "bun" => Some(PackageManager::Bun),
            "npm" => Some(PackageManager::Npm),
            _ => None,
        }
    }

    pub fn from_lockfile(project: &Path) -> Option<Self> {
        LOCKFILES
            .iter()
            .find(|(file, _)| project.join(file).is_file())
            .map(|(_, pm)| *pm)
    }

    fn is_installed(&self) -> bool {
        Command::new(self.as_str())
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    pub fn install_args(&self) -> Vec<&'static str> {
        match self {
            PackageManager::Yarn => vec![],
            _ => vec!["install"],
        }
    }

    /// Arguments that run a package.json script
    pub fn run_args<'a>(&self, script: &'a str) -> Vec<&'a str> {
        match self {
            PackageManager::Npm => vec!["run", script],
            _ => vec![script],
        }
    }

    pub fn install_command(&self) -> String {
        join(self.as_str(), &self.install_args())
    }

    pub fn run_command(&self, script: &str) -> String {
        join(self.as_str(), &self.run_args(script))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn join(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_user_agent() {
        assert_eq!(
            PackageManager::from_user_agent("pnpm/9.1.0 npm/? node/v22.1.0 linux x64"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(
            PackageManager::from_user_agent("npm/10.2.0 node/v20.9.0 darwin arm64"),
            Some(PackageManager::Npm)
        );
        assert_eq!(
            PackageManager::from_user_agent("bun/1.1.0"),
            Some(PackageManager::Bun)
        );
        assert_eq!(PackageManager::from_user_agent("deno/2.0"), None);
    }

    #[test]
    fn test_from_lockfile() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(PackageManager::from_lockfile(tmp.path()), None);

        std::fs::write(tmp.path().join("yarn.lock"), "").unwrap();
        assert_eq!(
            PackageManager::from_lockfile(tmp.path()),
            Some(PackageManager::Yarn)
        );
    }

    #[test]
    fn test_command_lines() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
        assert_eq!(PackageManager::Npm.run_command("dev"), "npm run dev");
        assert_eq!(PackageManager::Pnpm.run_command("dev"), "pnpm dev");
    }
}
