//! Project structure validation (`forge doctor`)

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::fs;
use crate::options::Mode;
use std::fmt;
use std::path::Path;

const ESSENTIAL_FILES: &[&str] = &["package.json", "next.config.ts", "tsconfig.json"];

const FULLSTACK_MARKERS: &[&str] = &["prisma/schema.prisma", "src/app/api/auth", "src/lib/db/prisma.ts"];

const FRONTEND_REQUIRED: &[&str] = &[
    "src/app/layout.tsx",
    "src/app/page.tsx",
    "src/components",
    "src/lib",
    "src/hooks",
];

const FRONTEND_UNEXPECTED: &[&str] = &[
    "prisma/schema.prisma",
    "src/lib/db/prisma.ts",
    "src/app/api/auth/[...nextauth]",
];

const FULLSTACK_REQUIRED: &[&str] = &[
    "src/app/layout.tsx",
    "src/app/page.tsx",
    "src/components",
    "src/lib",
    "prisma/schema.prisma",
    "src/lib/db/prisma.ts",
    "src/app/api",
    ".env.example",
];

/// Mode inferred from the files present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedMode {
    Frontend,
    Fullstack,
    Unknown,
}

impl DetectedMode {
    pub fn as_mode(&self) -> Option<Mode> {
        match self {
            DetectedMode::Frontend => Some(Mode::Frontend),
            DetectedMode::Fullstack => Some(Mode::Fullstack),
            DetectedMode::Unknown => None,
        }
    }
}

impl fmt::Display for DetectedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedMode::Frontend => write!(f, "frontend"),
            DetectedMode::Fullstack => write!(f, "fullstack"),
            DetectedMode::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub mode: DetectedMode,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            mode: DetectedMode::Unknown,
        }
    }

    fn error(&mut self, message: String) {
        self.valid = false;
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Validate the project at `root` against the layout of its detected mode
pub async fn validate(root: &Path) -> ValidationReport {
    let mut report = ValidationReport::new();

    for file in ESSENTIAL_FILES {
        if !fs::file_exists(&root.join(file)).await {
            report.error(format!("Missing required file: {file}"));
        }
    }
    if !fs::file_exists(&root.join(CONFIG_FILE)).await {
        report.warn(format!("Missing {CONFIG_FILE} (optional)"));
    }

    report.mode = detect_mode(root).await;
    match report.mode {
        DetectedMode::Frontend => validate_frontend(root, &mut report).await,
        DetectedMode::Fullstack => validate_fullstack(root, &mut report).await,
        DetectedMode::Unknown => report.error("Could not detect project mode".to_string()),
    }

    if let Some(detected) = report.mode.as_mode() {
        if let Some(config) = read_config(root).await {
            if config.mode != detected {
                report.warn(format!(
                    "{CONFIG_FILE} declares {} mode but the project structure looks like {}",
                    config.mode, detected
                ));
            }
        }
    }

    report
}

/// Fullstack markers win over a bare `src/app`
pub async fn detect_mode(root: &Path) -> DetectedMode {
    for marker in FULLSTACK_MARKERS {
        if fs::file_exists(&root.join(marker)).await {
            return DetectedMode::Fullstack;
        }
    }
    if fs::file_exists(&root.join("src/app")).await {
        return DetectedMode::Frontend;
    }
    DetectedMode::Unknown
}

async fn validate_frontend(root: &Path, report: &mut ValidationReport) {
    require_all(root, FRONTEND_REQUIRED, report).await;

    for path in FRONTEND_UNEXPECTED {
        if fs::file_exists(&root.join(path)).await {
            report.warn(format!(
                "Frontend mode should not have: {path} (consider using fullstack mode)"
            ));
        }
    }

    if !fs::file_exists(&root.join("src/lib/api-client.ts")).await {
        report.warn("Missing src/lib/api-client.ts - recommended for API calls".to_string());
    }
}

async fn validate_fullstack(root: &Path, report: &mut ValidationReport) {
    require_all(root, FULLSTACK_REQUIRED, report).await;

    if !fs::file_exists(&root.join("src/app/api/health/route.ts")).await {
        report.warn("Missing health check API route".to_string());
    }
    if !fs::file_exists(&root.join(".env")).await {
        report.warn("Missing .env file - copy from .env.example and configure".to_string());
    }
}

async fn require_all(root: &Path, paths: &[&str], report: &mut ValidationReport) {
    for path in paths {
        if !fs::file_exists(&root.join(path)).await {
            report.error(format!("Missing required file/directory: {path}"));
        }
    }
}

async fn read_config(root: &Path) -> Option<ProjectConfig> {
    let source = fs::read_file(&root.join(CONFIG_FILE)).await.ok()?;
    ProjectConfig::parse(&source).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[tokio::test]
    async fn test_empty_directory_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let report = validate(tmp.path()).await;

        assert!(!report.valid);
        assert_eq!(report.mode, DetectedMode::Unknown);
        assert!(report.errors.iter().any(|e| e.contains("package.json")));
    }

    #[tokio::test]
    async fn test_fullstack_markers_win() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("src/app")).unwrap();
        assert_eq!(detect_mode(tmp.path()).await, DetectedMode::Frontend);

        touch(tmp.path(), "src/lib/db/prisma.ts");
        assert_eq!(detect_mode(tmp.path()).await, DetectedMode::Fullstack);
    }

    #[tokio::test]
    async fn test_minimal_frontend_is_valid() {
        let tmp = TempDir::new().unwrap();
        for file in ESSENTIAL_FILES {
            touch(tmp.path(), file);
        }
        touch(tmp.path(), "src/app/layout.tsx");
        touch(tmp.path(), "src/app/page.tsx");
        for dir in ["src/components", "src/lib", "src/hooks"] {
            std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }

        let report = validate(tmp.path()).await;
        assert!(report.valid, "{:?}", report.errors);
        assert_eq!(report.mode, DetectedMode::Frontend);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("api-client.ts")));
    }

    #[tokio::test]
    async fn test_config_mode_mismatch_warns() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("src/app")).unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "const c = {\n  mode: 'fullstack',\n  ui: 'shadcn',\n} as const\n",
        )
        .unwrap();

        let report = validate(tmp.path()).await;
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("declares fullstack mode")));
    }
}
