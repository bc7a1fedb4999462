//! Error taxonomy for scaffolding operations
//!
//! - [`ConfigError`]: invalid or missing input, raised before anything touches disk
//! - [`ScaffoldError::Filesystem`]: a directory or file operation failed mid-pipeline
//! - [`ProcessError`]: an external command (package manager, prisma) failed

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Invalid or missing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid project name '{0}'. Use lowercase letters, numbers, and hyphens only.")]
    InvalidProjectName(String),

    #[error("Unknown project mode '{0}'. Expected one of: frontend, fullstack")]
    UnknownMode(String),

    #[error("Unknown UI library '{0}'. Expected one of: shadcn, chakra, material")]
    UnknownUi(String),

    #[error("Unknown database provider '{0}'. Expected one of: postgres, sqlite, mysql")]
    UnknownDatabase(String),

    #[error("Fullstack mode requires a database (postgres, sqlite or mysql)")]
    MissingDatabase,

    #[error("Unknown module '{name}'. Available modules: {available}")]
    UnknownModule { name: String, available: String },

    #[error("Module '{0}' requires a name, e.g. `forge add {0} post`")]
    MissingModuleArgument(String),

    #[error("Invalid resource name '{0}'. Use letters and digits only, starting with a letter.")]
    InvalidResourceName(String),

    #[error("Not a NextCraft project: {} has no package.json", .0.display())]
    NotAProject(PathBuf),

    #[error("Invalid nextcraft.config.ts: {0}")]
    InvalidProjectConfig(String),
}

/// Failure of an external command
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with status {code}")]
    Failed { program: String, code: i32 },

    #[error("{program} timed out after {} seconds", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },
}

/// Any error surfaced by the generator pipeline
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid package.json: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl ScaffoldError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
