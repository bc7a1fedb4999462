//! NextCraft Core - Shared library for the `create-nextcraft-app` and `forge` CLIs
//!
//! This library generates Next.js 16 / React 19 projects from the user's
//! choices and layers feature modules onto existing projects.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Filesystem helpers, the staged [`ProjectTree`],
//!   the in-memory [`PackageManifest`], template providers, runtime detection
//! - **Layer 2: Workflow Orchestration** - The phase-based [`Generator`], feature
//!   generators and project validation
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use nextcraft_core::{Generator, Mode, ProjectOptions, UiLibrary, ConsoleReporter};
//!
//! let (options, _warnings) =
//!     ProjectOptions::new("demo", Mode::Frontend, UiLibrary::Shadcn, None, path)?;
//! Generator::for_project(&options)
//!     .run(&options.path, &ConsoleReporter)
//!     .await?;
//! ```

pub mod config;
pub mod doctor;
pub mod error;
pub mod features;
pub mod fs;
pub mod generator;
pub mod manifest;
pub mod options;
pub mod project;
pub mod report;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ProjectConfig;
pub use doctor::{validate, DetectedMode, ValidationReport};
pub use error::{ConfigError, ProcessError, ScaffoldError};
pub use features::{add_feature, AddOptions, Feature};
pub use generator::{GenerationSummary, Generator, Phase, PhaseContext};
pub use manifest::PackageManifest;
pub use options::{Database, Mode, ProjectOptions, UiLibrary};
pub use project::{GeneratedFile, ProjectTree};
pub use report::{ConsoleReporter, RecordingReporter, Reporter, SilentReporter};
pub use runtime::{PackageManager, RuntimeInfo};

#[cfg(feature = "tui")]
pub use tui::run;

/// Version reported by both CLIs
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
