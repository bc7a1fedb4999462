//! Runtime detection and external commands
//!
//! This module provides:
//! - Node.js detection and the minimum version check
//! - Package manager detection (npm, pnpm, yarn, bun)
//! - Process execution with streamed output and timeouts

pub mod check;
pub mod package_manager;
pub mod process;

pub use check::{check_node, node_meets_minimum, RuntimeInfo, MIN_NODE_VERSION};
pub use package_manager::PackageManager;
pub use process::{run_inherited, run_with_timeout};
