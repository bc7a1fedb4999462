//! forge - Manage NextCraft projects

mod commands;

use clap::{Parser, Subcommand};
use nextcraft_core::{ConsoleReporter, Reporter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(about = "Add features to and run NextCraft projects")]
#[command(version)]
pub struct Cli {
    /// Run as if forge was started in this directory
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a module to the project (auth, resource, next16, senior)
    Add {
        /// Module name
        module: String,

        /// Module argument, e.g. the resource name
        name: Option<String>,

        /// Skip `npx prisma generate` after adding auth
        #[arg(long = "skip-generate")]
        skip_generate: bool,
    },
    /// Generate code inside the project
    #[command(alias = "g")]
    Generate {
        #[command(subcommand)]
        kind: GenerateKind,
    },
    /// Install dependencies if needed and start the dev server
    Dev,
    /// Install dependencies if needed and build for production
    Build,
    /// Check the project structure and Node.js version
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum GenerateKind {
    /// CRUD resource: validation, server actions, form and page
    Resource {
        /// Resource name, e.g. post
        name: String,
    },
}

#[tokio::main]
async fn main() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let cli = Cli::parse();
    let reporter = ConsoleReporter;

    let result = match cli.command {
        Command::Add {
            module,
            name,
            skip_generate,
        } => commands::add::run(&cli.dir, &module, name.as_deref(), skip_generate, &reporter).await,
        Command::Generate {
            kind: GenerateKind::Resource { name },
        } => commands::add::run(&cli.dir, "resource", Some(&name), true, &reporter).await,
        Command::Dev => commands::script::run(&cli.dir, "dev", &reporter).await,
        Command::Build => commands::script::run(&cli.dir, "build", &reporter).await,
        Command::Doctor => commands::doctor::run(&cli.dir).await,
    };

    if let Err(e) = result {
        reporter.error(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_alias() {
        let cli = Cli::parse_from(["forge", "g", "resource", "post"]);
        assert!(matches!(
            cli.command,
            Command::Generate {
                kind: GenerateKind::Resource { ref name }
            } if name == "post"
        ));
    }

    #[test]
    fn test_directory_flag() {
        let cli = Cli::parse_from(["forge", "-C", "apps/web", "add", "senior"]);
        assert_eq!(cli.dir, PathBuf::from("apps/web"));
        assert!(matches!(
            cli.command,
            Command::Add { ref module, name: None, skip_generate: false } if module == "senior"
        ));
    }
}
