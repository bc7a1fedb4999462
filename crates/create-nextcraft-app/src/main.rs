//! create-nextcraft-app - Scaffold a Next.js 16 project

use clap::Parser;
use nextcraft_core::tui::CreateArgs;
use nextcraft_core::{ConsoleReporter, Reporter, CLI_VERSION};

#[derive(Parser, Debug)]
#[command(name = "create-nextcraft-app")]
#[command(about = "Create a production-ready Next.js 16 project")]
#[command(version)]
pub struct Args {
    /// Project name (lowercase letters, numbers and hyphens)
    pub project_name: Option<String>,

    /// Project mode: frontend or fullstack
    #[arg(short, long)]
    pub mode: Option<String>,

    /// UI library: shadcn, chakra or material
    #[arg(long)]
    pub ui: Option<String>,

    /// Database provider for fullstack mode: postgres, sqlite or mysql
    #[arg(long)]
    pub db: Option<String>,

    /// Add authentication (fullstack only)
    #[arg(long)]
    pub auth: bool,

    /// Enable right-to-left layout
    #[arg(long)]
    pub rtl: bool,

    /// Skip SEO metadata, sitemap and robots
    #[arg(long = "no-seo")]
    pub no_seo: bool,

    /// Accept defaults for every option not given (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.project_name,
            mode: args.mode,
            ui: args.ui,
            database: args.db,
            auth: args.auth.then_some(true),
            rtl: args.rtl.then_some(true),
            seo: args.no_seo.then_some(false),
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
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

    let args = Args::parse();
    let result = nextcraft_core::run(args.into(), CLI_VERSION).await;

    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        ConsoleReporter.error(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_create_args() {
        let args = Args::parse_from([
            "create-nextcraft-app",
            "shop",
            "-m",
            "fullstack",
            "--db",
            "postgres",
            "--auth",
            "--no-seo",
            "-y",
        ]);
        let create: CreateArgs = args.into();

        assert_eq!(create.name.as_deref(), Some("shop"));
        assert_eq!(create.mode.as_deref(), Some("fullstack"));
        assert_eq!(create.database.as_deref(), Some("postgres"));
        assert_eq!(create.auth, Some(true));
        assert_eq!(create.rtl, None);
        assert_eq!(create.seo, Some(false));
        assert!(create.yes);
    }

    #[test]
    fn test_missing_flags_stay_unset() {
        let create: CreateArgs = Args::parse_from(["create-nextcraft-app"]).into();
        assert_eq!(create.name, None);
        assert_eq!(create.auth, None);
        assert_eq!(create.seo, None);
        assert!(!create.yes);
    }
}
