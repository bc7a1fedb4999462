//! Charm-style create flow using cliclack

use crate::error::ConfigError;
use crate::fs;
use crate::generator::Generator;
use crate::options::{is_valid_project_name, Database, Mode, ProjectOptions, UiLibrary};
use crate::report::{Level, Reporter};
use crate::runtime::PackageManager;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Mutex;

const DEFAULT_PROJECT_NAME: &str = "my-nextcraft-app";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, also the directory created under the current one
    pub name: Option<String>,

    pub mode: Option<String>,

    pub ui: Option<String>,

    pub database: Option<String>,

    /// `Some(true)` when `--auth` was passed
    pub auth: Option<bool>,

    /// `Some(true)` when `--rtl` was passed
    pub rtl: Option<bool>,

    /// `Some(false)` when `--no-seo` was passed
    pub seo: Option<bool>,

    /// Accept defaults for everything not given on the command line
    pub yes: bool,
}

/// Run the create flow with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("create-nextcraft-app v{cli_version}"))?;

    let name = select_name(&args)?;
    let mode = select_mode(&args)?;
    let ui = select_ui(&args)?;
    let database = select_database(&args, mode)?;

    let auth = match mode {
        Mode::Fullstack => {
            confirm_flag(args.auth, args.yes, "Add authentication (Auth.js)?", false)?
        }
        Mode::Frontend => args.auth.unwrap_or(false),
    };
    let rtl = confirm_flag(args.rtl, args.yes, "Enable right-to-left (RTL) layout?", false)?;
    let seo = confirm_flag(args.seo, args.yes, "Enable SEO (metadata, sitemap, robots)?", true)?;

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = current_dir.join(&name);
    if !fs::is_directory_empty(&path).await {
        cliclack::log::warning(format!("{} is not empty", path.display()))?;
        let proceed = proceed_into_non_empty(args.yes, || {
            cliclack::confirm("Continue anyway? Existing files may be overwritten")
                .initial_value(false)
                .interact()
        })?;
        if !proceed {
            cliclack::outro_cancel("Setup cancelled.")?;
            return Ok(());
        }
    }

    let (mut options, mut warnings) = ProjectOptions::new(name, mode, ui, database, path)?;
    warnings.extend(options.request_auth(auth));
    let options = options.with_rtl(rtl).with_seo(seo);
    for warning in warnings {
        cliclack::log::warning(warning)?;
    }

    create_project(&options).await?;
    print_next_steps(&options)?;

    Ok(())
}

fn select_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        if !is_valid_project_name(name) {
            return Err(ConfigError::InvalidProjectName(name.clone()).into());
        }
        return Ok(name.clone());
    }

    if args.yes {
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }

    let name: String = cliclack::input("Project name")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(|input: &String| {
            if is_valid_project_name(input) {
                Ok(())
            } else {
                Err("Use lowercase letters, numbers, and hyphens only")
            }
        })
        .interact()?;
    Ok(name)
}

fn select_mode(args: &CreateArgs) -> Result<Mode> {
    if let Some(mode) = &args.mode {
        return Ok(mode.parse()?);
    }
    if args.yes {
        return Ok(Mode::Frontend);
    }

    let mode = cliclack::select("Project mode")
        .item(Mode::Frontend, "Frontend", "UI with client-side API calls")
        .item(Mode::Fullstack, "Fullstack", "Database, API routes and auth")
        .initial_value(Mode::Frontend)
        .interact()?;
    Ok(mode)
}

fn select_ui(args: &CreateArgs) -> Result<UiLibrary> {
    if let Some(ui) = &args.ui {
        return Ok(ui.parse()?);
    }
    if args.yes {
        return Ok(UiLibrary::Shadcn);
    }

    let mut select = cliclack::select("UI library");
    for ui in [UiLibrary::Shadcn, UiLibrary::Chakra, UiLibrary::Material] {
        select = select.item(ui, ui.display_name(), "");
    }
    Ok(select.initial_value(UiLibrary::Shadcn).interact()?)
}

fn select_database(args: &CreateArgs, mode: Mode) -> Result<Option<Database>> {
    if let Some(db) = &args.database {
        return Ok(Some(db.parse()?));
    }
    if mode == Mode::Frontend {
        return Ok(None);
    }
    if args.yes {
        return Ok(Some(Database::Sqlite));
    }

    let mut select = cliclack::select("Database");
    for db in [Database::Postgres, Database::Sqlite, Database::Mysql] {
        select = select.item(db, db.display_name(), "");
    }
    Ok(Some(select.initial_value(Database::Sqlite).interact()?))
}

fn confirm_flag(given: Option<bool>, yes: bool, prompt: &str, default: bool) -> Result<bool> {
    match given {
        Some(value) => Ok(value),
        None if yes => Ok(default),
        None => Ok(cliclack::confirm(prompt).initial_value(default).interact()?),
    }
}

/// `--yes` accepts a non-empty target; otherwise the user decides
fn proceed_into_non_empty(
    yes: bool,
    confirm: impl FnOnce() -> std::io::Result<bool>,
) -> std::io::Result<bool> {
    if yes {
        Ok(true)
    } else {
        confirm()
    }
}

async fn create_project(options: &ProjectOptions) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let reporter = CliclackReporter::new(&spinner);
    let result = Generator::for_project(options)
        .run(&options.path, &reporter)
        .await;

    match result {
        Ok(summary) => {
            spinner.stop(format!(
                "Created {} files in {}",
                summary.committed.files.len(),
                options.path.display()
            ));
            reporter.flush()?;
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            reporter.flush()?;
            Err(e.into())
        }
    }
}

fn print_next_steps(options: &ProjectOptions) -> Result<()> {
    let pm = PackageManager::detect(None);

    let mut steps = vec![
        format!("cd {}", options.name),
        pm.install_command(),
    ];
    if options.is_fullstack() {
        steps.push("npx prisma db push".to_string());
    }
    steps.push(pm.run_command("dev"));

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Reports phase progress on a spinner; other messages are shown once it stops
pub struct CliclackReporter<'a> {
    spinner: &'a cliclack::ProgressBar,
    deferred: Mutex<Vec<(Level, String)>>,
}

impl<'a> CliclackReporter<'a> {
    pub fn new(spinner: &'a cliclack::ProgressBar) -> Self {
        Self {
            spinner,
            deferred: Mutex::new(Vec::new()),
        }
    }

    /// Print the deferred messages through `cliclack::log`
    pub fn flush(&self) -> std::io::Result<()> {
        let messages = match self.deferred.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(_) => return Ok(()),
        };
        for (level, message) in messages {
            match level {
                Level::Step => cliclack::log::step(message)?,
                Level::Info => cliclack::log::info(message)?,
                Level::Success => cliclack::log::success(message)?,
                Level::Warn => cliclack::log::warning(message)?,
                Level::Error => cliclack::log::error(message)?,
            }
        }
        Ok(())
    }

    fn defer(&self, level: Level, message: &str) {
        if let Ok(mut messages) = self.deferred.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl Reporter for CliclackReporter<'_> {
    fn step(&self, message: &str) {
        self.spinner.set_message(message);
    }

    fn info(&self, _message: &str) {}

    fn success(&self, message: &str) {
        self.defer(Level::Success, message);
    }

    fn warn(&self, message: &str) {
        self.defer(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.defer(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_yes_skips_the_overwrite_prompt() {
        let proceed =
            proceed_into_non_empty(true, || Err(io::Error::other("prompt shown"))).unwrap();
        assert!(proceed);
    }

    #[test]
    fn test_declined_overwrite_is_not_an_error() {
        assert!(!proceed_into_non_empty(false, || Ok(false)).unwrap());
        assert!(proceed_into_non_empty(false, || Ok(true)).unwrap());
    }
}
