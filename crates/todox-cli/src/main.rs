//! todox CLI
//!
//! Command-line front end for the list store. Settings come from the
//! environment (and `.env`), overridden by the global flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use todox_core::logging_facility;
use todox_core::{FlashKind, Session};
use todox_engine::config::{ENV_BACKEND, ENV_DATABASE_URL};
use todox_engine::{BackendKind, StoreConfig};

mod commands;
mod session_file;

#[derive(Debug, Parser)]
#[command(name = "todox")]
#[command(about = "todox - to-do lists kept in a session file or a SQLite database", long_about = None)]
struct Cli {
    /// Storage backend (session or sqlite); overrides TODOX_BACKEND
    #[arg(long, global = true)]
    backend: Option<BackendKind>,

    /// Database location for the sqlite backend; overrides DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// File the session backend keeps its lists in
    #[arg(long, global = true, default_value = session_file::DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show all lists with their progress
    Lists,
    /// Show one list and its todos
    Show(commands::lists::ListArgs),
    /// Create a list
    NewList(commands::lists::NewListArgs),
    /// Rename a list
    Rename(commands::lists::RenameArgs),
    /// Delete a list and its todos
    DeleteList(commands::lists::ListArgs),
    /// Add a todo to a list
    Add(commands::todos::AddArgs),
    /// Mark a todo completed
    Check(commands::todos::TodoArgs),
    /// Mark a todo not completed
    Uncheck(commands::todos::TodoArgs),
    /// Delete a todo
    Remove(commands::todos::TodoArgs),
    /// Mark every todo in a list completed
    CompleteAll(commands::lists::ListArgs),
}

fn main() {
    // A missing .env is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    logging_facility::init(config.log_profile);

    match run(cli, &config) {
        Ok(Some(flash)) if flash.kind == FlashKind::Error => {
            eprintln!("{}", flash.message);
            std::process::exit(1);
        }
        Ok(Some(flash)) => println!("{}", flash.message),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Environment settings, skipping any variable a flag replaces
fn load_config(cli: &Cli) -> Result<StoreConfig, todox_core::ExError> {
    let mut config = StoreConfig::from_lookup(|key| match key {
        ENV_BACKEND if cli.backend.is_some() => None,
        ENV_DATABASE_URL if cli.database_url.is_some() => None,
        _ => std::env::var(key).ok(),
    })?;

    if let Some(backend) = cli.backend {
        config = config.with_backend(backend);
    }
    if let Some(url) = &cli.database_url {
        config = config.with_database_url(url.clone());
    }
    Ok(config)
}

/// Run one command as one request and return the flash it left
fn run(
    cli: Cli,
    config: &StoreConfig,
) -> Result<Option<todox_core::Flash>, Box<dyn std::error::Error>> {
    let backend = config.backend();
    tracing::debug!(backend = backend.name(), "dispatching command");

    // Only the session backend keeps anything in the session file
    let mut session = match config.backend {
        BackendKind::Session => session_file::load(&cli.session_file)?,
        BackendKind::Sqlite => Session::new(),
    };

    match cli.command {
        Commands::Lists => commands::lists::index(&backend, &mut session)?,
        Commands::Show(args) => commands::lists::show(&backend, &mut session, args)?,
        Commands::NewList(args) => commands::lists::create(&backend, &mut session, args)?,
        Commands::Rename(args) => commands::lists::rename(&backend, &mut session, args)?,
        Commands::DeleteList(args) => commands::lists::delete(&backend, &mut session, args)?,
        Commands::CompleteAll(args) => {
            commands::lists::complete_all(&backend, &mut session, args)?
        }
        Commands::Add(args) => commands::todos::add(&backend, &mut session, args)?,
        Commands::Check(args) => commands::todos::set_status(&backend, &mut session, args, true)?,
        Commands::Uncheck(args) => {
            commands::todos::set_status(&backend, &mut session, args, false)?
        }
        Commands::Remove(args) => commands::todos::remove(&backend, &mut session, args)?,
    }

    // Shown once, so it is consumed before the session is written back
    let flash = session.take_flash();
    if config.backend == BackendKind::Session {
        session_file::save(&cli.session_file, &session)?;
    }
    Ok(flash)
}
