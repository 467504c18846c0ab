mod config;
mod context;
mod dialog;
mod duplicate;
mod editor;
mod move_file;
mod new_file;
mod new_folder;
mod paths;
mod remove;
mod rename;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::context::ActiveContext;

#[derive(Parser)]
#[command(
    name = "editor-files",
    version,
    about = "File management commands for editor integration"
)]
struct Cli {
    /// Workspace root the host editor is operating in
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Document currently active in the editor
    #[arg(long, global = true)]
    active: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new file relative to the active document
    NewFile,
    /// Create a new file relative to the workspace root
    NewFileAtRoot,
    /// Create a new folder relative to the active document
    NewFolder,
    /// Create a new folder relative to the workspace root
    NewFolderAtRoot,
    /// Rename the active document
    Rename,
    /// Move the active document to a new location
    Move,
    /// Duplicate the active document
    Duplicate,
    /// Delete the active document
    Remove,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Flow failures were already shown through the error-display
            // adapter; everything else lands here once.
            if err.downcast_ref::<dialog::Surfaced>().is_none() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load()?;
    let context = ActiveContext::new(&cli.root, cli.active.as_deref())?;

    match cli.command {
        Commands::NewFile => new_file::run(&context, &config, false),
        Commands::NewFileAtRoot => new_file::run(&context, &config, true),
        Commands::NewFolder => new_folder::run(&context, &config, false),
        Commands::NewFolderAtRoot => new_folder::run(&context, &config, true),
        Commands::Rename => rename::run(&context, &config),
        Commands::Move => move_file::run(&context, &config),
        Commands::Duplicate => duplicate::run(&context, &config),
        Commands::Remove => remove::run(&context, &config),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
