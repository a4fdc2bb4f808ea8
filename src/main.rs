//! CLI entry point for newtab-shortcuts
//!
//! Provides a command-line interface for listing and editing the shortcut
//! collection, import/export, backups, and launching the GUI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use newtab_shortcuts::config::{
    resolve_store_path, DEFAULT_STORE_PATH, EXPORT_FILE_NAME, STORE_PATH_ENV,
};
use newtab_shortcuts::core::view::favicon_url;
use newtab_shortcuts::ui::{App, Controller};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "newtab-shortcuts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the shortcut store
    #[arg(short, long, global = true, env = STORE_PATH_ENV, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all shortcuts
    List,

    /// Add a shortcut at the end
    Add {
        name: String,
        /// URL; https:// is assumed when no scheme is given
        url: String,
    },

    /// Replace the shortcut at a position
    Edit {
        /// Position (1-based)
        position: usize,
        name: String,
        url: String,
    },

    /// Delete the shortcut at a position
    Delete {
        /// Position (1-based)
        position: usize,
    },

    /// Move a shortcut to another position
    Move {
        /// Current position (1-based)
        from: usize,
        /// New position (1-based)
        to: usize,
    },

    /// Swap two shortcuts
    Swap { a: usize, b: usize },

    /// Export the collection to a JSON file
    Export {
        #[arg(default_value = EXPORT_FILE_NAME)]
        path: PathBuf,
    },

    /// Replace the collection with a JSON file
    Import { path: PathBuf },

    /// Restore the four default shortcuts
    Reset,

    /// List store backups, newest first
    Backups,

    /// Restore the collection from a backup
    Restore { path: PathBuf },

    /// Launch the GTK window
    Gui,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("newtab_shortcuts=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store_path = resolve_store_path(&cli.store);

    if let Commands::Gui = cli.command {
        let app = App::new(store_path).context("Failed to start the GUI")?;
        let code = app.run();
        return Ok(if code == glib::ExitCode::SUCCESS {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let controller = Controller::new(store_path.clone())
        .with_context(|| format!("Cannot use store {}", store_path.display()))?;
    controller.load().context("Failed to load shortcuts")?;

    match run_command(&controller, cli.command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e.to_string().red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_command(controller: &Controller, command: Commands) -> anyhow::Result<()> {
    let len = controller.shortcut_count();

    match command {
        Commands::List => list_shortcuts(controller),
        Commands::Add { name, url } => {
            controller.add_shortcut(&name, &url)?;
            let position = controller.shortcut_count();
            println!("{} Added {} at position {}", "✓".green(), name.bold(), position);
        }
        Commands::Edit { position, name, url } => {
            controller.edit_shortcut(to_index(position, len)?, &name, &url)?;
            println!("{} Updated position {}", "✓".green(), position);
        }
        Commands::Delete { position } => {
            let removed = controller.delete_shortcut(to_index(position, len)?)?;
            println!("{} Deleted {}", "✓".green(), removed.name.bold());
        }
        Commands::Move { from, to } => {
            controller.move_shortcut(to_index(from, len)?, to_index(to, len)?)?;
            println!("{} Moved {} → {}", "✓".green(), from, to);
        }
        Commands::Swap { a, b } => {
            controller.swap_shortcuts(to_index(a, len)?, to_index(b, len)?)?;
            println!("{} Swapped {} ↔ {}", "✓".green(), a, b);
        }
        Commands::Export { path } => {
            controller.export_to(&path)?;
            println!("{} Exported to {}", "✓".green(), path.display());
        }
        Commands::Import { path } => {
            let count = controller.import_from(&path)?;
            println!("{} Imported {} shortcuts from {}", "✓".green(), count, path.display());
        }
        Commands::Reset => {
            controller.reset_to_defaults()?;
            println!("{} Default shortcuts restored", "✓".green());
        }
        Commands::Backups => print_backups(&controller.list_backups()?),
        Commands::Restore { path } => {
            let count = controller.restore_backup(&path)?;
            println!("{} Restored {} shortcuts from {}", "✓".green(), count, path.display());
        }
        // Handled before the store was loaded
        Commands::Gui => {}
    }

    Ok(())
}

/// Converts a 1-based CLI position to an index
///
/// Errors name the position as the user typed it.
fn to_index(position: usize, len: usize) -> anyhow::Result<usize> {
    if len == 0 {
        anyhow::bail!("No shortcut at position {}: the collection is empty", position);
    }
    if position == 0 || position > len {
        anyhow::bail!("No shortcut at position {} (positions run from 1 to {})", position, len);
    }
    Ok(position - 1)
}

/// Print every shortcut with its position, URL and icon source
fn list_shortcuts(controller: &Controller) {
    let store = controller.store_path();
    println!("{}", format!("Shortcuts from: {}\n", store.display()).bold());

    let shortcuts = controller.shortcuts();
    for (index, shortcut) in shortcuts.iter().enumerate() {
        let icon = favicon_url(&shortcut.url).unwrap_or_else(|| "(fallback icon)".to_string());

        println!(
            "{} {} → {}",
            format!("{:>3}.", index + 1).dimmed(),
            shortcut.name.cyan().bold(),
            shortcut.url.green()
        );
        println!("     {}", icon.dimmed());
    }

    println!("\n{} Total: {} shortcuts", "✓".green(), shortcuts.len());
}

fn print_backups(backups: &[PathBuf]) {
    if backups.is_empty() {
        println!("{}", "No backups yet".yellow());
        return;
    }

    for backup in backups {
        println!("{} {}", "•".cyan(), backup.display());
    }
    println!("\n{} {} backups", "✓".green(), backups.len());
}
