//! `cursor-launch`: open files and projects in the Cursor editor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::config::{cmd_config, ConfigAction};

#[derive(Parser)]
#[command(name = "cursor-launch", about = "Open files and projects in the Cursor editor")]
struct Cli {
    /// Active project to list in the workspace manifest, as NAME=DIR or DIR (repeatable)
    #[arg(long = "project", value_name = "NAME=DIR", global = true)]
    projects: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file, optionally at a line and column
    File {
        /// File to open
        path: PathBuf,

        /// Line to jump to
        #[arg(long, short)]
        line: Option<u32>,

        /// Column to jump to (requires --line)
        #[arg(long, short, requires = "line")]
        column: Option<u32>,
    },

    /// Open the solution root (defaults to the current directory)
    Solution {
        /// Solution root directory
        dir: Option<PathBuf>,
    },

    /// Open an addon's root directory
    Addon {
        /// Addon root directory
        dir: PathBuf,

        /// Addon name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the path of the Cursor executable
    Locate,

    /// Write the workspace manifest without launching Cursor
    Workspace {
        /// Solution root directory (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Manifest path, overriding workspace.file from the config
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Manage cursor-launch configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::File { path, line, column } => {
            commands::open::cmd_file(&path, line, column, &cli.projects)?;
        }
        Commands::Solution { dir } => commands::open::cmd_solution(dir, &cli.projects)?,
        Commands::Addon { dir, name } => commands::open::cmd_addon(&dir, name, &cli.projects)?,
        Commands::Locate => commands::locate::cmd_locate()?,
        Commands::Workspace { dir, output } => {
            commands::workspace::cmd_workspace(dir, output, &cli.projects)?;
        }
        Commands::Config { action } => cmd_config(action)?,
    }

    Ok(())
}
