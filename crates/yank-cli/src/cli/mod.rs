//! CLI for yank.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use yank_core::config::{self, YankConfig};

use commands::{run_scan, run_sync, SyncArgs};

/// Top-level CLI for yank.
#[derive(Debug, Parser)]
#[command(name = "yank")]
#[command(
    about = "yank: download a playlist, skipping what is already on disk",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/yank/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every playlist entry that is not already in the output directory.
    Sync {
        /// Playlist URL.
        url: String,
        /// Directory in which the playlist folder is created (default: current directory).
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Process up to N entries at once (overrides max_concurrent_fetches).
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
        /// Do not send a desktop notification when done.
        #[arg(long)]
        no_notify: bool,
        /// Report what would be downloaded without downloading.
        #[arg(long)]
        dry_run: bool,
    },

    /// List files in a directory with their recovered title and fingerprint.
    Scan {
        /// Directory to scan (recursively).
        dir: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<YankConfig> {
    let cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Sync {
                url,
                output,
                jobs,
                no_notify,
                dry_run,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                let output_root = match output {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                let args = SyncArgs {
                    url,
                    output_root,
                    jobs,
                    notify: cfg.notify && !no_notify,
                    dry_run,
                };
                run_sync(&cfg, args).await?;
            }
            CliCommand::Scan { dir } => run_scan(&dir)?,
        }

        Ok(())
    }
}
