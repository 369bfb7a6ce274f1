//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MS-DOS style terminal for browsing a portfolio file tree
#[derive(Parser, Debug)]
#[command(name = "portfolio-term")]
#[command(version, about = "MS-DOS style portfolio browser for the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Portfolio server URL (overrides config and PORTFOLIO_URL)
    #[arg(long, short, global = true)]
    pub server: Option<String>,

    /// Load the tree from a JSON snapshot instead of the server
    #[arg(long, global = true)]
    pub tree: Option<PathBuf>,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Write log records to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the portfolio tree
    Tree,
    /// Print an image as ASCII art
    Ascii {
        /// Image path (or server resource with --remote)
        image: String,
        /// Width in characters (default: config ascii.image_width)
        #[arg(long)]
        width: Option<u32>,
        /// Height in characters (default: config ascii.image_height)
        #[arg(long)]
        height: Option<u32>,
        /// Fetch the image from the portfolio server
        #[arg(long)]
        remote: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
