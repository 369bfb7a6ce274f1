//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction};
pub use commands::{
    build_client, format_tree, handle_config_action, load_tree, print_ascii, print_tree,
    write_default_config,
};
