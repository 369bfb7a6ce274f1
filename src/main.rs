use clap::Parser;
use std::error::Error;
use std::path::Path;

use portfolio_term::app::App;
use portfolio_term::cli::{self, Args, Command};
use portfolio_term::config::{self, Config};
use portfolio_term::event_loop;
use portfolio_term::fs::Navigator;
use portfolio_term::logging;
use portfolio_term::shell::{OutputBuffer, Shell};
use portfolio_term::tasks::Services;
use portfolio_term::terminal::{StatusBar, Tui};

const WELCOME: &str = "Portfolio Terminal [Version 1.0]\nType 'help' for available commands.\n";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        if let Err(e) = logging::init(log_file, logging::level_for_verbosity(args.verbose)) {
            eprintln!("Error: cannot open log file '{}': {}", log_file.display(), e);
            std::process::exit(1);
        }
    }

    config::load_dotenv();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    config.apply_env();
    config.apply_server_override(args.server.clone());
    if args.no_status {
        config.ui.status_bar = false;
    }

    let result = match args.command {
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, &config, args.config.as_deref());
            Ok(())
        }
        Some(Command::Tree) => match cli::build_client(&config) {
            Ok(client) => cli::print_tree(&client, args.tree.as_deref()).await,
            Err(e) => Err(e),
        },
        Some(Command::Ascii {
            image,
            width,
            height,
            remote,
        }) => cli::print_ascii(&config, &image, width, height, remote).await,
        None => run_browser(&config, args.tree.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load the tree, then run the full-screen browser until the user quits.
async fn run_browser(config: &Config, tree_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let client = cli::build_client(config)?;
    let root = cli::load_tree(&client, tree_file).await?;
    let navigator = Navigator::new(root)?;

    let output = OutputBuffer::with_max_lines(config.ui.scrollback);
    let mut shell = Shell::with_output(navigator, output);
    shell.print(WELCOME);

    let mut app = App::new(shell, StatusBar::with_visibility(config.ui.status_bar));
    let services = Services::new(client, config.ascii.clone(), config.about.clone());

    let mut tui = Tui::new()?;
    let result = event_loop::run(&mut tui, &mut app, services).await;
    tui.restore()?;

    result.map_err(|e| -> Box<dyn Error> { e })
}
