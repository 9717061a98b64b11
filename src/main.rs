use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;
use log::LevelFilter;

use roster::cli::{Console, Session};
use roster::config::{paths::RosterPaths, settings::Settings, ListStyle};
use roster::services::Roster;

#[derive(Parser)]
#[command(
    name = "roster",
    author = "Kaylee Beyene",
    version,
    about = "Interactive console roster for person records",
    long_about = "Roster keeps a small in-memory list of people (name, age, gender, \
                  occupation) with sequential serial numbers. Records can be added, \
                  updated, deleted, searched and listed page by page. Nothing is \
                  saved when the program exits."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Render the full listing as a table
    #[arg(long, global = true)]
    table: bool,

    /// Never clear the screen between pages
    #[arg(long, global = true)]
    no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Run,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = RosterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Run) => {
            let list_style = if cli.table {
                ListStyle::Table
            } else {
                settings.list_style
            };
            let clear_screen = settings.clear_screen && !cli.no_clear && io::stdout().is_tty();

            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout().lock())
                .with_clear_screen(clear_screen);

            let mut session = Session::new(Roster::new(), console, list_style);
            session.run()?;
            log::debug!(
                "session ended with {} records discarded",
                session.roster().len()
            );
        }
        Some(Commands::Init) => {
            println!("Writing settings to: {}", paths.settings_file().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Roster Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            println!("  List style:   {}", settings.list_style);
            println!("  Clear screen: {}", settings.clear_screen);
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
