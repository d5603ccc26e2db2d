//! bgg CLI
//!
//! Command-line front end for the BoardGameGeek XML API client.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::commands::OutputFormat;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bgg")]
#[command(about = "Query BoardGameGeek collections, games and plays", long_about = None)]
struct Cli {
    /// Print records as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Log every request and cache decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's collection, base games first
    Collection {
        /// BoardGameGeek username
        username: String,
    },

    /// Show the current hotness list
    Hot,

    /// Show a user's most recent plays
    Plays {
        /// BoardGameGeek username
        username: String,
    },

    /// Show details for one game
    Game {
        /// Game id
        id: i32,

        /// Ignore cached details and fetch again
        #[arg(long)]
        fresh: bool,
    },

    /// Search board games by name
    Search {
        /// Search text
        query: String,
    },

    /// Show a user's profile
    User {
        /// BoardGameGeek username
        username: String,
    },

    /// Download every comment on a game
    Comments {
        /// Game id
        id: i32,

        /// Number of comments the game has
        #[arg(short, long, default_value_t = 100)]
        total: u32,
    },

    /// Inspect client settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if let Err(e) = run(cli.command, format) {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stderr, |t| t.bright_red()),
            e
        );
        std::process::exit(1);
    }
}

fn run(command: Commands, format: OutputFormat) -> Result<(), CliError> {
    use commands::{config, query};

    match command {
        Commands::Collection { username } => query::run_collection(&username, format),
        Commands::Hot => query::run_hot(format),
        Commands::Plays { username } => query::run_plays(&username, format),
        Commands::Game { id, fresh } => query::run_game(id, !fresh, format),
        Commands::Search { query } => query::run_search(&query, format),
        Commands::User { username } => query::run_user(&username, format),
        Commands::Comments { id, total } => query::run_comments(id, total, format),
        Commands::Config { action } => match action {
            ConfigAction::Path => config::run_config_path(),
            ConfigAction::Show => config::run_config_show(format),
        },
    }
}
