use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

use commands::list::ListTarget;

#[derive(Parser)]
#[command(name = "kinofuse")]
#[command(about = "Kinofuse - one canonical movie record out of two catalogs")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (daily rotation) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a movie by IMDb identifier, persisting it on first sight
    #[command(
        long_about = "Resolve one movie by its IMDb identifier (tt<digits>). On a cache miss both catalogs are queried concurrently, their fields unified and the canonical record persisted; later resolutions are pure reads."
    )]
    Resolve {
        /// IMDb identifier, e.g. tt0111161
        id: String,
    },
    /// Search movies by title in the secondary catalog
    Search {
        /// Title to search for
        title: String,

        /// Maximum number of hits
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Look a movie up by title in the primary catalog (raw passthrough)
    Title {
        /// Exact title to look up
        title: String,
    },
    /// Manage per-user movie lists
    List {
        #[command(subcommand)]
        cmd: ListCommands,
    },
    /// Manage users
    User {
        #[command(subcommand)]
        cmd: UserCommands,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// Append a movie to a user's list, resolving it first if needed
    Add {
        /// User identifier
        user: String,

        /// IMDb identifier of the movie
        movie: String,

        /// Target list
        #[arg(long, value_enum, default_value = "watched")]
        list: ListTarget,

        /// Personal rating in [0,10]; watched list only
        #[arg(long)]
        rating: Option<f32>,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a user
    Add {
        /// User identifier
        id: String,
        /// Display name
        name: String,
        /// Email address
        email: String,
    },
    /// Show a user with both lists
    Show {
        /// User identifier
        id: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks API keys)
    Show {
        /// Show unmasked secrets
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let out = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Resolve { id } => commands::resolve::run(&out, &id).await,
        Commands::Search { title, limit } => commands::search::run(&out, &title, limit).await,
        Commands::Title { title } => commands::title::run(&out, &title).await,
        Commands::List { cmd } => match cmd {
            ListCommands::Add {
                user,
                movie,
                list,
                rating,
            } => commands::list::add(&out, &user, &movie, list, rating).await,
        },
        Commands::User { cmd } => match cmd {
            UserCommands::Add { id, name, email } => {
                commands::user::add(&out, &id, &name, &email).await
            }
            UserCommands::Show { id } => commands::user::show(&out, &id).await,
        },
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show { full } => commands::config::show(&out, full),
        },
    }
}
