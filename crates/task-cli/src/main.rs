mod commands;
mod config;
mod logging;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use task_store::{Service, Store};
use tracing::debug;

#[derive(Parser)]
#[command(name = "task-cli", about = "Track tasks in a local JSON file", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Task file to use (default: $TASK_CLI_FILE, then ./tasks.json)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// What needs doing (3-200 characters)
        description: String,
    },

    /// Change the description of a task
    Update {
        /// Task ID
        id: String,

        /// New description (3-200 characters)
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task ID
        id: String,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: String,
    },

    /// List tasks, optionally only those with a given status
    List {
        /// One of: todo, in-progress, done
        status: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let config = config::Config::resolve(cli.file);
    debug!(path = %config.storage_path.display(), "using task file");
    let service = Service::new(Store::new(config.storage_path));
    let json = cli.json;

    let result = match cli.command {
        Commands::Add { description } => commands::add::run(&service, &description, json),
        Commands::Update { id, description } => {
            commands::update::run(&service, &id, &description, json)
        }
        Commands::Delete { id } => commands::delete::run(&service, &id, json),
        Commands::MarkInProgress { id } => commands::mark::in_progress(&service, &id, json),
        Commands::MarkDone { id } => commands::mark::done(&service, &id, json),
        Commands::List { status } => commands::list::run(&service, status.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
