//! Command-line front-end for the Smart Notes study client.
//!
//! This CLI tool provides commands for both roles:
//! - books: List uploaded books grouped by subject (admin)
//! - upload: Upload a PDF textbook (admin)
//! - notes: Generate AI notes for a topic (user)
//! - shell: Interactive session with the role switch and both screens
//!
//! Configuration via environment:
//! - STUDYNOTES_URL: Base URL of the backend (default: http://localhost:5000)
//! - STUDYNOTES_LOG_LEVEL: Log level for diagnostics on stderr (default: warn)

mod commands;
mod render;

use clap::{Parser, Subcommand};
use studynotes_client::ClientConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{books::BooksArgs, notes::NotesArgs, shell::ShellArgs, upload::UploadArgs};

/// Smart Notes CLI
///
/// Upload textbooks and generate study notes from the command line. Prints
/// JSON by default; use --human for formatted output.
#[derive(Parser)]
#[command(name = "studynotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Backend base URL (overrides STUDYNOTES_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List uploaded books grouped by subject
    Books(BooksArgs),

    /// Upload a PDF textbook
    Upload(UploadArgs),

    /// Generate notes for a topic
    Notes(NotesArgs),

    /// Start an interactive session
    Shell(ShellArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.url.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);
    tracing::debug!(base_url = %config.base_url, "configuration loaded");

    let client = match commands::build_client(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Books(args) => commands::books::execute(&client, cli.human, args).await,
        Commands::Upload(args) => commands::upload::execute(&client, cli.human, args).await,
        Commands::Notes(args) => commands::notes::execute(&client, cli.human, args).await,
        Commands::Shell(args) => commands::shell::execute(&client, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Environment configuration with the command-line URL override applied.
fn load_config(url: Option<&str>) -> Result<ClientConfig, studynotes_client::ConfigError> {
    let config = ClientConfig::from_env()?;
    match url {
        Some(url) => config.with_base_url(url),
        None => Ok(config),
    }
}

/// Initialize the tracing subscriber on stderr.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
