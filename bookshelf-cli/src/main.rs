//! bookshelf CLI - book catalogue HTTP server
//!
//! Entry point for the `bookshelf` binary:
//! - `serve`: wait for MySQL, then serve the book API
//! - `wait-db`: block until MySQL accepts a connection (container readiness)
//! - `completions`: shell completion scripts

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    author,
    version,
    about = "REST backend for a book catalogue backed by MySQL",
    long_about = "Serves list/create/update/delete for books joined with their authors. \
                  Database settings come from DB_HOST, DB_PORT, DB_USER, DB_PASSWORD and DB_NAME \
                  (a .env file in the working directory is loaded first)."
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (waits for the database first)
    Serve(commands::serve::ServeArgs),
    /// Wait until the database accepts a connection, then exit
    WaitDb(commands::wait_db::WaitDbArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so .env values reach clap's env fallbacks
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();
    init_tracing(cli.debug).ok();
    config::report_dotenv(&dotenv);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::WaitDb(args) => commands::run_wait_db(args).await?,
        Commands::Completions(args) => run_completions(args),
    }

    Ok(())
}

fn run_completions(args: CompletionsArgs) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
