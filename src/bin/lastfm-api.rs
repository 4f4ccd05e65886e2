mod commands;

use clap::Parser;
use commands::{execute_command, utils::create_client, Commands};

/// Query the Last.fm web API and print the decoded results as JSON
#[derive(Parser)]
#[command(
    name = "lastfm-api",
    about = "Query the Last.fm web API and print decoded results as JSON",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Commands::Config { command } = &args.command {
        if let Err(e) = commands::config::handle_config(command) {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let client = match create_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Failed to create client: {e}");
            eprintln!();
            eprintln!("Set LASTFM_API_KEY, or save a key with:");
            eprintln!("  lastfm-api config init --api-key <KEY>");
            std::process::exit(1);
        }
    };

    if let Err(e) = execute_command(args.command, &client, args.compact).await {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
