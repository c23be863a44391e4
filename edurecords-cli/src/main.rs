//! edurecords CLI - runs the education records HTTP API
//!
//! Configuration comes from flags, environment variables, or a `.env`
//! file in the working directory (loaded before argument parsing).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "edurecords",
    author,
    version,
    about = "REST API over student education records",
    long_about = "Serve CRUD endpoints over student education records, plus per-gender \
                  counts and a best-score filter, backed by PostgreSQL or an in-memory store."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
