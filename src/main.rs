//! Wordle Oracle - CLI
//!
//! Wordle assistant with TUI and plain CLI modes, backed by an external
//! suggestion engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use wordle_oracle::{
    commands::run_simple,
    engine::{HttpSuggestionEngine, SuggestionEngine},
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle_oracle",
    about = "Wordle assistant: enter guesses and feedback, get engine-backed suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the suggestion engine
    #[arg(
        short = 'e',
        long,
        global = true,
        default_value = wordle_oracle::engine::DEFAULT_ENGINE_URL
    )]
    engine_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine: Arc<dyn SuggestionEngine> = Arc::new(HttpSuggestionEngine::new(&cli.engine_url));

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(engine)),
        Commands::Simple => run_simple(engine).await,
    }
}
