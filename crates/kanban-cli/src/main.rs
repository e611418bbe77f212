mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use kanban_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match AppConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                output::output_error(&format!("Failed to load config {}: {}", path.display(), e))
            }
        },
        None => AppConfig::load(),
    };

    match cli.command {
        Commands::Import(args) => handlers::import::handle(config, args).await?,
        Commands::Show { file } => handlers::show::handle(&file).await?,
        Commands::Palette => handlers::palette::handle()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
        }
    }

    Ok(())
}
