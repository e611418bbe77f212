use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Import board exports into kanban boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the per-user config)
    #[arg(long, global = true, value_name = "FILE", env = "KANBAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a board export into a new board file
    Import(ImportArgs),
    /// Show a previously imported board
    Show {
        /// Board file written by `import`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List the label colors imported labels can take
    Palette,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ImportArgs {
    /// Board export in JSON form
    #[arg(value_name = "EXPORT")]
    pub export: PathBuf,
    /// Where to write the imported board
    #[arg(long, short, value_name = "FILE")]
    pub output: PathBuf,
    /// Name of the new board (defaults to the exported board's name)
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Palette color for labels whose color has no match
    #[arg(long, value_name = "COLOR")]
    pub fallback_color: Option<String>,
    /// User the imported cards and comments are attributed to
    #[arg(long, env = "KANBAN_USER_ID")]
    pub user: Option<Uuid>,
    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}
