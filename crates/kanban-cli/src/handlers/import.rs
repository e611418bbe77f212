use crate::cli::ImportArgs;
use crate::output;
use kanban_core::AppConfig;
use kanban_domain::NewBoard;
use kanban_import::{create_board_from_import, ImportOptions, ImportSummary, SourceBoard};
use kanban_persistence::{JsonFileStore, MemoryStore, PersistenceStore};
use serde::Serialize;
use uuid::Uuid;

const DEFAULT_BOARD_NAME: &str = "Imported board";

#[derive(Serialize)]
struct ImportReport {
    board_id: Uuid,
    name: String,
    user_id: Uuid,
    output: String,
    summary: ImportSummary,
}

pub async fn handle(config: AppConfig, args: ImportArgs) -> anyhow::Result<()> {
    let data = match tokio::fs::read_to_string(&args.export).await {
        Ok(data) => data,
        Err(e) => {
            return output::output_error(&format!(
                "Failed to read file {}: {}",
                args.export.display(),
                e
            ))
        }
    };
    let source = match SourceBoard::from_json(&data) {
        Ok(source) => source,
        Err(e) => return output::output_error(&e.to_string()),
    };

    let file_store = JsonFileStore::new(&args.output);
    if file_store.exists().await && !args.force {
        return output::output_error(&format!(
            "Output file {} already exists (use --force to overwrite)",
            args.output.display()
        ));
    }

    let mut config = config;
    if let Some(color) = args.fallback_color {
        config.fallback_label_color = Some(color);
    }
    let options = match ImportOptions::from_config(&config) {
        Ok(options) => options,
        Err(e) => return output::output_error(&e.to_string()),
    };

    let name = args
        .name
        .or_else(|| Some(source.name.clone()).filter(|n| !n.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_BOARD_NAME.to_string());
    let fields = NewBoard {
        name,
        description: args.description,
    };
    let user_id = args.user.unwrap_or_else(Uuid::new_v4);

    let store = MemoryStore::new();
    let (board, imported) =
        match create_board_from_import(&store, fields, &source, user_id, options).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Import of {} failed: {}", args.export.display(), e);
                return output::output_error(&e.to_string());
            }
        };

    let snapshot = store.snapshot(board.id).await?;
    file_store.save_board(&snapshot).await?;

    output::output_success(ImportReport {
        board_id: board.id,
        name: board.name,
        user_id,
        output: args.output.display().to_string(),
        summary: imported.summary(),
    })
}
