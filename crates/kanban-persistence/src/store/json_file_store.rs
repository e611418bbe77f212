use crate::traits::{PersistenceMetadata, PersistenceStore, FORMAT_VERSION};
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::BoardSnapshot;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file holding one imported board
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk wrapper around a board snapshot
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: BoardSnapshot,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }
}

/// Write through a temp file in the target directory and rename it into
/// place, so readers never see a half-written board.
async fn write_atomic(path: &Path, data: Vec<u8>) -> KanbanResult<()> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || -> KanbanResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(&parent)?;
        temp_file.write_all(&data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path).map_err(|e| KanbanError::Io(e.error))?;
        Ok(())
    })
    .await
    .map_err(|e| KanbanError::Internal(format!("write task failed: {}", e)))?
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save_board(&self, snapshot: &BoardSnapshot) -> KanbanResult<PersistenceMetadata> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(self.instance_id),
            data: snapshot.clone(),
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| KanbanError::Serialization(e.to_string()))?;
        let len = json_bytes.len();

        write_atomic(&self.path, json_bytes).await?;

        tracing::info!(
            "Saved board {} ({} bytes) to {}",
            snapshot.board.id,
            len,
            self.path.display()
        );

        Ok(envelope.metadata)
    }

    async fn load_board(&self) -> KanbanResult<(BoardSnapshot, PersistenceMetadata)> {
        let file_bytes = tokio::fs::read(&self.path).await?;

        let envelope: JsonEnvelope = serde_json::from_slice(&file_bytes)
            .map_err(|e| KanbanError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(KanbanError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok((envelope.data, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::{Board, List, NewList};
    use tempfile::tempdir;

    fn snapshot() -> BoardSnapshot {
        let board = Board::new("Imported".to_string(), None);
        let list = List::new(
            board.id,
            NewList {
                name: "Backlog".to_string(),
                position: 65536.0,
            },
        );
        let mut snapshot = BoardSnapshot::new(board);
        snapshot.lists.push(list);
        snapshot
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("board.json");
        let store = JsonFileStore::new(&file_path);
        let original = snapshot();

        let metadata = store.save_board(&original).await.unwrap();
        assert_eq!(metadata.format_version, FORMAT_VERSION);
        assert!(file_path.exists());

        let (loaded, loaded_metadata) = store.load_board().await.unwrap();
        assert_eq!(loaded_metadata.instance_id, metadata.instance_id);
        assert_eq!(loaded.board.id, original.board.id);
        assert_eq!(loaded.lists.len(), 1);
        assert_eq!(loaded.lists[0].position, 65536.0);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("board.json");
        let store = JsonFileStore::new(&file_path);

        store.save_board(&snapshot()).await.unwrap();
        let second = snapshot();
        store.save_board(&second).await.unwrap();

        let (loaded, _) = store.load_board().await.unwrap();
        assert_eq!(loaded.board.id, second.board.id);
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(!store.exists().await);

        store.save_board(&snapshot()).await.unwrap();
        assert!(store.exists().await);
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("board.json");
        let store = JsonFileStore::new(&file_path);
        store.save_board(&snapshot()).await.unwrap();

        let mut value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&file_path).unwrap()).unwrap();
        value["version"] = serde_json::json!(99);
        std::fs::write(&file_path, serde_json::to_vec(&value).unwrap()).unwrap();

        let result = store.load_board().await;
        assert!(matches!(result, Err(KanbanError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("board.json");
        std::fs::write(&file_path, "{ invalid json }").unwrap();

        let result = JsonFileStore::new(&file_path).load_board().await;
        assert!(matches!(result, Err(KanbanError::Serialization(_))));
    }
}
