use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_core::KanbanResult;
use kanban_domain::BoardSnapshot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current version of the on-disk board envelope.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata for persistence operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Storage for a finished board graph
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a board snapshot to the store
    async fn save_board(&self, snapshot: &BoardSnapshot) -> KanbanResult<PersistenceMetadata>;

    /// Load the board snapshot held by the store
    async fn load_board(&self) -> KanbanResult<(BoardSnapshot, PersistenceMetadata)>;

    /// Check if the store file exists
    async fn exists(&self) -> bool;
}
