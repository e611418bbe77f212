use futures::future::try_join_all;
use kanban_domain::{BoardId, List, ListService, NewList};

use crate::error::{EntityKind, ImportError, ImportResult};
use crate::source::{SourceBoard, SourceList};

pub fn list_fields(source_list: &SourceList) -> NewList {
    NewList {
        name: source_list.name.clone(),
        position: source_list.pos,
    }
}

/// Create every non-archived list. Lists do not depend on each other, so they
/// are created concurrently; display order is carried by `position`.
pub async fn import_lists<'a, T>(
    target: &T,
    board_id: BoardId,
    source: &'a SourceBoard,
) -> ImportResult<Vec<(&'a SourceList, List)>>
where
    T: ListService + ?Sized,
{
    try_join_all(source.open_lists().map(|source_list| async move {
        let list = target
            .create_list(board_id, list_fields(source_list))
            .await
            .map_err(ImportError::create(EntityKind::List, &source_list.id))?;
        tracing::debug!(source_id = %source_list.id, list_id = %list.id, "created list");
        Ok::<_, ImportError>((source_list, list))
    }))
    .await
}
