use kanban_domain::{BoardId, UserId};

use crate::labels::IdentifierMap;
use crate::source::SourceBoard;

/// Handles shared by every card-level step of one import.
pub struct ImportContext<'a, T: ?Sized> {
    pub target: &'a T,
    pub source: &'a SourceBoard,
    pub labels: &'a IdentifierMap,
    pub board_id: BoardId,
    pub user_id: UserId,
}

impl<T: ?Sized> Clone for ImportContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ImportContext<'_, T> {}
