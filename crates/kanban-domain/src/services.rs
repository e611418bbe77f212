//! Entity creation services.
//!
//! Each service has a single "create-or-fail" contract: it receives the
//! handles of the parent entities plus a field struct and returns the created
//! entity. The import engine depends only on these traits, never on how a
//! store persists what it creates.

use async_trait::async_trait;
use kanban_core::KanbanResult;

use crate::{
    Board, BoardId, Card, CardId, CardLabel, Comment, Label, LabelId, List, ListId, NewBoard,
    NewCard, NewComment, NewLabel, NewList, NewTask, Task,
};

#[async_trait]
pub trait BoardService: Send + Sync {
    async fn create_board(&self, fields: NewBoard) -> KanbanResult<Board>;
}

#[async_trait]
pub trait LabelService: Send + Sync {
    async fn create_label(&self, board_id: BoardId, fields: NewLabel) -> KanbanResult<Label>;
}

#[async_trait]
pub trait ListService: Send + Sync {
    async fn create_list(&self, board_id: BoardId, fields: NewList) -> KanbanResult<List>;
}

#[async_trait]
pub trait CardService: Send + Sync {
    async fn create_card(
        &self,
        board_id: BoardId,
        list_id: ListId,
        fields: NewCard,
    ) -> KanbanResult<Card>;
}

#[async_trait]
pub trait CardLabelService: Send + Sync {
    async fn create_card_label(&self, card_id: CardId, label_id: LabelId)
        -> KanbanResult<CardLabel>;
}

#[async_trait]
pub trait TaskService: Send + Sync {
    async fn create_task(&self, card_id: CardId, fields: NewTask) -> KanbanResult<Task>;
}

#[async_trait]
pub trait CommentService: Send + Sync {
    async fn create_comment(&self, card_id: CardId, fields: NewComment) -> KanbanResult<Comment>;
}

/// Everything a board import needs to write into the target system.
pub trait ImportTarget:
    LabelService + ListService + CardService + CardLabelService + TaskService + CommentService
{
}

impl<T> ImportTarget for T where
    T: LabelService + ListService + CardService + CardLabelService + TaskService + CommentService
{
}
