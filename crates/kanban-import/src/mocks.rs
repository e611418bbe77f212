use async_trait::async_trait;
use kanban_core::KanbanResult;
use kanban_domain::{
    BoardId, Card, CardId, CardLabel, CardLabelService, CardService, Comment, CommentService,
    Label, LabelId, LabelService, List, ListId, ListService, NewCard, NewComment, NewLabel,
    NewList, NewTask, Task, TaskService,
};
use mockall::mock;

mock! {
    pub Target {}

    #[async_trait]
    impl LabelService for Target {
        async fn create_label(&self, board_id: BoardId, fields: NewLabel) -> KanbanResult<Label>;
    }

    #[async_trait]
    impl ListService for Target {
        async fn create_list(&self, board_id: BoardId, fields: NewList) -> KanbanResult<List>;
    }

    #[async_trait]
    impl CardService for Target {
        async fn create_card(
            &self,
            board_id: BoardId,
            list_id: ListId,
            fields: NewCard,
        ) -> KanbanResult<Card>;
    }

    #[async_trait]
    impl CardLabelService for Target {
        async fn create_card_label(
            &self,
            card_id: CardId,
            label_id: LabelId,
        ) -> KanbanResult<CardLabel>;
    }

    #[async_trait]
    impl TaskService for Target {
        async fn create_task(&self, card_id: CardId, fields: NewTask) -> KanbanResult<Task>;
    }

    #[async_trait]
    impl CommentService for Target {
        async fn create_comment(&self, card_id: CardId, fields: NewComment) -> KanbanResult<Comment>;
    }
}
