use async_trait::async_trait;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::{
    Board, BoardId, BoardService, BoardSnapshot, Card, CardId, CardLabel, CardLabelService,
    CardService, Comment, CommentService, Label, LabelId, LabelService, List, ListId,
    ListService, NewBoard, NewCard, NewComment, NewLabel, NewList, NewTask, Task, TaskService,
};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// In-memory board store implementing every creation service.
///
/// Each create checks that the parent entities exist and belong together, the
/// way a relational store would enforce its foreign keys.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    boards: Vec<Board>,
    labels: Vec<Label>,
    lists: Vec<List>,
    cards: Vec<Card>,
    card_labels: Vec<CardLabel>,
    tasks: Vec<Task>,
    comments: Vec<Comment>,
}

fn require_name(kind: &str, name: &str) -> KanbanResult<()> {
    if name.trim().is_empty() {
        return Err(KanbanError::Validation(format!("{} name must not be empty", kind)));
    }
    Ok(())
}

impl StoreState {
    fn board(&self, id: BoardId) -> KanbanResult<&Board> {
        self.boards
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| KanbanError::NotFound(format!("board {}", id)))
    }

    fn list(&self, id: ListId) -> KanbanResult<&List> {
        self.lists
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| KanbanError::NotFound(format!("list {}", id)))
    }

    fn card(&self, id: CardId) -> KanbanResult<&Card> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| KanbanError::NotFound(format!("card {}", id)))
    }

    fn label(&self, id: LabelId) -> KanbanResult<&Label> {
        self.labels
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| KanbanError::NotFound(format!("label {}", id)))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn boards(&self) -> Vec<Board> {
        self.state.lock().await.boards.clone()
    }

    /// Capture a board and everything it owns.
    pub async fn snapshot(&self, board_id: BoardId) -> KanbanResult<BoardSnapshot> {
        let state = self.state.lock().await;
        let mut snapshot = BoardSnapshot::new(state.board(board_id)?.clone());

        snapshot.labels = state
            .labels
            .iter()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        snapshot.lists = state
            .lists
            .iter()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        snapshot.cards = state
            .cards
            .iter()
            .filter(|c| c.board_id == board_id)
            .cloned()
            .collect();

        let card_ids: HashSet<CardId> = snapshot.cards.iter().map(|c| c.id).collect();
        snapshot.card_labels = state
            .card_labels
            .iter()
            .filter(|cl| card_ids.contains(&cl.card_id))
            .cloned()
            .collect();
        snapshot.tasks = state
            .tasks
            .iter()
            .filter(|t| card_ids.contains(&t.card_id))
            .cloned()
            .collect();
        snapshot.comments = state
            .comments
            .iter()
            .filter(|c| card_ids.contains(&c.card_id))
            .cloned()
            .collect();

        Ok(snapshot)
    }
}

#[async_trait]
impl BoardService for MemoryStore {
    async fn create_board(&self, fields: NewBoard) -> KanbanResult<Board> {
        require_name("Board", &fields.name)?;
        let board = Board::from(fields);
        self.state.lock().await.boards.push(board.clone());
        tracing::debug!("Created board: {} (id: {})", board.name, board.id);
        Ok(board)
    }
}

#[async_trait]
impl LabelService for MemoryStore {
    async fn create_label(&self, board_id: BoardId, fields: NewLabel) -> KanbanResult<Label> {
        let mut state = self.state.lock().await;
        state.board(board_id)?;
        let label = Label::new(board_id, fields);
        state.labels.push(label.clone());
        Ok(label)
    }
}

#[async_trait]
impl ListService for MemoryStore {
    async fn create_list(&self, board_id: BoardId, fields: NewList) -> KanbanResult<List> {
        require_name("List", &fields.name)?;
        let mut state = self.state.lock().await;
        state.board(board_id)?;
        let list = List::new(board_id, fields);
        state.lists.push(list.clone());
        Ok(list)
    }
}

#[async_trait]
impl CardService for MemoryStore {
    async fn create_card(
        &self,
        board_id: BoardId,
        list_id: ListId,
        fields: NewCard,
    ) -> KanbanResult<Card> {
        require_name("Card", &fields.name)?;
        let mut state = self.state.lock().await;
        if state.list(list_id)?.board_id != board_id {
            return Err(KanbanError::Validation(format!(
                "list {} does not belong to board {}",
                list_id, board_id
            )));
        }
        let card = Card::new(board_id, list_id, fields);
        state.cards.push(card.clone());
        Ok(card)
    }
}

#[async_trait]
impl CardLabelService for MemoryStore {
    async fn create_card_label(
        &self,
        card_id: CardId,
        label_id: LabelId,
    ) -> KanbanResult<CardLabel> {
        let mut state = self.state.lock().await;
        let card_board = state.card(card_id)?.board_id;
        if state.label(label_id)?.board_id != card_board {
            return Err(KanbanError::Validation(format!(
                "label {} does not belong to the board of card {}",
                label_id, card_id
            )));
        }
        if state
            .card_labels
            .iter()
            .any(|cl| cl.card_id == card_id && cl.label_id == label_id)
        {
            return Err(KanbanError::Validation(format!(
                "label {} is already attached to card {}",
                label_id, card_id
            )));
        }
        let card_label = CardLabel::new(card_id, label_id);
        state.card_labels.push(card_label.clone());
        Ok(card_label)
    }
}

#[async_trait]
impl TaskService for MemoryStore {
    async fn create_task(&self, card_id: CardId, fields: NewTask) -> KanbanResult<Task> {
        require_name("Task", &fields.name)?;
        let mut state = self.state.lock().await;
        state.card(card_id)?;
        let task = Task::new(card_id, fields);
        state.tasks.push(task.clone());
        Ok(task)
    }
}

#[async_trait]
impl CommentService for MemoryStore {
    async fn create_comment(&self, card_id: CardId, fields: NewComment) -> KanbanResult<Comment> {
        if fields.text.trim().is_empty() {
            return Err(KanbanError::Validation(
                "Comment text must not be empty".to_string(),
            ));
        }
        let mut state = self.state.lock().await;
        state.card(card_id)?;
        let comment = Comment::new(card_id, fields);
        state.comments.push(comment.clone());
        Ok(comment)
    }
}
