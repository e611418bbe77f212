//! Point-in-time capture of one board and everything it owns.
//!
//! `BoardSnapshot` is the flat, serializable form of a board graph. Stores
//! produce it for persistence, and readers use the accessors below to walk the
//! graph in display order (by `position`), which is independent of the order
//! entities were created in.

use crate::{Board, Card, CardLabel, Comment, Label, List, ListId, Task};
use crate::{CardId, LabelId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: Board,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub lists: Vec<List>,

    #[serde(default)]
    pub cards: Vec<Card>,

    #[serde(default)]
    pub card_labels: Vec<CardLabel>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Comments in creation order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl BoardSnapshot {
    /// Create a snapshot of a board that owns nothing yet.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            labels: Vec::new(),
            lists: Vec::new(),
            cards: Vec::new(),
            card_labels: Vec::new(),
            tasks: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Lists ordered by position.
    pub fn ordered_lists(&self) -> Vec<&List> {
        let mut lists: Vec<&List> = self.lists.iter().collect();
        lists.sort_by(|a, b| a.position.total_cmp(&b.position));
        lists
    }

    /// Cards of a list ordered by position.
    pub fn cards_in_list(&self, list_id: ListId) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().filter(|c| c.list_id == list_id).collect();
        cards.sort_by(|a, b| a.position.total_cmp(&b.position));
        cards
    }

    /// Tasks of a card ordered by position.
    pub fn tasks_of(&self, card_id: CardId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.card_id == card_id).collect();
        tasks.sort_by(|a, b| a.position.total_cmp(&b.position));
        tasks
    }

    /// Comments of a card in the order they were created.
    pub fn comments_of(&self, card_id: CardId) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.card_id == card_id)
            .collect()
    }

    /// Labels attached to a card.
    pub fn labels_of(&self, card_id: CardId) -> Vec<&Label> {
        let label_ids: Vec<LabelId> = self
            .card_labels
            .iter()
            .filter(|cl| cl.card_id == card_id)
            .map(|cl| cl.label_id)
            .collect();
        self.labels
            .iter()
            .filter(|label| label_ids.contains(&label.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewCard, NewList, NewTask};
    use uuid::Uuid;

    fn card(board: &Board, list_id: ListId, name: &str, position: f64) -> Card {
        Card::new(
            board.id,
            list_id,
            NewCard {
                name: name.to_string(),
                description: None,
                position,
                creator_user_id: Uuid::new_v4(),
            },
        )
    }

    #[test]
    fn test_cards_in_list_sorted_by_position() {
        let board = Board::new("Board".to_string(), None);
        let list = List::new(
            board.id,
            NewList {
                name: "Todo".to_string(),
                position: 1.0,
            },
        );
        let mut snapshot = BoardSnapshot::new(board.clone());
        snapshot.cards.push(card(&board, list.id, "c", 3.0));
        snapshot.cards.push(card(&board, list.id, "a", 1.0));
        snapshot.cards.push(card(&board, list.id, "b", 2.0));
        snapshot.cards.push(card(&board, Uuid::new_v4(), "other", 0.5));
        snapshot.lists.push(list.clone());

        let names: Vec<&str> = snapshot
            .cards_in_list(list.id)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tasks_of_sorted_by_position() {
        let board = Board::new("Board".to_string(), None);
        let card_id = Uuid::new_v4();
        let mut snapshot = BoardSnapshot::new(board);
        for (name, position) in [("second", 20.0), ("first", 10.0)] {
            snapshot.tasks.push(Task::new(
                card_id,
                NewTask {
                    name: name.to_string(),
                    position,
                    is_completed: false,
                },
            ));
        }

        let names: Vec<&str> = snapshot
            .tasks_of(card_id)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_snapshot_json_defaults() {
        let board = Board::new("Board".to_string(), None);
        let json = serde_json::json!({ "board": board });
        let snapshot: BoardSnapshot = serde_json::from_value(json).unwrap();
        assert!(snapshot.lists.is_empty());
        assert!(snapshot.comments.is_empty());
    }
}
