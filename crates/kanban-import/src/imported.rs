//! The board graph produced by an import.

use kanban_domain::{BoardId, Card, CardLabel, Comment, Label, List, Task};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ImportedCard {
    pub card: Card,
    pub labels: Vec<CardLabel>,
    pub tasks: Vec<Task>,
    /// In creation order, which is chronological in the source.
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportedList {
    pub list: List,
    pub cards: Vec<ImportedCard>,
}

/// Every entity created for one board, owned by its parent.
#[derive(Debug, Clone, Serialize)]
pub struct ImportedBoard {
    pub board_id: BoardId,
    pub labels: Vec<Label>,
    pub lists: Vec<ImportedList>,
}

/// Number of entities created per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub labels: usize,
    pub lists: usize,
    pub cards: usize,
    pub card_labels: usize,
    pub tasks: usize,
    pub comments: usize,
}

impl ImportedBoard {
    pub fn cards(&self) -> impl Iterator<Item = &ImportedCard> {
        self.lists.iter().flat_map(|list| list.cards.iter())
    }

    pub fn summary(&self) -> ImportSummary {
        self.cards().fold(
            ImportSummary {
                labels: self.labels.len(),
                lists: self.lists.len(),
                ..ImportSummary::default()
            },
            |mut summary, card| {
                summary.cards += 1;
                summary.card_labels += card.labels.len();
                summary.tasks += card.tasks.len();
                summary.comments += card.comments.len();
                summary
            },
        )
    }
}
