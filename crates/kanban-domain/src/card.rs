use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{board::BoardId, list::ListId, UserId};

pub type CardId = Uuid;

/// Fields for creating a card inside a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub description: Option<String>,
    pub position: f64,
    pub creator_user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    pub list_id: ListId,
    pub name: String,
    pub description: Option<String>,
    pub position: f64,
    pub creator_user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(board_id: BoardId, list_id: ListId, fields: NewCard) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            list_id,
            name: fields.name,
            description: fields.description,
            position: fields.position,
            creator_user_id: fields.creator_user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, position: f64) -> NewCard {
        NewCard {
            name: name.to_string(),
            description: None,
            position,
            creator_user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_card_carries_fields() {
        let board_id = Uuid::new_v4();
        let list_id = Uuid::new_v4();
        let new_card = fields("Write docs", 16384.0);
        let card = Card::new(board_id, list_id, new_card.clone());

        assert_eq!(card.board_id, board_id);
        assert_eq!(card.list_id, list_id);
        assert_eq!(card.name, "Write docs");
        assert_eq!(card.position, 16384.0);
        assert_eq!(card.creator_user_id, new_card.creator_user_id);
    }
}
