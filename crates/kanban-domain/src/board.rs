use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type BoardId = Uuid;

/// Fields for creating a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBoard {
    pub name: String,
    pub description: Option<String>,
}

impl NewBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<NewBoard> for Board {
    fn from(fields: NewBoard) -> Self {
        Self::new(fields.name, fields.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_fields() {
        let board = Board::from(NewBoard::new("Roadmap"));
        assert_eq!(board.name, "Roadmap");
        assert_eq!(board.description, None);
        assert_eq!(board.created_at, board.updated_at);
    }
}
