use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{card::CardId, UserId};

pub type CommentId = Uuid;

/// Fields for creating a plain-text comment on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub user_id: UserId,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub card_id: CardId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(card_id: CardId, fields: NewComment) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            user_id: fields.user_id,
            text: fields.text,
            created_at: Utc::now(),
        }
    }
}
