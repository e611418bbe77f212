use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::CardId;

pub type TaskId = Uuid;

/// Fields for creating a task on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub position: f64,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub card_id: CardId,
    pub name: String,
    pub position: f64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(card_id: CardId, fields: NewTask) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            name: fields.name,
            position: fields.position,
            is_completed: fields.is_completed,
            created_at: Utc::now(),
        }
    }
}
