use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{card::CardId, label::LabelId};

pub type CardLabelId = Uuid;

/// Attachment of a board label to a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardLabel {
    pub id: CardLabelId,
    pub card_id: CardId,
    pub label_id: LabelId,
    pub created_at: DateTime<Utc>,
}

impl CardLabel {
    pub fn new(card_id: CardId, label_id: LabelId) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            label_id,
            created_at: Utc::now(),
        }
    }
}
