//! External board export model.
//!
//! Mirrors the shape of a Trello board export. Values are read-only input to
//! the importer; nothing here is mutated during an import.

use chrono::{DateTime, Utc};
use kanban_core::{KanbanError, KanbanResult};
use serde::Deserialize;

/// Action type of a comment event in the export's activity log.
pub const COMMENT_ACTION: &str = "commentCard";

/// Check-item state that maps to a completed task.
pub const CHECK_ITEM_COMPLETE: &str = "complete";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBoard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub lists: Vec<SourceList>,
    pub cards: Vec<SourceCard>,
    pub labels: Vec<SourceLabel>,
    pub checklists: Vec<SourceChecklist>,
    pub actions: Vec<SourceAction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceLabel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceList {
    pub id: String,
    pub name: String,
    pub pos: f64,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCard {
    pub id: String,
    pub id_list: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub pos: f64,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub labels: Vec<SourceLabel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceChecklist {
    pub id: String,
    pub id_card: String,
    #[serde(default)]
    pub check_items: Vec<SourceCheckItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceCheckItem {
    pub id: String,
    pub name: String,
    pub pos: f64,
    pub state: String,
}

impl SourceCheckItem {
    pub fn is_complete(&self) -> bool {
        self.state == CHECK_ITEM_COMPLETE
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub data: ActionData,
    #[serde(default)]
    pub member_creator: Option<SourceMember>,
}

impl SourceAction {
    /// Whether this event is a comment posted on the given card.
    pub fn is_comment_on(&self, card_id: &str) -> bool {
        self.kind == COMMENT_ACTION
            && self
                .data
                .card
                .as_ref()
                .is_some_and(|card| card.id == card_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionData {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub card: Option<ActionCardRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionCardRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMember {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
}

impl SourceBoard {
    /// Parse an uploaded export. All top-level collections must be present.
    pub fn from_json(json: &str) -> KanbanResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            KanbanError::Serialization(format!(
                "Invalid board export. Expected lists, cards, labels, checklists and actions. Error: {}",
                err
            ))
        })
    }

    /// Lists that are not archived.
    pub fn open_lists(&self) -> impl Iterator<Item = &SourceList> {
        self.lists.iter().filter(|list| !list.closed)
    }

    /// Non-archived cards of a list.
    pub fn open_cards_of_list<'a>(
        &'a self,
        list_id: &'a str,
    ) -> impl Iterator<Item = &'a SourceCard> + 'a {
        self.cards
            .iter()
            .filter(move |card| card.id_list == list_id && !card.closed)
    }

    /// Cards that will be imported: not archived and in a list that is not
    /// archived.
    pub fn importable_cards(&self) -> impl Iterator<Item = &SourceCard> {
        self.open_lists()
            .flat_map(move |list| self.open_cards_of_list(list.id.as_str()))
    }

    pub fn checklists_of_card<'a>(
        &'a self,
        card_id: &'a str,
    ) -> impl Iterator<Item = &'a SourceChecklist> + 'a {
        self.checklists
            .iter()
            .filter(move |checklist| checklist.id_card == card_id)
    }

    /// Comment events on a card, in export order.
    pub fn comments_of_card<'a>(
        &'a self,
        card_id: &'a str,
    ) -> impl Iterator<Item = &'a SourceAction> + 'a {
        self.actions
            .iter()
            .filter(move |action| action.is_comment_on(card_id))
    }
}
