use kanban_core::KanbanError;
use std::fmt;
use thiserror::Error;

/// Kind of target entity an import step was creating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Label,
    List,
    Card,
    CardLabel,
    Task,
    Comment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Label => "label",
            Self::List => "list",
            Self::Card => "card",
            Self::CardLabel => "card label",
            Self::Task => "task",
            Self::Comment => "comment",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    /// A card references a label that was never created. The export is
    /// inconsistent; this is not retried.
    #[error("Card {card_id} references label {label_id} which has no imported counterpart")]
    UnmappedLabel { label_id: String, card_id: String },

    #[error("Failed to create {entity} for source entity {source_id}: {source}")]
    Create {
        entity: EntityKind,
        source_id: String,
        #[source]
        source: KanbanError,
    },

    #[error("Failed to create target board: {0}")]
    Board(#[source] KanbanError),
}

impl ImportError {
    pub(crate) fn create(
        entity: EntityKind,
        source_id: impl Into<String>,
    ) -> impl FnOnce(KanbanError) -> Self {
        let source_id = source_id.into();
        move |source| Self::Create {
            entity,
            source_id,
            source,
        }
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
