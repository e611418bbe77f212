//! Import of external board exports into kanban boards.
//!
//! The entry points are [`BoardImporter`] for populating an existing board and
//! [`create_board_from_import`] for the create-then-import workflow. All
//! writes go through the creation services of `kanban-domain`.

pub mod card_labels;
pub mod cards;
pub mod comments;
pub mod context;
pub mod error;
pub mod imported;
pub mod importer;
pub mod labels;
pub mod lists;
pub mod source;
pub mod tasks;

#[cfg(test)]
mod mocks;

pub use error::{EntityKind, ImportError, ImportResult};
pub use imported::{ImportSummary, ImportedBoard, ImportedCard, ImportedList};
pub use importer::{create_board_from_import, BoardImporter, ImportOptions, ImportPhase};
pub use labels::{ColorPolicy, IdentifierMap};
pub use source::SourceBoard;
pub use tasks::flatten_checklists;
