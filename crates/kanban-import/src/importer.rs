//! Import orchestration.
//!
//! Creation follows the foreign-key order of the target model: labels first,
//! then lists, then each list's cards with their labels, tasks and comments.
//! A failed import is not rolled back; entities created before the failure
//! remain and the first error is returned.

use futures::future::try_join_all;
use kanban_core::{AppConfig, KanbanResult};
use kanban_domain::{Board, BoardId, BoardService, ImportTarget, LabelColor, NewBoard, UserId};
use serde::Serialize;

use crate::cards::import_cards;
use crate::context::ImportContext;
use crate::error::{ImportError, ImportResult};
use crate::imported::{ImportedBoard, ImportedList};
use crate::labels::{import_labels, ColorPolicy};
use crate::lists::import_lists;
use crate::source::SourceBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ImportPhase {
    NotStarted,
    LabelsImported,
    ListsImported,
    Complete,
}

impl ImportPhase {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::LabelsImported),
            Self::LabelsImported => Some(Self::ListsImported),
            Self::ListsImported => Some(Self::Complete),
            Self::Complete => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    pub color_policy: ColorPolicy,
}

impl ImportOptions {
    pub fn from_config(config: &AppConfig) -> KanbanResult<Self> {
        let fallback: LabelColor = config.effective_fallback_label_color().parse()?;
        Ok(Self {
            color_policy: ColorPolicy::new(fallback),
        })
    }
}

/// Rebuilds one source board inside an existing target board.
pub struct BoardImporter<'a, T: ?Sized> {
    target: &'a T,
    source: &'a SourceBoard,
    options: ImportOptions,
    phase: ImportPhase,
}

impl<'a, T> BoardImporter<'a, T>
where
    T: ImportTarget + ?Sized,
{
    pub fn new(target: &'a T, source: &'a SourceBoard) -> Self {
        Self {
            target,
            source,
            options: ImportOptions::default(),
            phase: ImportPhase::NotStarted,
        }
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// Last phase the import completed. Stays where it stopped on failure.
    pub fn phase(&self) -> ImportPhase {
        self.phase
    }

    fn advance(&mut self, board_id: BoardId) {
        if let Some(next) = self.phase.next() {
            tracing::info!(board_id = %board_id, phase = ?next, "import phase reached");
            self.phase = next;
        }
    }

    /// Import into `board_id`, attributing created cards and comments to
    /// `user_id`.
    pub async fn import_into(
        &mut self,
        board_id: BoardId,
        user_id: UserId,
    ) -> ImportResult<ImportedBoard> {
        tracing::info!(
            board_id = %board_id,
            source_board = %self.source.id,
            lists = self.source.lists.len(),
            cards = self.source.cards.len(),
            "starting board import"
        );

        let labels = import_labels(
            self.target,
            board_id,
            self.source,
            &self.options.color_policy,
        )
        .await?;
        self.advance(board_id);

        let lists = import_lists(self.target, board_id, self.source).await?;
        self.advance(board_id);

        let ctx = ImportContext {
            target: self.target,
            source: self.source,
            labels: &labels,
            board_id,
            user_id,
        };
        let lists = try_join_all(lists.into_iter().map(|(source_list, list)| async move {
            let cards = import_cards(ctx, source_list, &list).await?;
            Ok::<_, ImportError>(ImportedList { list, cards })
        }))
        .await?;
        self.advance(board_id);

        let imported = ImportedBoard {
            board_id,
            labels: labels.labels().to_vec(),
            lists,
        };
        let summary = imported.summary();
        tracing::info!(
            board_id = %board_id,
            labels = summary.labels,
            lists = summary.lists,
            cards = summary.cards,
            tasks = summary.tasks,
            comments = summary.comments,
            "board import complete"
        );
        Ok(imported)
    }
}

/// Create a board and populate it from an export.
///
/// On failure the board and whatever was imported into it are left in place;
/// the caller decides whether to delete them.
pub async fn create_board_from_import<S>(
    store: &S,
    fields: NewBoard,
    source: &SourceBoard,
    user_id: UserId,
    options: ImportOptions,
) -> ImportResult<(Board, ImportedBoard)>
where
    S: BoardService + ImportTarget + ?Sized,
{
    let board = store.create_board(fields).await.map_err(ImportError::Board)?;
    let imported = BoardImporter::new(store, source)
        .with_options(options)
        .import_into(board.id, user_id)
        .await?;
    Ok((board, imported))
}
