//! Checklist import.
//!
//! The target model has no checklist concept, so every check-item of every
//! checklist on a card becomes one task in a single flat list. Checklist
//! boundaries and titles are dropped; only item position, name and state
//! survive.

use futures::future::try_join_all;
use kanban_domain::{CardId, NewTask, Task, TaskService};

use crate::error::{EntityKind, ImportError, ImportResult};
use crate::source::{SourceBoard, SourceCheckItem, SourceChecklist};

/// Check-items of the checklists owned by `card_id`, sorted by position.
/// Items with equal positions keep their input order.
fn ordered_check_items<'a, I>(card_id: &str, checklists: I) -> Vec<&'a SourceCheckItem>
where
    I: IntoIterator<Item = &'a SourceChecklist>,
{
    let mut items: Vec<&SourceCheckItem> = checklists
        .into_iter()
        .filter(|checklist| checklist.id_card == card_id)
        .flat_map(|checklist| checklist.check_items.iter())
        .collect();
    items.sort_by(|a, b| a.pos.total_cmp(&b.pos));
    items
}

fn task_fields(item: &SourceCheckItem) -> NewTask {
    NewTask {
        name: item.name.clone(),
        position: item.pos,
        is_completed: item.is_complete(),
    }
}

/// Project the checklists of a card onto an ordered task list.
///
/// Items from checklists not owned by `card_id` are ignored. The result is
/// sorted by item position; items with equal positions keep their input order.
pub fn flatten_checklists<'a, I>(card_id: &str, checklists: I) -> Vec<NewTask>
where
    I: IntoIterator<Item = &'a SourceChecklist>,
{
    ordered_check_items(card_id, checklists)
        .into_iter()
        .map(task_fields)
        .collect()
}

/// Create the flattened tasks of a card concurrently. A failure names the
/// check-item it came from.
pub async fn import_tasks<T>(
    target: &T,
    source: &SourceBoard,
    source_card_id: &str,
    card_id: CardId,
) -> ImportResult<Vec<Task>>
where
    T: TaskService + ?Sized,
{
    let items = ordered_check_items(source_card_id, source.checklists_of_card(source_card_id));
    try_join_all(items.into_iter().map(|item| async move {
        target
            .create_task(card_id, task_fields(item))
            .await
            .map_err(ImportError::create(EntityKind::Task, &item.id))
    }))
    .await
}
