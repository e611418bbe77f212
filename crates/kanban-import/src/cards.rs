use futures::future::try_join_all;
use kanban_domain::{ImportTarget, List, NewCard, UserId};

use crate::card_labels::link_card_labels;
use crate::comments::import_comments;
use crate::context::ImportContext;
use crate::error::{EntityKind, ImportError, ImportResult};
use crate::imported::ImportedCard;
use crate::source::{SourceCard, SourceList};
use crate::tasks::import_tasks;

pub fn card_fields(source_card: &SourceCard, creator_user_id: UserId) -> NewCard {
    NewCard {
        name: source_card.name.clone(),
        description: Some(source_card.desc.clone()).filter(|desc| !desc.is_empty()),
        position: source_card.pos,
        creator_user_id,
    }
}

/// Create the non-archived cards of a list, then fill each card in.
pub async fn import_cards<T>(
    ctx: ImportContext<'_, T>,
    source_list: &SourceList,
    list: &List,
) -> ImportResult<Vec<ImportedCard>>
where
    T: ImportTarget + ?Sized,
{
    try_join_all(
        ctx.source
            .open_cards_of_list(&source_list.id)
            .map(|source_card| import_card(ctx, source_card, list)),
    )
    .await
}

async fn import_card<T>(
    ctx: ImportContext<'_, T>,
    source_card: &SourceCard,
    list: &List,
) -> ImportResult<ImportedCard>
where
    T: ImportTarget + ?Sized,
{
    let card = ctx
        .target
        .create_card(ctx.board_id, list.id, card_fields(source_card, ctx.user_id))
        .await
        .map_err(ImportError::create(EntityKind::Card, &source_card.id))?;
    tracing::debug!(source_id = %source_card.id, card_id = %card.id, "created card");

    // Labels, tasks and comments write disjoint entity sets.
    let (labels, tasks, comments) = futures::try_join!(
        link_card_labels(ctx.target, ctx.labels, source_card, card.id),
        import_tasks(ctx.target, ctx.source, &source_card.id, card.id),
        import_comments(ctx.target, ctx.source, &source_card.id, card.id, ctx.user_id),
    )?;

    Ok(ImportedCard {
        card,
        labels,
        tasks,
        comments,
    })
}
