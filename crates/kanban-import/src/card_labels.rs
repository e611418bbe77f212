use futures::future::try_join_all;
use kanban_domain::{CardId, CardLabel, CardLabelService};

use crate::error::{EntityKind, ImportError, ImportResult};
use crate::labels::IdentifierMap;
use crate::source::SourceCard;

/// Attach the labels of a source card to its imported counterpart.
///
/// Every reference is resolved before any link is created, so an unmapped
/// label fails the card without writing a partial label set.
pub async fn link_card_labels<T>(
    target: &T,
    labels: &IdentifierMap,
    source_card: &SourceCard,
    card_id: CardId,
) -> ImportResult<Vec<CardLabel>>
where
    T: CardLabelService + ?Sized,
{
    let resolved = source_card
        .labels
        .iter()
        .map(|label| {
            labels
                .resolve(&label.id, &source_card.id)
                .map(|target_label| (label.id.as_str(), target_label.id))
        })
        .collect::<ImportResult<Vec<_>>>()?;

    try_join_all(resolved.into_iter().map(|(source_id, label_id)| async move {
        target
            .create_card_label(card_id, label_id)
            .await
            .map_err(ImportError::create(EntityKind::CardLabel, source_id))
    }))
    .await
}
