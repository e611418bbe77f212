//! Label mapping.
//!
//! Labels are the only entities looked up by id during an import: cards refer
//! to them by source id, so every label used by an imported card is created up
//! front and recorded in an [`IdentifierMap`].

use std::collections::{HashMap, HashSet};

use futures::future::try_join_all;
use kanban_domain::{BoardId, Label, LabelColor, LabelService, NewLabel};

use crate::error::{EntityKind, ImportError, ImportResult};
use crate::source::{SourceBoard, SourceLabel};

/// Palette-compatibility policy for translating source label colors.
///
/// Resolution order: exact canonical name, then the first palette entry (in
/// declaration order) whose name contains the source token, then the fallback.
/// Substring matching is a heuristic: several source colors have no
/// counterpart and land on the fallback, and a token can match more than one
/// palette entry, in which case declaration order decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPolicy {
    fallback: LabelColor,
}

impl ColorPolicy {
    pub fn new(fallback: LabelColor) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> LabelColor {
        self.fallback
    }

    /// An empty or whitespace-only color goes to the fallback instead of
    /// substring-matching the first palette entry.
    pub fn resolve(&self, source_color: Option<&str>) -> LabelColor {
        let token = match source_color.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return self.fallback,
        };

        LabelColor::ALL
            .into_iter()
            .find(|color| color.as_str() == token)
            .or_else(|| {
                LabelColor::ALL
                    .into_iter()
                    .find(|color| color.as_str().contains(token))
            })
            .unwrap_or(self.fallback)
    }
}

/// Source label id to created target label.
#[derive(Debug, Clone, Default)]
pub struct IdentifierMap {
    labels: Vec<Label>,
    index: HashMap<String, usize>,
}

impl IdentifierMap {
    pub fn insert(&mut self, source_id: String, label: Label) {
        match self.index.get(&source_id) {
            Some(&position) => self.labels[position] = label,
            None => {
                self.index.insert(source_id, self.labels.len());
                self.labels.push(label);
            }
        }
    }

    pub fn get(&self, source_id: &str) -> Option<&Label> {
        self.index.get(source_id).map(|&position| &self.labels[position])
    }

    /// Look up the label a card refers to. A miss means the export references
    /// a label that was never imported.
    pub fn resolve(&self, source_id: &str, card_id: &str) -> ImportResult<&Label> {
        self.get(source_id).ok_or_else(|| {
            tracing::error!(
                label_id = source_id,
                card_id,
                "card references a label missing from the identifier map"
            );
            ImportError::UnmappedLabel {
                label_id: source_id.to_string(),
                card_id: card_id.to_string(),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Created labels in first-referenced order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl FromIterator<(String, Label)> for IdentifierMap {
    fn from_iter<I: IntoIterator<Item = (String, Label)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (source_id, label) in iter {
            map.insert(source_id, label);
        }
        map
    }
}

/// Distinct labels referenced by importable cards, first occurrence wins.
pub fn referenced_labels(source: &SourceBoard) -> Vec<&SourceLabel> {
    let mut seen = HashSet::new();
    source
        .importable_cards()
        .flat_map(|card| card.labels.iter())
        .filter(|label| seen.insert(label.id.as_str()))
        .collect()
}

/// Field struct for the target label of a source label.
pub fn label_fields(label: &SourceLabel, policy: &ColorPolicy) -> NewLabel {
    NewLabel {
        name: label.name.clone().filter(|name| !name.is_empty()),
        color: policy.resolve(label.color.as_deref()),
    }
}

/// Create every referenced label. Fails as a whole if any creation fails.
pub async fn import_labels<T>(
    target: &T,
    board_id: BoardId,
    source: &SourceBoard,
    policy: &ColorPolicy,
) -> ImportResult<IdentifierMap>
where
    T: LabelService + ?Sized,
{
    let created = try_join_all(referenced_labels(source).into_iter().map(|source_label| async move {
        let label = target
            .create_label(board_id, label_fields(source_label, policy))
            .await
            .map_err(ImportError::create(EntityKind::Label, &source_label.id))?;
        tracing::debug!(
            source_id = %source_label.id,
            label_id = %label.id,
            color = %label.color,
            "created label"
        );
        Ok::<_, ImportError>((source_label.id.clone(), label))
    }))
    .await?;

    Ok(created.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceCard, SourceList};

    fn label(id: &str, name: Option<&str>, color: Option<&str>) -> SourceLabel {
        SourceLabel {
            id: id.to_string(),
            name: name.map(str::to_string),
            color: color.map(str::to_string),
        }
    }

    fn card(id: &str, list: &str, closed: bool, labels: Vec<SourceLabel>) -> SourceCard {
        SourceCard {
            id: id.to_string(),
            id_list: list.to_string(),
            name: id.to_string(),
            desc: String::new(),
            pos: 1.0,
            closed,
            labels,
        }
    }

    fn board(cards: Vec<SourceCard>) -> SourceBoard {
        SourceBoard {
            lists: vec![
                SourceList {
                    id: "open".to_string(),
                    name: "Open".to_string(),
                    pos: 1.0,
                    closed: false,
                },
                SourceList {
                    id: "closed".to_string(),
                    name: "Closed".to_string(),
                    pos: 2.0,
                    closed: true,
                },
            ],
            cards,
            ..SourceBoard::default()
        }
    }

    #[test]
    fn test_color_exact_match_wins() {
        let policy = ColorPolicy::default();
        assert_eq!(policy.resolve(Some("navy-blue")), LabelColor::NavyBlue);
    }

    #[test]
    fn test_color_first_declared_containing_match() {
        let policy = ColorPolicy::default();
        assert_eq!(policy.resolve(Some("green")), LabelColor::TankGreen);
        assert_eq!(policy.resolve(Some("red")), LabelColor::BerryRed);
        assert_eq!(policy.resolve(Some("orange")), LabelColor::PumpkinOrange);
        assert_eq!(policy.resolve(Some("blue")), LabelColor::LagoonBlue);
        assert_eq!(policy.resolve(Some("sky")), LabelColor::MorningSky);
    }

    #[test]
    fn test_color_is_deterministic() {
        let policy = ColorPolicy::default();
        let first = policy.resolve(Some("green"));
        for _ in 0..10 {
            assert_eq!(policy.resolve(Some("green")), first);
        }
    }

    #[test]
    fn test_color_unknown_falls_back() {
        let policy = ColorPolicy::default();
        for _ in 0..3 {
            assert_eq!(policy.resolve(Some("neon-plaid")), LabelColor::DesertSand);
        }
        assert_eq!(policy.resolve(Some("purple")), LabelColor::DesertSand);
    }

    #[test]
    fn test_color_absent_or_empty_falls_back() {
        let policy = ColorPolicy::new(LabelColor::GunMetal);
        assert_eq!(policy.resolve(None), LabelColor::GunMetal);
        assert_eq!(policy.resolve(Some("")), LabelColor::GunMetal);
        assert_eq!(policy.resolve(Some("  ")), LabelColor::GunMetal);
    }

    #[test]
    fn test_referenced_labels_dedupe_keeps_first_seen() {
        let source = board(vec![
            card("c1", "open", false, vec![label("l1", Some("Bug"), Some("red"))]),
            card(
                "c2",
                "open",
                false,
                vec![
                    label("l1", Some("Renamed"), Some("blue")),
                    label("l2", None, Some("green")),
                ],
            ),
        ]);

        let labels = referenced_labels(&source);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].id, "l1");
        assert_eq!(labels[0].name.as_deref(), Some("Bug"));
        assert_eq!(labels[1].id, "l2");
    }

    #[test]
    fn test_referenced_labels_skip_archived_cards_and_lists() {
        let source = board(vec![
            card("c1", "open", true, vec![label("archived-card", None, None)]),
            card("c2", "closed", false, vec![label("archived-list", None, None)]),
            card("c3", "open", false, vec![label("kept", None, None)]),
        ]);

        let ids: Vec<&str> = referenced_labels(&source)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["kept"]);
    }

    #[test]
    fn test_label_fields_empty_name_is_none() {
        let fields = label_fields(&label("l1", Some(""), Some("yellow")), &ColorPolicy::default());
        assert_eq!(fields.name, None);
        assert_eq!(fields.color, LabelColor::EggYellow);
    }

    #[test]
    fn test_identifier_map_resolve_missing() {
        let map = IdentifierMap::default();
        let err = map.resolve("ghost", "c1").unwrap_err();
        assert!(matches!(err, ImportError::UnmappedLabel { .. }));
    }
}
