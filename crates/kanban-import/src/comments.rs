//! Comment import.
//!
//! Comment events are re-created as plain-text comments authored by the
//! importing user, with a note naming the original author and date appended.

use chrono::SecondsFormat;
use kanban_domain::{CardId, Comment, CommentService, NewComment, UserId};

use crate::error::{EntityKind, ImportError, ImportResult};
use crate::source::{SourceAction, SourceBoard};

/// Comment events on a card ordered by date. Events with the same date keep
/// their export order.
pub fn ordered_comments<'a>(source: &'a SourceBoard, card_id: &'a str) -> Vec<&'a SourceAction> {
    let mut comments: Vec<&SourceAction> = source.comments_of_card(card_id).collect();
    comments.sort_by_key(|action| action.date);
    comments
}

/// Original body followed by the provenance note.
pub fn comment_text(action: &SourceAction) -> String {
    let text = action.data.text.as_deref().unwrap_or_default();
    let author = match &action.member_creator {
        Some(member) => format!("{} ({})", member.full_name, member.username),
        None => "an unknown member".to_string(),
    };
    format!(
        "{}\n\n---\n*Note: imported comment, originally posted by \n{} on {}*",
        text,
        author,
        action.date.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Create the comments of a card one at a time, oldest first, so stores that
/// stamp comments with their creation time keep the original chronology.
pub async fn import_comments<T>(
    target: &T,
    source: &SourceBoard,
    source_card_id: &str,
    card_id: CardId,
    user_id: UserId,
) -> ImportResult<Vec<Comment>>
where
    T: CommentService + ?Sized,
{
    let mut created = Vec::new();
    for action in ordered_comments(source, source_card_id) {
        let fields = NewComment {
            user_id,
            text: comment_text(action),
        };
        let comment = target
            .create_comment(card_id, fields)
            .await
            .map_err(ImportError::create(EntityKind::Comment, &action.id))?;
        created.push(comment);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ActionCardRef, ActionData, SourceMember};
    use chrono::{TimeZone, Utc};

    fn comment(id: &str, card: &str, day: u32, text: &str) -> SourceAction {
        SourceAction {
            id: id.to_string(),
            kind: "commentCard".to_string(),
            date: Utc.with_ymd_and_hms(2022, 5, day, 9, 30, 0).unwrap(),
            data: ActionData {
                text: Some(text.to_string()),
                card: Some(ActionCardRef {
                    id: card.to_string(),
                }),
            },
            member_creator: Some(SourceMember {
                full_name: "Grace Hopper".to_string(),
                username: "grace".to_string(),
            }),
        }
    }

    #[test]
    fn test_ordered_comments_by_date() {
        let source = SourceBoard {
            actions: vec![
                comment("third", "c1", 3, "c"),
                comment("first", "c1", 1, "a"),
                comment("second", "c1", 2, "b"),
            ],
            ..SourceBoard::default()
        };

        let ids: Vec<&str> = ordered_comments(&source, "c1")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ordered_comments_ties_keep_export_order() {
        let source = SourceBoard {
            actions: vec![
                comment("late", "c1", 9, "z"),
                comment("tie-a", "c1", 4, "x"),
                comment("tie-b", "c1", 4, "y"),
                comment("tie-c", "c1", 4, "w"),
            ],
            ..SourceBoard::default()
        };

        let ids: Vec<&str> = ordered_comments(&source, "c1")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tie-a", "tie-b", "tie-c", "late"]);
    }

    #[test]
    fn test_ordered_comments_skip_non_comments_and_other_cards() {
        let mut update = comment("update", "c1", 1, "");
        update.kind = "updateCard".to_string();
        let source = SourceBoard {
            actions: vec![update, comment("other", "c2", 1, "x"), comment("mine", "c1", 2, "y")],
            ..SourceBoard::default()
        };

        let ids: Vec<&str> = ordered_comments(&source, "c1")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["mine"]);
    }

    #[test]
    fn test_comment_text_appends_provenance() {
        let text = comment_text(&comment("a1", "c1", 7, "Ship it"));
        assert_eq!(
            text,
            "Ship it\n\n---\n*Note: imported comment, originally posted by \nGrace Hopper (grace) on 2022-05-07T09:30:00.000Z*"
        );
    }

    #[test]
    fn test_comment_text_without_author() {
        let mut action = comment("a1", "c1", 7, "Hello");
        action.member_creator = None;
        let text = comment_text(&action);
        assert!(text.starts_with("Hello\n\n---\n"));
        assert!(text.contains("an unknown member on 2022-05-07"));
    }
}
