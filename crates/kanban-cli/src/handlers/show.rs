use crate::output;
use kanban_domain::{BoardSnapshot, Card};
use kanban_persistence::{JsonFileStore, PersistenceStore};
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

#[derive(Serialize)]
struct BoardView {
    id: Uuid,
    name: String,
    description: Option<String>,
    lists: Vec<ListView>,
}

#[derive(Serialize)]
struct ListView {
    name: String,
    position: f64,
    cards: Vec<CardView>,
}

#[derive(Serialize)]
struct CardView {
    name: String,
    position: f64,
    labels: Vec<String>,
    tasks: usize,
    completed_tasks: usize,
    comments: usize,
}

fn card_view(snapshot: &BoardSnapshot, card: &Card) -> CardView {
    let tasks = snapshot.tasks_of(card.id);
    CardView {
        name: card.name.clone(),
        position: card.position,
        labels: snapshot
            .labels_of(card.id)
            .iter()
            .map(|l| l.name.clone().unwrap_or_else(|| l.color.to_string()))
            .collect(),
        tasks: tasks.len(),
        completed_tasks: tasks.iter().filter(|t| t.is_completed).count(),
        comments: snapshot.comments_of(card.id).len(),
    }
}

fn board_view(snapshot: &BoardSnapshot) -> BoardView {
    BoardView {
        id: snapshot.board.id,
        name: snapshot.board.name.clone(),
        description: snapshot.board.description.clone(),
        lists: snapshot
            .ordered_lists()
            .into_iter()
            .map(|list| ListView {
                name: list.name.clone(),
                position: list.position,
                cards: snapshot
                    .cards_in_list(list.id)
                    .into_iter()
                    .map(|card| card_view(snapshot, card))
                    .collect(),
            })
            .collect(),
    }
}

pub async fn handle(file: &Path) -> anyhow::Result<()> {
    let store = JsonFileStore::new(file);
    if !store.exists().await {
        return output::output_error(&format!("Board file not found: {}", file.display()));
    }
    let (snapshot, _metadata) = match store.load_board().await {
        Ok(loaded) => loaded,
        Err(e) => return output::output_error(&e.to_string()),
    };
    output::output_success(board_view(&snapshot))
}
