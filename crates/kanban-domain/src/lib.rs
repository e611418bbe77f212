pub mod board;
pub mod card;
pub mod card_label;
pub mod comment;
pub mod label;
pub mod list;
pub mod services;
pub mod snapshot;
pub mod task;

pub use board::{Board, BoardId, NewBoard};
pub use card::{Card, CardId, NewCard};
pub use card_label::{CardLabel, CardLabelId};
pub use comment::{Comment, CommentId, NewComment};
pub use label::{Label, LabelColor, LabelId, NewLabel};
pub use list::{List, ListId, NewList};
pub use services::{
    BoardService, CardLabelService, CardService, CommentService, ImportTarget, LabelService,
    ListService, TaskService,
};
pub use snapshot::BoardSnapshot;
pub use task::{NewTask, Task, TaskId};

pub type UserId = uuid::Uuid;
