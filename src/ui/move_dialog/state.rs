use crate::books::{BookId, ReadingState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MoveDialogState {
    #[default]
    Hidden,
    Visible {
        book_id: BookId,
        title: String,
        from: ReadingState,
        targets: Vec<ReadingState>,
        focused: usize,
    },
}

impl UiState for MoveDialogState {}

impl MoveDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// `(book, target)` the dialog would commit on Enter.
    pub fn selection(&self) -> Option<(BookId, ReadingState)> {
        match self {
            Self::Visible {
                book_id,
                targets,
                focused,
                ..
            } => targets.get(*focused).map(|target| (*book_id, *target)),
            Self::Hidden => None,
        }
    }
}
