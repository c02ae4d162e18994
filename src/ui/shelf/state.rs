use crate::books::{Book, Columns, ReadingState};
use crate::ui::mvi::UiState;

/// Last fetched list plus which column and row the cursor is on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShelfState {
    pub books: Vec<Book>,
    /// False until the first fetch has been applied.
    pub loaded: bool,
    pub focus: ReadingState,
    /// Selected row per column, indexed by [`ReadingState::column_index`].
    pub rows: [usize; 3],
}

impl UiState for ShelfState {}

impl ShelfState {
    pub fn columns(&self) -> Columns<'_> {
        Columns::partition(&self.books)
    }

    pub fn selected_row(&self, state: ReadingState) -> usize {
        self.rows[state.column_index()]
    }

    /// Book under the cursor in the focused column.
    pub fn selected_book(&self) -> Option<&Book> {
        let columns = self.columns();
        columns
            .column(self.focus)
            .get(self.selected_row(self.focus))
            .copied()
    }
}
