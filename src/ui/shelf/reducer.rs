use crate::books::{Columns, ReadingState};
use crate::ui::mvi::Reducer;
use crate::ui::shelf::intent::ShelfIntent;
use crate::ui::shelf::state::ShelfState;

pub struct ShelfReducer;

impl Reducer for ShelfReducer {
    type State = ShelfState;
    type Intent = ShelfIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShelfIntent::Loaded { books } => {
                let mut rows = state.rows;
                let columns = Columns::partition(&books);
                for column in ReadingState::ALL {
                    let slot = &mut rows[column.column_index()];
                    *slot = (*slot).min(columns.len(column).saturating_sub(1));
                }
                ShelfState {
                    books,
                    loaded: true,
                    focus: state.focus,
                    rows,
                }
            }
            ShelfIntent::FocusLeft => {
                let index = state.focus.column_index();
                let next = if index == 0 {
                    ReadingState::ALL.len() - 1
                } else {
                    index - 1
                };
                with_focus(state, next)
            }
            ShelfIntent::FocusRight => {
                let next = (state.focus.column_index() + 1) % ReadingState::ALL.len();
                with_focus(state, next)
            }
            ShelfIntent::FocusUp => move_row(state, -1),
            ShelfIntent::FocusDown => move_row(state, 1),
        }
    }
}

fn with_focus(state: ShelfState, column: usize) -> ShelfState {
    ShelfState {
        focus: ReadingState::from_column_index(column).unwrap_or_default(),
        ..state
    }
}

/// Moves the cursor within the focused column, wrapping at both ends.
fn move_row(mut state: ShelfState, direction: i32) -> ShelfState {
    let len = state.columns().len(state.focus);
    let slot = state.focus.column_index();
    if len == 0 {
        state.rows[slot] = 0;
        return state;
    }

    let current = state.rows[slot].min(len - 1);
    state.rows[slot] = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Book;

    fn book(id: u64, state: ReadingState) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            state,
        }
    }

    #[test]
    fn loaded_replaces_list_and_marks_loaded() {
        let state = ShelfReducer::reduce(
            ShelfState::default(),
            ShelfIntent::Loaded {
                books: vec![book(1, ReadingState::ToRead)],
            },
        );
        assert!(state.loaded);
        assert_eq!(state.books.len(), 1);
    }

    #[test]
    fn loaded_clamps_rows_to_new_column_lengths() {
        let state = ShelfState {
            books: vec![],
            loaded: true,
            focus: ReadingState::ToRead,
            rows: [4, 2, 1],
        };
        let state = ShelfReducer::reduce(
            state,
            ShelfIntent::Loaded {
                books: vec![
                    book(1, ReadingState::ToRead),
                    book(2, ReadingState::ToRead),
                    book(3, ReadingState::InProgress),
                ],
            },
        );
        assert_eq!(state.rows, [1, 0, 0]);
    }

    #[test]
    fn focus_left_wraps_to_last_column() {
        let state = ShelfReducer::reduce(ShelfState::default(), ShelfIntent::FocusLeft);
        assert_eq!(state.focus, ReadingState::Completed);
    }

    #[test]
    fn focus_right_wraps_to_first_column() {
        let state = ShelfState {
            focus: ReadingState::Completed,
            ..ShelfState::default()
        };
        let state = ShelfReducer::reduce(state, ShelfIntent::FocusRight);
        assert_eq!(state.focus, ReadingState::ToRead);
    }

    #[test]
    fn row_movement_wraps_within_column() {
        let state = ShelfReducer::reduce(
            ShelfState::default(),
            ShelfIntent::Loaded {
                books: vec![
                    book(1, ReadingState::ToRead),
                    book(2, ReadingState::ToRead),
                    book(3, ReadingState::Completed),
                ],
            },
        );
        let state = ShelfReducer::reduce(state, ShelfIntent::FocusUp);
        assert_eq!(state.selected_book().map(|b| b.id), Some(2));
        let state = ShelfReducer::reduce(state, ShelfIntent::FocusDown);
        assert_eq!(state.selected_book().map(|b| b.id), Some(1));
    }

    #[test]
    fn row_movement_in_empty_column_is_noop() {
        let state = ShelfReducer::reduce(ShelfState::default(), ShelfIntent::FocusDown);
        assert_eq!(state.rows, [0, 0, 0]);
    }
}
