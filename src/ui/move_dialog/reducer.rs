use crate::ui::move_dialog::intent::MoveIntent;
use crate::ui::move_dialog::state::MoveDialogState;
use crate::ui::mvi::Reducer;

pub struct MoveReducer;

impl Reducer for MoveReducer {
    type State = MoveDialogState;
    type Intent = MoveIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MoveIntent::Open { book } => MoveDialogState::Visible {
                book_id: book.id,
                targets: book.state.move_targets(),
                from: book.state,
                title: book.title,
                focused: 0,
            },
            MoveIntent::Close => MoveDialogState::Hidden,
            MoveIntent::Up => match state {
                MoveDialogState::Visible {
                    book_id,
                    title,
                    from,
                    targets,
                    focused,
                } => {
                    let focused = if focused == 0 {
                        targets.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    MoveDialogState::Visible {
                        book_id,
                        title,
                        from,
                        targets,
                        focused,
                    }
                }
                hidden => hidden,
            },
            MoveIntent::Down => match state {
                MoveDialogState::Visible {
                    book_id,
                    title,
                    from,
                    targets,
                    focused,
                } => {
                    let focused = if focused + 1 >= targets.len() {
                        0
                    } else {
                        focused + 1
                    };
                    MoveDialogState::Visible {
                        book_id,
                        title,
                        from,
                        targets,
                        focused,
                    }
                }
                hidden => hidden,
            },
        }
    }
}
