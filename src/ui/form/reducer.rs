use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::AddBookFormState;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = AddBookFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open => match state {
                AddBookFormState::Closed => AddBookFormState::Editing {
                    title: String::new(),
                },
                editing => editing,
            },
            FormIntent::Insert(ch) => match state {
                AddBookFormState::Editing { mut title } => {
                    if !ch.is_control() {
                        title.push(ch);
                    }
                    AddBookFormState::Editing { title }
                }
                closed => closed,
            },
            FormIntent::Backspace => match state {
                AddBookFormState::Editing { mut title } => {
                    title.pop();
                    AddBookFormState::Editing { title }
                }
                closed => closed,
            },
            FormIntent::Cancel => AddBookFormState::Closed,
            FormIntent::Submit => {
                if state.submittable_title().is_some() {
                    AddBookFormState::Closed
                } else {
                    // Blank title: keep the form open
                    state
                }
            }
        }
    }
}
