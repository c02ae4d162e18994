use crate::ui::mvi::Reducer;
use crate::ui::notification::intent::NotificationIntent;
use crate::ui::notification::state::NotificationState;

pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Show { message } => NotificationState::Visible { message },
            NotificationIntent::Dismiss => NotificationState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_previous_message() {
        let state = NotificationReducer::reduce(
            NotificationState::Visible {
                message: "old".to_string(),
            },
            NotificationIntent::Show {
                message: "new".to_string(),
            },
        );
        assert_eq!(state.message(), Some("new"));
    }

    #[test]
    fn dismiss_hides() {
        let state = NotificationReducer::reduce(
            NotificationState::Visible {
                message: "boom".to_string(),
            },
            NotificationIntent::Dismiss,
        );
        assert!(!state.is_visible());
    }
}
