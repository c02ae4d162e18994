use crate::ui::mvi::UiState;

/// The error banner. At most one message is visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotificationState {
    #[default]
    Hidden,
    Visible {
        message: String,
    },
}

impl UiState for NotificationState {}

impl NotificationState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message } => Some(message),
            Self::Hidden => None,
        }
    }
}
