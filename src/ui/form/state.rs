use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AddBookFormState {
    #[default]
    Closed,
    Editing {
        title: String,
    },
}

impl UiState for AddBookFormState {}

impl AddBookFormState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Trimmed title, if the form is open and the title is not blank.
    pub fn submittable_title(&self) -> Option<&str> {
        match self {
            Self::Editing { title } => Some(title.trim()).filter(|t| !t.is_empty()),
            Self::Closed => None,
        }
    }
}
