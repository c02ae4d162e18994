use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    Open,
    Insert(char),
    Backspace,
    Cancel,
    /// Closes and clears the form if the title passes the presence check.
    Submit,
}

impl Intent for FormIntent {}
