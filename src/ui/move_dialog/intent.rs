use crate::books::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MoveIntent {
    /// Offer the states `book` is not currently in.
    Open { book: Book },
    Up,
    Down,
    Close,
}

impl Intent for MoveIntent {}
