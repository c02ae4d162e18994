use crate::books::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ShelfIntent {
    /// A fetch was accepted; replaces the list wholesale.
    Loaded { books: Vec<Book> },
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
}

impl Intent for ShelfIntent {}
