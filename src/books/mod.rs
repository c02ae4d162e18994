//! Book records as exchanged with the book service.

mod model;

pub use model::{Book, BookId, Columns, NewBook, ReadingState, StateChange};
