mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use panel::render_add_book_form;
pub use reducer::FormReducer;
pub use state::AddBookFormState;
