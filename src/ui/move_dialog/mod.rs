mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_move_dialog;
pub use intent::MoveIntent;
pub use reducer::MoveReducer;
pub use state::MoveDialogState;
