mod intent;
mod reducer;
mod state;

pub use intent::ShelfIntent;
pub use reducer::ShelfReducer;
pub use state::ShelfState;
