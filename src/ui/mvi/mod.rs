//! Model-View-Intent primitives shared by every stateful piece of the screen.
//!
//! ```text
//! key / API response ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Anything with side effects (queuing a request,
//! logging) happens in [`crate::ui::app::App`] around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
