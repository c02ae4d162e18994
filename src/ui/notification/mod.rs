mod banner;
mod intent;
mod reducer;
mod state;

pub use banner::render_notification;
pub use intent::NotificationIntent;
pub use reducer::NotificationReducer;
pub use state::NotificationState;
