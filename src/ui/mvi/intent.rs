/// Marker trait for intents: key presses and API results translated into
/// something a reducer understands.
pub trait Intent: Send + 'static {}
