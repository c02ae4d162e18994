/// Marker trait for view state.
///
/// `Default` is the state before anything happened; `Clone + PartialEq`
/// lets tests compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
