/// Marker trait for intents: key presses and other view-local actions
/// that a reducer folds into state.
pub trait Intent: Send + 'static {}
