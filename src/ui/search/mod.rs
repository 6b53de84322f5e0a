mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchField, SearchFocus, SearchState, FIELD_COUNT};
