mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailState, DetailTab};
