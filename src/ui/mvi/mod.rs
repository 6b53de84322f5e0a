//! Model-View-Intent (MVI) primitives for the storefront views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Route changes are not part of this loop: the router owns them and views
//! only react.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
