//! Client-side routing.
//!
//! ```text
//! host traversal ──→ PopStateEvent ──→ Router::pump ──→ RouteState ──→ listeners
//! in-app link ─────────────────────→ Router::navigate_to ──────────┘
//! ```
//!
//! Locations have two shapes, `/` and `/car-detail/{id}`; anything else
//! resolves to home.

mod engine;
mod history;
mod route;

pub use engine::{RouteListener, Router, SubscriptionId};
pub use history::{HistoryEntry, MemoryHistory, NavigationHost, PopStateEvent};
pub use route::{build_location, parse_location, Page, RouteParams, RouteState, DETAIL_PREFIX};
