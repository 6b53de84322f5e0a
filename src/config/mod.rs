mod loader;
mod types;

pub use loader::{ConfigError, TICK_RATE_RANGE_MS};
pub use types::{CatalogConfig, Config, DisplayConfig, NavigationConfig};
