use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// How listings are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Listings shown on the home view when a search matches nothing (default: 6).
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    /// Show the USD equivalent next to yen prices (default: true).
    #[serde(default = "default_show_secondary_price")]
    pub show_secondary_price: bool,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Router startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Location the session opens at (default: "/").
    #[serde(default = "default_start_location")]
    pub start_location: String,
}

/// Where vehicle records come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_featured_limit() -> usize {
    6
}

fn default_show_secondary_price() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_start_location() -> String {
    "/".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            show_secondary_price: default_show_secondary_price(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start_location: default_start_location(),
        }
    }
}
