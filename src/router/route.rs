use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path prefix of the vehicle detail route.
pub const DETAIL_PREFIX: &str = "/car-detail/";

/// Navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    CarDetail,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::CarDetail => "car-detail",
        }
    }
}

pub type RouteParams = BTreeMap<String, String>;

/// Current view plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteState {
    pub page: Page,
    #[serde(default)]
    pub params: RouteParams,
}

impl RouteState {
    pub fn new(page: Page, params: RouteParams) -> Self {
        Self { page, params }
    }

    pub fn home() -> Self {
        Self::default()
    }

    pub fn detail(id: impl Into<String>) -> Self {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), id.into());
        Self::new(Page::CarDetail, params)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Canonical location for this state.
    pub fn location(&self) -> String {
        build_location(self.page, &self.params)
    }
}

/// Maps a location path to a route. Unknown paths fall back to home.
///
/// The detail id is everything after [`DETAIL_PREFIX`], taken verbatim.
pub fn parse_location(path: &str) -> RouteState {
    match path.strip_prefix(DETAIL_PREFIX) {
        Some(rest) => RouteState::detail(rest),
        None => RouteState::home(),
    }
}

/// Inverse of [`parse_location`]. A detail route without an id renders as
/// `/car-detail/`.
pub fn build_location(page: Page, params: &RouteParams) -> String {
    match page {
        Page::Home => "/".to_string(),
        Page::CarDetail => {
            let id = params.get("id").map(String::as_str).unwrap_or("");
            format!("{DETAIL_PREFIX}{id}")
        }
    }
}
