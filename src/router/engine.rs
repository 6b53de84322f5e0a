use serde_json::Value;

use crate::router::history::{NavigationHost, PopStateEvent};
use crate::router::route::{build_location, parse_location, Page, RouteParams, RouteState};

/// Callback invoked with every new route state.
pub type RouteListener = Box<dyn FnMut(&RouteState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single owner of the active route, kept in sync with a [`NavigationHost`].
///
/// State changes in exactly two places: [`Router::navigate_to`] and
/// [`Router::handle_pop_state`]. Traversal requests (`go_back`,
/// `go_forward`) only ask the host and take effect once its pop-state
/// event is pumped.
pub struct Router<H: NavigationHost> {
    host: H,
    state: RouteState,
    listeners: Vec<(SubscriptionId, RouteListener)>,
    next_subscription: u64,
}

impl<H: NavigationHost> Router<H> {
    /// Derives the initial route from the host's current location.
    ///
    /// An untagged starting entry is tagged in place so that returning to it
    /// later restores the route without re-parsing.
    pub fn new(mut host: H) -> Self {
        let state = parse_location(host.pathname());
        if host.entry_state().is_none_or(Value::is_null) {
            let location = host.location().to_string();
            tracing::debug!(%location, page = state.page.as_str(), "Tagging initial history entry");
            host.replace_state(tag(&state), &location);
        }
        Self {
            host,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    pub fn page(&self) -> Page {
        self.state.page
    }

    /// Canonical location of the current route.
    pub fn location(&self) -> String {
        self.state.location()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Pushes a new history entry for `(page, params)` and activates it.
    pub fn navigate_to(&mut self, page: Page, params: RouteParams) {
        let location = build_location(page, &params);
        let state = RouteState::new(page, params);
        tracing::debug!(%location, page = page.as_str(), "Navigate");
        self.host.push_state(tag(&state), &location);
        self.set_state(state);
    }

    /// Restores the route after host-originated traversal.
    ///
    /// Router-authored tags are trusted directly; anything else (no tag, or
    /// a tag that does not decode) re-parses the host's current location.
    pub fn handle_pop_state(&mut self, event: PopStateEvent) {
        let restored = event
            .state
            .and_then(|value| serde_json::from_value::<RouteState>(value).ok());
        let state = match restored {
            Some(state) => state,
            None => {
                let location = self.host.pathname();
                tracing::debug!(%location, "Untagged pop-state, re-parsing location");
                parse_location(location)
            }
        };
        tracing::debug!(page = state.page.as_str(), "Pop-state");
        self.set_state(state);
    }

    /// Delivers pending host events in arrival order. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.host.poll_pop_state() {
            self.handle_pop_state(event);
            handled += 1;
        }
        handled
    }

    /// Asks the host to go back. State is unchanged until the next [`pump`](Self::pump).
    pub fn go_back(&mut self) {
        self.host.back();
    }

    /// Asks the host to go forward. State is unchanged until the next [`pump`](Self::pump).
    pub fn go_forward(&mut self) {
        self.host.forward();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&RouteState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn set_state(&mut self, state: RouteState) {
        self.state = state;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}

/// History tag for a route. Encoding a string map cannot realistically fail;
/// a null tag simply forces a re-parse later.
fn tag(state: &RouteState) -> Value {
    serde_json::to_value(state).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to encode route tag");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::history::MemoryHistory;
    use serde_json::json;

    #[test]
    fn initial_state_is_parsed_from_location() {
        let router = Router::new(MemoryHistory::new("/car-detail/4"));
        assert_eq!(router.state(), &RouteState::detail("4"));
    }

    #[test]
    fn untagged_initial_entry_is_normalized() {
        let router = Router::new(MemoryHistory::new("/bogus"));
        let tag = router.host().entry_state().cloned();
        assert_eq!(tag, Some(json!({"page": "home", "params": {}})));
        assert_eq!(router.host().pathname(), "/bogus");
    }

    #[test]
    fn normalization_keeps_query_and_fragment() {
        let router = Router::new(MemoryHistory::new("/car-detail/5?ref=x#photos"));
        assert_eq!(router.state(), &RouteState::detail("5"));
        assert_eq!(router.host().location(), "/car-detail/5?ref=x#photos");
        assert_eq!(
            router.host().entry_state(),
            Some(&json!({"page": "car-detail", "params": {"id": "5"}}))
        );
    }

    #[test]
    fn existing_tag_is_left_alone() {
        let mut history = MemoryHistory::new("/");
        history.replace_state(json!({"custom": true}), "/");
        let router = Router::new(history);
        assert_eq!(router.host().entry_state(), Some(&json!({"custom": true})));
    }

    #[test]
    fn null_tag_counts_as_uninitialized() {
        let mut history = MemoryHistory::new("/car-detail/2");
        history.replace_state(Value::Null, "/car-detail/2");
        let router = Router::new(history);
        assert_eq!(
            router.host().entry_state(),
            Some(&json!({"page": "car-detail", "params": {"id": "2"}}))
        );
    }

    #[test]
    fn undecodable_tag_falls_back_to_location() {
        let mut router = Router::new(MemoryHistory::new("/"));
        router.host_mut().push_state(json!("not a route"), "/car-detail/9");
        router.handle_pop_state(PopStateEvent {
            state: Some(json!("not a route")),
        });
        assert_eq!(router.state(), &RouteState::detail("9"));
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut router = Router::new(MemoryHistory::new("/"));
        let id = router.subscribe(|_| {});
        assert!(router.unsubscribe(id));
        assert!(!router.unsubscribe(id));
    }
}
