use serde_json::Value;
use std::collections::VecDeque;

/// Host notification that the active history entry changed underneath the
/// router (back/forward traversal, a typed address).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopStateEvent {
    /// Tag of the entry that became active, if the router authored one.
    pub state: Option<Value>,
}

/// The navigable location the router keeps itself in sync with.
///
/// Mirrors a browser history object: writes (`push_state`, `replace_state`)
/// are silent, while traversal requests (`back`, `forward`) complete later
/// as queued [`PopStateEvent`]s.
pub trait NavigationHost {
    /// Path of the current entry, without query or fragment.
    fn pathname(&self) -> &str;

    /// Full location of the current entry, including any query or fragment.
    fn location(&self) -> &str;

    /// Opaque tag attached to the current entry.
    fn entry_state(&self) -> Option<&Value>;

    fn push_state(&mut self, state: Value, location: &str);

    fn replace_state(&mut self, state: Value, location: &str);

    fn back(&mut self);

    fn forward(&mut self);

    /// Next pending traversal notification, oldest first.
    fn poll_pop_state(&mut self) -> Option<PopStateEvent>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub location: String,
    pub state: Option<Value>,
}

impl HistoryEntry {
    fn untagged(location: &str) -> Self {
        Self {
            location: location.to_string(),
            state: None,
        }
    }
}

/// In-process history stack with a cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
    pending: VecDeque<PopStateEvent>,
}

impl MemoryHistory {
    /// Starts with a single untagged entry, like a freshly loaded page.
    pub fn new(initial_location: &str) -> Self {
        Self {
            entries: vec![HistoryEntry::untagged(initial_location)],
            index: 0,
            pending: VecDeque::new(),
        }
    }

    /// Navigates to a location the router did not author (typed address,
    /// external link). The new entry is untagged.
    pub fn open_location(&mut self, location: &str) {
        self.push_entry(HistoryEntry::untagged(location));
        self.pending.push_back(PopStateEvent::default());
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }

    fn traverse_to(&mut self, index: usize) {
        self.index = index;
        let state = self.current().state.clone();
        self.pending.push_back(PopStateEvent { state });
    }
}

impl NavigationHost for MemoryHistory {
    fn pathname(&self) -> &str {
        let location = self.location();
        let end = location.find(['?', '#']).unwrap_or(location.len());
        &location[..end]
    }

    fn location(&self) -> &str {
        &self.current().location
    }

    fn entry_state(&self) -> Option<&Value> {
        self.current().state.as_ref()
    }

    fn push_state(&mut self, state: Value, location: &str) {
        self.push_entry(HistoryEntry {
            location: location.to_string(),
            state: Some(state),
        });
    }

    fn replace_state(&mut self, state: Value, location: &str) {
        let index = self.index;
        self.entries[index] = HistoryEntry {
            location: location.to_string(),
            state: Some(state),
        };
    }

    fn back(&mut self) {
        if self.can_go_back() {
            self.traverse_to(self.index - 1);
        }
    }

    fn forward(&mut self) {
        if self.can_go_forward() {
            self.traverse_to(self.index + 1);
        }
    }

    fn poll_pop_state(&mut self) -> Option<PopStateEvent> {
        self.pending.pop_front()
    }
}
