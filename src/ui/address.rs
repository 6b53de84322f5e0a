//! Address bar for typing a location by hand.
//!
//! Submitting is handled by the app: the typed location is opened on the
//! history host as an untagged entry, so the router resolves it by parsing.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddressBarState {
    #[default]
    Hidden,
    Editing {
        buffer: String,
    },
}

impl UiState for AddressBarState {}

impl AddressBarState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Editing { buffer } => Some(buffer),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressIntent {
    /// Start editing, pre-filled with the current location.
    Open { current: String },
    Insert(char),
    Backspace,
    Cancel,
}

impl Intent for AddressIntent {}

pub struct AddressReducer;

impl Reducer for AddressReducer {
    type State = AddressBarState;
    type Intent = AddressIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, AddressIntent::Open { current }) => AddressBarState::Editing { buffer: current },
            (AddressBarState::Editing { mut buffer }, AddressIntent::Insert(ch)) => {
                if !ch.is_control() {
                    buffer.push(ch);
                }
                AddressBarState::Editing { buffer }
            }
            (AddressBarState::Editing { mut buffer }, AddressIntent::Backspace) => {
                buffer.pop();
                AddressBarState::Editing { buffer }
            }
            (_, AddressIntent::Cancel) => AddressBarState::Hidden,
            (AddressBarState::Hidden, _) => AddressBarState::Hidden,
        }
    }
}
