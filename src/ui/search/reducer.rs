use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchFocus, SearchState, FIELD_COUNT};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::FocusNextField => {
                state.focus = SearchFocus::Form;
                state.field = (state.field + 1) % FIELD_COUNT;
                state
            }

            SearchIntent::FocusPrevField => {
                state.focus = SearchFocus::Form;
                state.field = (state.field + FIELD_COUNT - 1) % FIELD_COUNT;
                state
            }

            SearchIntent::ToggleFocus => {
                state.focus = match state.focus {
                    SearchFocus::Form => SearchFocus::Results,
                    SearchFocus::Results => SearchFocus::Form,
                };
                state
            }

            SearchIntent::Insert(ch) => {
                if !state.is_editing() || ch.is_control() {
                    return state;
                }
                let field = state.focused_field();
                if field.is_numeric() && !(ch.is_ascii_digit() || ch == ',') {
                    return state;
                }
                state.values[field.index()].push(ch);
                state.selected = 0;
                state
            }

            SearchIntent::Backspace => {
                if state.is_editing() {
                    let index = state.focused_field().index();
                    if state.values[index].pop().is_some() {
                        state.selected = 0;
                    }
                }
                state
            }

            SearchIntent::ClearField => {
                if state.is_editing() {
                    let index = state.focused_field().index();
                    state.values[index].clear();
                    state.selected = 0;
                }
                state
            }

            SearchIntent::Reset => SearchState::default(),

            SearchIntent::MoveSelection {
                delta,
                result_count,
            } => {
                state.selected = wrap_selection(state.selected, delta, result_count);
                state
            }
        }
    }
}

fn wrap_selection(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1) as i64;
    (current + delta as i64).rem_euclid(len as i64) as usize
}
