use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { favorite } => DetailState {
                favorite,
                ..DetailState::default()
            },

            DetailIntent::NextImage { count } => DetailState {
                image_index: if count == 0 {
                    0
                } else {
                    (state.image_index + 1) % count
                },
                ..state
            },

            DetailIntent::PrevImage { count } => DetailState {
                image_index: if count == 0 {
                    0
                } else {
                    (state.image_index.min(count - 1) + count - 1) % count
                },
                ..state
            },

            DetailIntent::NextTab => DetailState {
                tab: state.tab.next(),
                ..state
            },

            DetailIntent::PrevTab => DetailState {
                tab: state.tab.prev(),
                ..state
            },

            DetailIntent::ToggleFavorite => DetailState {
                favorite: !state.favorite,
                ..state
            },
        }
    }
}
