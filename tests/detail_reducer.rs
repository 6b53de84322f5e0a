use showroom::ui::detail::{DetailIntent, DetailReducer, DetailState, DetailTab};
use showroom::ui::mvi::Reducer;

#[test]
fn open_resets_gallery_and_tab() {
    let state = DetailState {
        image_index: 3,
        tab: DetailTab::History,
        favorite: false,
    };
    let state = DetailReducer::reduce(state, DetailIntent::Open { favorite: true });
    assert_eq!(state.image_index, 0);
    assert_eq!(state.tab, DetailTab::Overview);
    assert!(state.favorite);
}

#[test]
fn gallery_wraps_around() {
    let state = DetailReducer::reduce(DetailState::default(), DetailIntent::PrevImage { count: 4 });
    assert_eq!(state.image_index, 3);
    let state = DetailReducer::reduce(state, DetailIntent::NextImage { count: 4 });
    assert_eq!(state.image_index, 0);
}

#[test]
fn empty_gallery_stays_at_zero() {
    let state = DetailReducer::reduce(DetailState::default(), DetailIntent::NextImage { count: 0 });
    assert_eq!(state.image_index, 0);
    let state = DetailReducer::reduce(state, DetailIntent::PrevImage { count: 0 });
    assert_eq!(state.image_index, 0);
}

#[test]
fn tabs_cycle_in_order() {
    let mut state = DetailState::default();
    let mut seen = Vec::new();
    for _ in 0..DetailTab::ALL.len() {
        seen.push(state.tab);
        state = DetailReducer::reduce(state, DetailIntent::NextTab);
    }
    assert_eq!(seen, DetailTab::ALL.to_vec());
    assert_eq!(state.tab, DetailTab::Overview);

    let state = DetailReducer::reduce(state, DetailIntent::PrevTab);
    assert_eq!(state.tab, DetailTab::History);
}

#[test]
fn toggle_favorite_keeps_position() {
    let state = DetailState {
        image_index: 2,
        tab: DetailTab::Features,
        favorite: false,
    };
    let state = DetailReducer::reduce(state, DetailIntent::ToggleFavorite);
    assert!(state.favorite);
    assert_eq!(state.image_index, 2);
    assert_eq!(state.tab, DetailTab::Features);
}
