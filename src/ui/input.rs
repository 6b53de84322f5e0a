use crate::router::Page;
use crate::ui::address::AddressIntent;
use crate::ui::app::App;
use crate::ui::detail::DetailIntent;
use crate::ui::search::{SearchFocus, SearchIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes a key press to the address bar or the active view.
///
/// Traversal keys only request navigation; the runtime pumps the router
/// after every event.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.address().is_editing() {
        handle_address_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.open_address_bar();
        return;
    }

    if key.code == KeyCode::Char('q') && !app.is_text_entry() {
        app.request_quit();
        return;
    }

    match app.route().page {
        Page::Home => handle_home_key(app, key),
        Page::CarDetail => handle_detail_key(app, key),
    }
}

fn handle_address_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_address(AddressIntent::Cancel),
        KeyCode::Enter => app.submit_address(),
        KeyCode::Backspace => app.dispatch_address(AddressIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_address(AddressIntent::Insert(ch))
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.dispatch_search(SearchIntent::Reset);
        return;
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.dispatch_search(SearchIntent::ToggleFocus);
        return;
    }

    match app.search().focus {
        SearchFocus::Form => match key.code {
            KeyCode::Up => app.dispatch_search(SearchIntent::FocusPrevField),
            KeyCode::Down => app.dispatch_search(SearchIntent::FocusNextField),
            KeyCode::Enter => app.dispatch_search(SearchIntent::ToggleFocus),
            KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_search(SearchIntent::ClearField)
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_search(SearchIntent::Insert(ch))
            }
            _ => {}
        },
        SearchFocus::Results => match key.code {
            KeyCode::Up => move_selection(app, -1),
            KeyCode::Down => move_selection(app, 1),
            KeyCode::Enter => {
                app.open_selected();
            }
            KeyCode::Esc | KeyCode::Char('/') => app.dispatch_search(SearchIntent::ToggleFocus),
            _ => {}
        },
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::ALT) {
        match key.code {
            KeyCode::Left => app.go_back(),
            KeyCode::Right => app.go_forward(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back_or_home(),
        KeyCode::Char('h') => app.go_home(),
        _ if app.current_vehicle().is_none() => {
            if key.code == KeyCode::Enter {
                app.back_or_home();
            }
        }
        KeyCode::Left => {
            let count = app.gallery_len();
            app.dispatch_detail(DetailIntent::PrevImage { count });
        }
        KeyCode::Right => {
            let count = app.gallery_len();
            app.dispatch_detail(DetailIntent::NextImage { count });
        }
        KeyCode::Tab => app.dispatch_detail(DetailIntent::NextTab),
        KeyCode::BackTab => app.dispatch_detail(DetailIntent::PrevTab),
        KeyCode::Char('f') => app.dispatch_detail(DetailIntent::ToggleFavorite),
        _ => {}
    }
}

fn move_selection(app: &mut App, delta: i32) {
    let result_count = app.result_count();
    app.dispatch_search(SearchIntent::MoveSelection {
        delta,
        result_count,
    });
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::router::RouteState;
    use crossterm::event::KeyEventState;

    fn make_app(start: &str) -> App {
        App::new(Catalog::builtin().unwrap(), Config::default(), start)
    }

    fn press(code: KeyCode) -> KeyEvent {
        press_with(code, KeyModifiers::empty())
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn q_types_into_form_but_quits_from_results() {
        let mut app = make_app("/");
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.search().values[0], "q");

        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_q_quits_from_anywhere() {
        let mut app = make_app("/car-detail/1");
        handle_key(&mut app, press_with(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn enter_on_results_opens_detail_and_esc_returns() {
        let mut app = make_app("/");
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.route(), &RouteState::detail("1"));

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), &RouteState::detail("1"));
        app.pump_navigation();
        assert_eq!(app.route(), &RouteState::home());

        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(!app.should_quit());
    }

    #[test]
    fn alt_left_goes_back() {
        let mut app = make_app("/");
        app.open_vehicle("5");
        app.go_back();
        app.pump_navigation();
        app.open_vehicle("6");
        handle_key(&mut app, press_with(KeyCode::Left, KeyModifiers::ALT));
        app.pump_navigation();
        assert_eq!(app.route(), &RouteState::home());
    }

    #[test]
    fn not_found_enter_goes_back() {
        let mut app = make_app("/");
        app.open_vehicle("__nonexistent__");
        handle_key(&mut app, press(KeyCode::Enter));
        app.pump_navigation();
        assert_eq!(app.route(), &RouteState::home());
    }

    #[test]
    fn not_found_start_recovers_to_home() {
        let mut app = make_app("/car-detail/zz");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.route(), &RouteState::home());

        let mut app = make_app("/car-detail/zz");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), &RouteState::home());
    }

    #[test]
    fn ctrl_l_edits_location() {
        let mut app = make_app("/");
        handle_key(&mut app, press_with(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.address().is_editing());
        for ch in "car-detail/2".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        app.pump_navigation();
        assert_eq!(app.route(), &RouteState::detail("2"));
    }
}
