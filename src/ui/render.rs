use crate::router::{NavigationHost, Page};
use crate::ui::app::App;
use crate::ui::footer::{Footer, FooterHints};
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::search::SearchFocus;
use crate::ui::vehicle::render_detail;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let location = app.router().host().location();
    let header_widget = Header::new(location, app.address().buffer(), app.catalog().len());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.route().page {
        Page::Home => render_home(frame, app, body),
        Page::CarDetail => render_detail(frame, app, body),
    }

    let footer_widget = Footer::new(footer_hints(app));
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn footer_hints(app: &App) -> FooterHints {
    if app.address().is_editing() {
        return FooterHints::Address;
    }
    match app.route().page {
        Page::Home if app.search().focus == SearchFocus::Form => FooterHints::SearchForm,
        Page::Home => FooterHints::SearchResults,
        Page::CarDetail if app.current_vehicle().is_none() => FooterHints::NotFound,
        Page::CarDetail => FooterHints::Detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn home_lists_vehicles() {
        let app = App::new(Catalog::builtin().unwrap(), Config::default(), "/");
        let text = render_to_text(&app);
        assert!(text.contains("Land Cruiser 250"));
        assert!(text.contains("Active filters: none"));
    }

    #[test]
    fn detail_shows_price() {
        let app = App::new(Catalog::builtin().unwrap(), Config::default(), "/car-detail/5");
        let text = render_to_text(&app);
        assert!(text.contains("X7 M50i"));
        assert!(text.contains("¥8,500,000"));
    }

    #[test]
    fn missing_vehicle_renders_fallback() {
        let app = App::new(Catalog::builtin().unwrap(), Config::default(), "/car-detail/zz");
        let text = render_to_text(&app);
        assert!(text.contains("Vehicle not found"));
    }
}
