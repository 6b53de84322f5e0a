use crate::catalog::SearchCriteria;
use crate::ui::app::{App, HomeListing};
use crate::ui::format::{format_mileage, format_yen, score_stars};
use crate::ui::search::{SearchField, SearchFocus, SearchState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT,
    STATUS_ERROR,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const FORM_WIDTH: u16 = 38;
const LABEL_WIDTH: usize = 17;

pub fn render_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let [form_area, results_area] =
        Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(0)]).areas(area);

    render_form(frame, app.search(), form_area);

    let criteria = app.search().criteria();
    let listing = app.home_listing();
    let [summary_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(results_area);
    frame.render_widget(summary(&criteria, &listing), summary_area);
    render_results(frame, app.search(), &listing, list_area);
}

fn render_form(frame: &mut Frame<'_>, search: &SearchState, area: Rect) {
    let editing = search.focus == SearchFocus::Form;
    let focused = search.focused_field();

    let lines: Vec<Line> = SearchField::ALL
        .iter()
        .map(|&field| {
            let is_focused = editing && field == focused;
            let mut value = search.value(field).to_string();
            if is_focused {
                value.push('▏');
            }
            let label_style = if is_focused {
                Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            let line = Line::from(vec![
                Span::styled(format!(" {:<width$}", field.label(), width = LABEL_WIDTH), label_style),
                Span::styled(value, Style::default().fg(HEADER_TEXT)),
            ]);
            if is_focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    let border = if editing { BRAND_ACCENT } else { GLOBAL_BORDER };
    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(form, area);
}

fn summary(criteria: &SearchCriteria, listing: &HomeListing<'_>) -> Paragraph<'static> {
    let active = criteria.active_filters();
    let filters = if active.is_empty() {
        Line::from(Span::styled(
            " Active filters: none",
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        let joined = active
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(" · ");
        Line::from(vec![
            Span::styled(" Active filters: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(joined, Style::default().fg(HEADER_TEXT)),
        ])
    };

    let status = if listing.featured {
        Line::from(Span::styled(
            " No exact matches. Showing featured listings.",
            Style::default().fg(STATUS_ERROR),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} vehicles found", listing.vehicles.len()),
            Style::default().fg(HEADER_TEXT),
        ))
    };

    Paragraph::new(vec![filters, status])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn render_results(frame: &mut Frame<'_>, search: &SearchState, listing: &HomeListing<'_>, area: Rect) {
    let items: Vec<ListItem> = listing
        .vehicles
        .iter()
        .map(|vehicle| {
            let mut title = vec![Span::styled(
                vehicle.title(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )];
            if let Some(grade) = &vehicle.grade {
                title.push(Span::styled(format!(" {grade}"), Style::default().fg(MUTED_TEXT)));
            }
            if vehicle.is_favorite {
                title.push(Span::styled(" ♥", Style::default().fg(FAVORITE)));
            }
            let details = Line::from(vec![
                Span::styled(format!("   {}", format_yen(vehicle.price)), Style::default().fg(PRICE_TEXT)),
                Span::styled(
                    format!(
                        "  {} · {} · {} · {} · {}",
                        format_mileage(vehicle.mileage),
                        vehicle.fuel,
                        vehicle.transmission,
                        vehicle.body_type,
                        vehicle.location,
                    ),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(
                    format!("  {} {:.1}", score_stars(vehicle.rating), vehicle.rating),
                    Style::default().fg(BRAND_ACCENT),
                ),
            ]);
            ListItem::new(vec![Line::from(title), details, Line::from("")])
        })
        .collect();

    let browsing = search.focus == SearchFocus::Results;
    let border = if browsing { BRAND_ACCENT } else { GLOBAL_BORDER };
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Listings ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if browsing && !listing.vehicles.is_empty() {
        state.select(Some(search.selected.min(listing.vehicles.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
