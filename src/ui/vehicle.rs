use crate::catalog::VehicleRecord;
use crate::ui::app::App;
use crate::ui::detail::{DetailState, DetailTab};
use crate::ui::format::{format_mileage, format_usd, format_yen, group_thousands, score_stars};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    BRAND_ACCENT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn render_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(vehicle) = app.current_vehicle() else {
        let id = app.route().param("id").unwrap_or("");
        render_not_found(frame, id, area);
        return;
    };
    let state = app.detail();
    let show_usd = app.config().display.show_secondary_price;

    let [summary_area, tabs_area, content_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(summary(vehicle, state, show_usd), summary_area);

    let tabs = Tabs::new(DetailTab::ALL.iter().map(|tab| tab.title()))
        .select(state.tab.index())
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(tabs, tabs_area);

    let lines = match state.tab {
        DetailTab::Overview => overview_lines(vehicle),
        DetailTab::Features => feature_lines(vehicle),
        DetailTab::Inspection => inspection_lines(vehicle),
        DetailTab::History => history_lines(vehicle),
    };
    let content = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(content, content_area);
}

fn summary(vehicle: &VehicleRecord, state: &DetailState, show_usd: bool) -> Paragraph<'static> {
    let mut title = vec![Span::styled(
        format!(" {}", vehicle.title()),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(grade) = &vehicle.grade {
        title.push(Span::styled(format!(" {grade}"), Style::default().fg(MUTED_TEXT)));
    }
    let heart = if state.favorite { " ♥" } else { " ♡" };
    title.push(Span::styled(heart, Style::default().fg(FAVORITE)));

    let mut price = vec![Span::styled(
        format!(" {}", format_yen(vehicle.price)),
        Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(usd) = vehicle.price_usd.filter(|_| show_usd) {
        price.push(Span::styled(
            format!("  ≈ {} USD", format_usd(usd)),
            Style::default().fg(MUTED_TEXT),
        ));
    }

    let gallery = vehicle.gallery();
    let index = state.image_index.min(gallery.len().saturating_sub(1));
    let photo = gallery.get(index).copied().unwrap_or("");

    let mut engagement = format!(
        " {} views",
        group_thousands(u64::from(vehicle.views))
    );
    if let Some(inquiries) = vehicle.inquiries {
        engagement.push_str(&format!(" · {inquiries} inquiries"));
    }
    if let Some(updated) = &vehicle.last_updated {
        engagement.push_str(&format!(" · updated {updated}"));
    }

    let lines = vec![
        Line::from(title),
        Line::from(price),
        Line::from(Span::styled(
            format!(" {} · {}", vehicle.dealer, vehicle.location),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(vec![
            Span::styled(
                format!(" Photo {}/{} ", index + 1, gallery.len()),
                Style::default().fg(BRAND_ACCENT),
            ),
            Span::styled(photo.to_string(), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(Span::styled(engagement, Style::default().fg(MUTED_TEXT))),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn spec_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<18}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn overview_lines(vehicle: &VehicleRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        spec_line("Year", vehicle.year.to_string()),
        spec_line("Mileage", format_mileage(vehicle.mileage)),
        spec_line("Fuel", vehicle.fuel.clone()),
        spec_line("Transmission", vehicle.transmission.clone()),
        spec_line("Drivetrain", vehicle.drivetrain.clone()),
        spec_line("Engine", vehicle.engine.clone()),
        spec_line("Body type", vehicle.body_type.clone()),
        spec_line("Doors / Seats", format!("{} / {}", vehicle.doors, vehicle.seats)),
        spec_line("Color", vehicle.color.clone()),
    ];
    let optional = [
        ("Interior", &vehicle.interior_color),
        ("Chassis number", &vehicle.chassis_number),
        ("Model code", &vehicle.model_code),
        ("Inspection date", &vehicle.inspection_date),
        ("Inspection valid", &vehicle.inspection_valid),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(spec_line(label, value.clone()));
        }
    }
    let condition = match vehicle.condition_score {
        Some(score) => format!("{} ({score:.1}/5)", vehicle.condition),
        None => vehicle.condition.clone(),
    };
    lines.push(spec_line("Condition", condition));
    lines.push(spec_line(
        "Rating",
        format!("{} {:.1}", score_stars(vehicle.rating), vehicle.rating),
    ));
    lines
}

fn feature_lines(vehicle: &VehicleRecord) -> Vec<Line<'static>> {
    if vehicle.features.is_empty() {
        return vec![muted_line("No features listed")];
    }
    vehicle
        .features
        .iter()
        .map(|feature| {
            Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(STATUS_OK)),
                Span::styled(feature.clone(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect()
}

fn inspection_lines(vehicle: &VehicleRecord) -> Vec<Line<'static>> {
    let Some(report) = &vehicle.inspection_report else {
        return vec![muted_line("No inspection report available")];
    };
    report
        .items()
        .into_iter()
        .map(|(label, item)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", label), Style::default().fg(MUTED_TEXT)),
                Span::styled(score_stars(item.score), Style::default().fg(BRAND_ACCENT)),
                Span::styled(format!(" {:.0}/5  ", item.score), Style::default().fg(HEADER_TEXT)),
                Span::styled(item.notes.clone(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect()
}

fn history_lines(vehicle: &VehicleRecord) -> Vec<Line<'static>> {
    if vehicle.service_history.is_empty() {
        return vec![muted_line("No service history recorded")];
    }
    vehicle
        .service_history
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!(" {}  ", entry.date), Style::default().fg(MUTED_TEXT)),
                Span::styled(format!("{:<28}", entry.service), Style::default().fg(HEADER_TEXT)),
                Span::styled(format_mileage(entry.mileage), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect()
}

fn muted_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" {text}"), Style::default().fg(MUTED_TEXT)))
}

fn render_not_found(frame: &mut Frame<'_>, id: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Vehicle not found",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("No listing with id '{id}' exists.")),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to go back",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 6;
    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, width, height);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            ),
        rect,
    );
}
