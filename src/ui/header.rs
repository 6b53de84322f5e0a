use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    location: &'a str,
    address: Option<&'a str>,
    vehicles: usize,
}

impl<'a> Header<'a> {
    /// `address` is the address-bar buffer while the user is typing a location.
    pub fn new(location: &'a str, address: Option<&'a str>, vehicles: usize) -> Self {
        Self {
            location,
            address,
            vehicles,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("showroom", brand_style),
            Span::styled("  │  ", separator_style),
        ];
        match self.address {
            Some(buffer) => {
                spans.push(Span::styled("Go to: ", Style::default().fg(BRAND_ACCENT)));
                spans.push(Span::styled(format!("{buffer}▏"), text_style));
            }
            None => {
                spans.push(Span::styled(self.location.to_string(), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    format!("{} vehicles", self.vehicles),
                    Style::default().fg(MUTED_TEXT),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
