use ratatui::layout::Rect;

/// Splits the screen into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_screen_has_no_body() {
        let (_, body, _) = layout_regions(Rect::new(0, 0, 80, 4));
        assert_eq!(body.height, 0);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 20, 10), 50, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
