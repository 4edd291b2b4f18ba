use ratatui::layout::Rect;

const SEARCH_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 1;

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

/// Splits the body into the heading/notice banner, the search box and the
/// post list, top to bottom.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let banner_height = BANNER_HEIGHT.min(body.height);
    let search_height = SEARCH_HEIGHT.min(body.height.saturating_sub(banner_height));
    let banner = Rect {
        height: banner_height,
        ..body
    };
    let search = Rect {
        y: body.y + banner_height,
        height: search_height,
        ..body
    };
    let list = Rect {
        y: body.y + banner_height + search_height,
        height: body.height.saturating_sub(banner_height + search_height),
        ..body
    };
    (banner, search, list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        let (banner, search, list) = body_regions(body);
        assert_eq!(banner.height, 1);
        assert_eq!(search.height, 3);
        assert_eq!(list.y, body.y + 4);
        assert_eq!(banner.height + search.height + list.height, body.height);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(footer.height, 0);
        let (_, search, list) = body_regions(body);
        assert_eq!(search.height, 0);
        assert_eq!(list.height, 0);
    }
}
