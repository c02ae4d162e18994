use ratatui::layout::{Constraint, Direction, Layout, Rect};

const FORM_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 3;
const INTRO_HEIGHT: u16 = 2;

/// Header (nav bar), body and footer.
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

/// Stacked pieces of the page body, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySections {
    pub form: Rect,
    pub banner: Option<Rect>,
    pub intro: Rect,
    /// One rect per reading state, in column order.
    pub columns: [Rect; 3],
}

pub fn body_sections(body: Rect, show_banner: bool) -> BodySections {
    let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Length(INTRO_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);

    BodySections {
        form: rows[0],
        banner: show_banner.then_some(rows[1]),
        intro: rows[2],
        columns: [columns[0], columns[1], columns[2]],
    }
}

/// Rect of `width` x `height` centered in `area`, clipped to it.
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
