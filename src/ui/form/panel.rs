use crate::ui::form::state::AddBookFormState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const PROMPT: &str = " Title: ";

/// Draws the "Add a Book" panel.
///
/// While a request is in flight and nobody is typing, the prompt is replaced by
/// `spinner`.
pub fn render_add_book_form(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AddBookFormState,
    spinner: Option<&str>,
) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let line = match (state, spinner) {
        (AddBookFormState::Editing { title }, _) => Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(ACCENT)),
            Span::styled(title.clone(), text_style),
            Span::styled("   Enter: Add  Esc: Cancel", muted),
        ]),
        (AddBookFormState::Closed, Some(frame_glyph)) => Line::from(vec![
            Span::styled(format!(" {frame_glyph} "), Style::default().fg(ACCENT)),
            Span::styled("Working...", muted),
        ]),
        (AddBookFormState::Closed, None) => Line::from(vec![
            Span::styled(" Press ", muted),
            Span::styled("a", text_style.add_modifier(Modifier::BOLD)),
            Span::styled(" to add a book", muted),
        ]),
    };

    let border = if state.is_editing() { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(" Add a Book ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if let AddBookFormState::Editing { title } = state {
        if area.width > 2 && area.height > 2 {
            let offset =
                u16::try_from(PROMPT.chars().count() + title.chars().count()).unwrap_or(u16::MAX);
            let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
