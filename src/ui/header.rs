use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar with the app name and the size of the shelf.
pub struct NavBar {
    book_count: usize,
}

impl NavBar {
    pub fn new(book_count: usize) -> Self {
        Self { book_count }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let separator = Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR));
        let count = match self.book_count {
            1 => "1 book".to_string(),
            n => format!("{n} books"),
        };
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "Bookshelf",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled("Your reading list", Style::default().fg(HEADER_TEXT)),
            separator,
            Span::styled(count, Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
