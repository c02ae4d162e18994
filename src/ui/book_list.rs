use crate::books::{Book, ReadingState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// One reading-state column. Pure view over a slice of books.
pub struct BookList<'a> {
    state: ReadingState,
    books: &'a [&'a Book],
    /// Highlighted row; only shown while the column has focus.
    selected: Option<usize>,
    /// True while the first list is still on its way.
    awaiting_first_load: bool,
}

impl<'a> BookList<'a> {
    pub fn new(state: ReadingState, books: &'a [&'a Book]) -> Self {
        Self {
            state,
            books,
            selected: None,
            awaiting_first_load: false,
        }
    }

    pub fn selected(mut self, row: Option<usize>) -> Self {
        self.selected = row;
        self
    }

    pub fn awaiting_first_load(mut self, awaiting: bool) -> Self {
        self.awaiting_first_load = awaiting;
        self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let focused = self.selected.is_some();
        let border = if focused { ACCENT } else { GLOBAL_BORDER };
        let title = Span::styled(
            format!(" {} ({}) ", self.state.label(), self.books.len()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        if self.books.is_empty() {
            let placeholder = if self.awaiting_first_load {
                "Loading..."
            } else {
                "No books"
            };
            return Paragraph::new(Line::from(Span::styled(
                format!(" {placeholder}"),
                Style::default().fg(MUTED_TEXT),
            )))
            .block(block);
        }

        let lines: Vec<Line<'a>> = self
            .books
            .iter()
            .enumerate()
            .map(|(idx, book)| {
                let line = Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(book.title.clone(), Style::default().fg(HEADER_TEXT)),
                ]);
                if Some(idx) == self.selected {
                    line.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
                } else {
                    line
                }
            })
            .collect();

        // Keep the highlighted row inside the visible window
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = match self.selected {
            Some(row) if visible > 0 && row >= visible => row + 1 - visible,
            _ => 0,
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0))
    }
}
