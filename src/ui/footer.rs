use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which part of the screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Shelf,
    Typing,
    Moving,
}

impl KeyContext {
    fn hints(self) -> &'static str {
        match self {
            KeyContext::Shelf => {
                " a: Add │ m: Move │ d: Delete │ r: Refresh │ x: Dismiss │ q: Quit"
            }
            KeyContext::Typing => " Enter: Add │ Esc: Cancel │ Ctrl+C: Quit",
            KeyContext::Moving => " ↑/↓: Choose │ Enter: Move │ Esc: Cancel",
        }
    }
}

/// Bottom bar: key hints on the left, pending request count and version on the right.
pub struct Footer {
    context: KeyContext,
    pending: usize,
}

impl Footer {
    pub fn new(context: KeyContext, pending: usize) -> Self {
        Self { context, pending }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.context.hints();
        let status = if self.pending > 0 {
            format!("{} pending │ ", self.pending)
        } else {
            String::new()
        };
        let version = format!("v{} ", VERSION);

        // Separators are multi-byte, so widths are counted in chars
        let used = hints.chars().count() + status.chars().count() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, dim),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(status, Style::default().fg(ACCENT)),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(footer: &Footer) -> String {
        let area = Rect::new(0, 0, 120, 3);
        let mut buf = ratatui::buffer::Buffer::empty(area);
        ratatui::widgets::Widget::render(footer.widget(area), area, &mut buf);
        (0..area.width).map(|x| buf[(x, 1)].symbol()).collect()
    }

    #[test]
    fn shows_context_hints() {
        assert!(text(&Footer::new(KeyContext::Typing, 0)).contains("Esc: Cancel"));
        assert!(text(&Footer::new(KeyContext::Shelf, 0)).contains("d: Delete"));
    }

    #[test]
    fn pending_count_only_when_busy() {
        assert!(!text(&Footer::new(KeyContext::Shelf, 0)).contains("pending"));
        assert!(text(&Footer::new(KeyContext::Shelf, 2)).contains("2 pending"));
    }
}
