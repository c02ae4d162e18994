use crate::ui::notification::state::NotificationState;
use crate::ui::theme::{ERROR_BG, ERROR_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Red banner with the message and a close hint. Draws nothing when hidden.
pub fn render_notification(frame: &mut Frame<'_>, area: Rect, state: &NotificationState) {
    let Some(message) = state.message() else {
        return;
    };

    let style = Style::default().fg(ERROR_TEXT).bg(ERROR_BG);
    let line = Line::from(vec![
        Span::styled(format!(" {message} "), style),
        Span::styled(" [x] Close ", style.add_modifier(Modifier::BOLD)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ERROR_BG));
    frame.render_widget(Paragraph::new(line).style(style).block(block), area);
}
