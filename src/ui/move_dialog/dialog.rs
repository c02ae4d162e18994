use crate::ui::layout::centered_rect_by_size;
use crate::ui::move_dialog::state::MoveDialogState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MIN_WIDTH: u16 = 36;

pub fn render_move_dialog(frame: &mut Frame<'_>, area: Rect, state: &MoveDialogState) {
    let MoveDialogState::Visible {
        title,
        from,
        targets,
        focused,
        ..
    } = state
    else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {title}"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" Currently: {}", from.label()),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];

    for (idx, target) in targets.iter().enumerate() {
        let marker = if idx == *focused { ">" } else { " " };
        let mut line = Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(ACCENT)),
            Span::styled(target.label(), Style::default().fg(HEADER_TEXT)),
        ]);
        if idx == *focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Up/Down: Choose  Enter: Move  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .max(MIN_WIDTH);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let popup = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Change status ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
