use crate::books::ReadingState;
use crate::ui::app::App;
use crate::ui::book_list::BookList;
use crate::ui::footer::{Footer, KeyContext};
use crate::ui::form::render_add_book_form;
use crate::ui::header::NavBar;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::move_dialog::render_move_dialog;
use crate::ui::notification::render_notification;
use crate::ui::theme::MUTED_TEXT;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

const INTRO: &str = "Manage your books easily! Add a book using the form above.";
const INTRO_KEYS: &str = "Arrows or h/j/k/l select a book, m changes its status, d deletes it.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(NavBar::new(app.books().len()).widget(), header);
    frame.render_widget(Clear, body);

    let sections = body_sections(body, app.notification().is_visible());
    render_add_book_form(frame, sections.form, app.form(), app.spinner());
    if let Some(banner) = sections.banner {
        render_notification(frame, banner, app.notification());
    }

    let intro = Paragraph::new(vec![Line::from(INTRO), Line::from(INTRO_KEYS)])
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(intro, sections.intro);

    let shelf = app.shelf();
    let columns = shelf.columns();
    // A failed first fetch leaves `loaded` false with nothing in flight
    let awaiting_first_load = !shelf.loaded && app.is_loading();
    for state in ReadingState::ALL {
        let rect = sections.columns[state.column_index()];
        let selected = (shelf.focus == state).then(|| shelf.selected_row(state));
        let list = BookList::new(state, columns.column(state))
            .selected(selected)
            .awaiting_first_load(awaiting_first_load);
        frame.render_widget(list.widget(rect), rect);
    }

    let context = if app.form().is_editing() {
        KeyContext::Typing
    } else if app.move_dialog().is_visible() {
        KeyContext::Moving
    } else {
        KeyContext::Shelf
    };
    let pending = app.requests().in_flight();
    frame.render_widget(Footer::new(context, pending).widget(footer), footer);

    render_move_dialog(frame, body, app.move_dialog());
}
