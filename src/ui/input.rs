use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crate::ui::move_dialog::MoveIntent;
use crate::ui::notification::NotificationIntent;
use crate::ui::shelf::ShelfIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes a key press to whichever part of the screen has input:
/// the form while typing, then the move dialog, then the shelf.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form().is_editing() {
        handle_form_key(app, key);
        return;
    }

    if app.move_dialog().is_visible() {
        handle_move_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Char('x') => {
            app.dispatch_notification(NotificationIntent::Dismiss);
        }
        KeyCode::Char('a') | KeyCode::Char('n') => app.dispatch_form(FormIntent::Open),
        KeyCode::Char('r') => {
            app.request_fetch();
        }
        KeyCode::Char('m') | KeyCode::Enter => {
            app.open_move_dialog();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Left | KeyCode::Char('h') => app.dispatch_shelf(ShelfIntent::FocusLeft),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch_shelf(ShelfIntent::FocusRight),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_shelf(ShelfIntent::FocusUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_shelf(ShelfIntent::FocusDown),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_form(FormIntent::Cancel),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_move_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.dispatch_move(MoveIntent::Close),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_move(MoveIntent::Up),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_move(MoveIntent::Down),
        KeyCode::Enter => {
            app.confirm_move();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
