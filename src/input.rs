use crate::app::App;
use crate::types::DialogKind;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Any key closes an open dialog
    if app.dialog.is_some() {
        app.dialog = None;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char(' ') => {
            app.toggle_pause();
        }
        KeyCode::Char('r') => {
            app.rescatter();
        }
        KeyCode::Char('?') => {
            app.dialog = Some(DialogKind::Help);
        }
        _ => {}
    }
}
