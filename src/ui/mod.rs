pub mod dialogs;
pub mod hud;
pub mod starfield;
pub mod theme;

use crate::app::App;
use ratatui::Frame;

/// Master render function: draws the starfield, the HUD footer, then the
/// modal overlay.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Layer 0: the field itself
    starfield::draw_starfield(f, area, app);

    // Layer 1: footer key hints / flash message
    hud::draw_hud(f, area, app);

    // Layer 2: modal dialog overlay (if any)
    if app.dialog.is_some() {
        dialogs::draw_dialog(f, area, app);
    }
}
