use super::theme;
use crate::app::App;
use crate::field::{StarField, StarLayer};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use ratatui::Frame;
use std::time::Duration;

pub fn draw_starfield(f: &mut Frame, area: Rect, app: &App) {
    let widget = StarFieldWidget {
        field: &app.field,
        elapsed: app.animation_elapsed(),
    };
    f.render_widget(widget, area);
}

/// Draws every layer of a field at one instant of its animation. Rendering
/// is a pure function of (patterns, configs, elapsed); nothing is mutated,
/// so redrawing at the same instant reproduces the same buffer.
struct StarFieldWidget<'a> {
    field: &'a StarField,
    elapsed: Duration,
}

impl Widget for StarFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Far layers first so near stars win contested cells.
        for layer in self.field.layers() {
            render_layer(layer, self.elapsed, area, buf);
        }
    }
}

/// One layer is two stacked copies of its pattern, the second sitting one
/// full extent height below the first, with the whole band shifted up by the
/// loop offset. The instant the offset wraps, the second copy occupies
/// exactly the cells the first started in, so no seam is visible.
fn render_layer(layer: &StarLayer, elapsed: Duration, area: Rect, buf: &mut Buffer) {
    let extent = layer.extent();
    let offset = layer.animation().offset_at(elapsed) as u32;
    let (ch, color) = star_appearance(layer.config().point_size);
    let style = Style::default().fg(color);

    for copy_base in [0u32, layer.duplicate_offset() as u32] {
        for point in layer.pattern() {
            let band_y = point.y as u32 + copy_base;
            let Some(y) = band_y.checked_sub(offset) else {
                continue;
            };
            if y >= extent.height as u32 {
                continue;
            }
            let (x, y) = (point.x, y as u16);
            if x >= area.width || y >= area.height {
                continue;
            }
            let cell = &mut buf[(area.x + x, area.y + y)];
            cell.set_char(ch);
            cell.set_style(style);
        }
    }
}

/// Glyph and color for a point size: larger points belong to nearer layers
/// and draw heavier and brighter.
fn star_appearance(point_size: u16) -> (char, Color) {
    match point_size {
        1 => ('·', theme::STAR_DIM),
        2 => ('•', theme::STAR_MID),
        _ => ('✦', theme::STAR_BRIGHT),
    }
}
