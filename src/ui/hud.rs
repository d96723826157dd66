use super::theme;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Bottom status line: flash message if active, otherwise key hints.
pub fn draw_hud(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let footer_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    if let Some(msg) = &app.flash_message {
        if app.tick < app.flash_until {
            let footer = Line::from(vec![Span::styled(
                format!(" {} ", msg),
                Style::default()
                    .fg(theme::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]);
            f.render_widget(Paragraph::new(footer), footer_area);
            return;
        }
    }

    let pause_label = if app.is_paused() { " Resume  " } else { " Pause  " };
    let mut spans = vec![
        Span::styled(" [Space]", theme::key_hint_style()),
        Span::styled(pause_label, theme::footer_style()),
        Span::styled("[r]", theme::key_hint_style()),
        Span::styled(" Rescatter  ", theme::footer_style()),
        Span::styled("[?]", theme::key_hint_style()),
        Span::styled(" Help  ", theme::footer_style()),
        Span::styled("[q]", theme::key_hint_style()),
        Span::styled(" Quit", theme::footer_style()),
    ];
    if app.is_paused() {
        spans.push(Span::styled(
            "   -- paused --",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), footer_area);
}
