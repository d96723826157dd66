use super::theme;
use crate::app::App;
use crate::types::DialogKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Draw the currently active modal dialog overlay.
pub fn draw_dialog(f: &mut Frame, area: Rect, app: &App) {
    let dialog = match &app.dialog {
        Some(d) => d,
        None => return,
    };

    match dialog {
        DialogKind::Help => draw_help(f, area, app),
    }
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(55, 15, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            " Help - Starfall ",
            theme::panel_title_style(),
        )]))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true))
        .style(Style::default().bg(theme::SURFACE));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let hl = theme::key_hint_style();
    let nl = Style::default().fg(theme::TEXT);
    let dim = Style::default().fg(theme::TEXT_DIM);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  KEYS",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Space", hl),
            Span::styled("      Pause / resume the scroll", nl),
        ]),
        Line::from(vec![
            Span::styled("  r", hl),
            Span::styled("          Rescatter all layers", nl),
        ]),
        Line::from(vec![
            Span::styled("  q or Esc", hl),
            Span::styled("   Quit", nl),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+C", hl),
            Span::styled("     Force quit", nl),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  LAYERS (far to near)",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for layer in &app.config.layers {
        lines.push(Line::from(Span::styled(
            format!(
                "  {} stars, size {}, one loop every {}s",
                layer.count, layer.point_size, layer.loop_duration_secs
            ),
            dim,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", dim)));

    f.render_widget(Paragraph::new(lines), inner);
}
