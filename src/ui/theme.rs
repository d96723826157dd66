#![allow(dead_code)]
use ratatui::style::{Color, Modifier, Style};

// ── Base palette ────────────────────────────────────────────────
pub const BG: Color = Color::Rgb(6, 6, 6);
pub const SURFACE: Color = Color::Rgb(18, 18, 18);
pub const BORDER: Color = Color::Rgb(50, 50, 50);
pub const BORDER_FOCUS: Color = Color::Rgb(140, 140, 140);

pub const TEXT: Color = Color::Rgb(235, 235, 235);
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 130);
pub const ACCENT: Color = Color::Rgb(235, 235, 235);

pub const SUCCESS: Color = Color::Rgb(0, 255, 0);

// Star brightness by depth: far layers draw dim, near layers bright.
pub const STAR_DIM: Color = Color::Rgb(60, 60, 70);
pub const STAR_MID: Color = Color::Rgb(130, 130, 150);
pub const STAR_BRIGHT: Color = Color::Rgb(220, 220, 240);

// ── Composite styles ────────────────────────────────────────────
pub fn panel_title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn footer_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}
