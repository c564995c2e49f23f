//! Color palette and style constants for the chip row.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_ACCENT: Color = Color::Rgb(255, 95, 95);
pub const C_MUTED: Color = Color::Rgb(72, 72, 88);
pub const C_SECONDARY: Color = Color::Rgb(115, 115, 138);
pub const C_PRIMARY: Color = Color::Rgb(210, 210, 225);
pub const C_CHIP_BG: Color = Color::Rgb(28, 28, 40);
pub const C_CHIP_SELECTED_BG: Color = Color::Rgb(45, 70, 55);
pub const C_SELECTED: Color = Color::Rgb(80, 200, 120);
pub const C_FOCUS: Color = Color::Rgb(120, 100, 200);
pub const C_PANEL_BORDER: Color = Color::Rgb(40, 40, 52);
pub const C_MODE_CHOICE: Color = Color::Rgb(80, 160, 220);
pub const C_MODE_FILTER: Color = Color::Rgb(255, 200, 80);
pub const C_MODE_PLAIN: Color = Color::Rgb(115, 115, 138);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_chip(selected: bool) -> Style {
    if selected {
        Style::default().bg(C_CHIP_SELECTED_BG).fg(C_SELECTED)
    } else {
        Style::default().bg(C_CHIP_BG).fg(C_PRIMARY)
    }
}

pub fn style_chip_focused(selected: bool) -> Style {
    style_chip(selected)
        .bg(C_FOCUS)
        .add_modifier(Modifier::BOLD)
}

pub fn style_trailing(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(C_ACCENT)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(C_CHIP_BG).fg(C_SECONDARY)
    }
}

pub fn style_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}
