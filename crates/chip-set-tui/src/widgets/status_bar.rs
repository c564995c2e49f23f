//! Status bar — mode badge, direction, last selection notification, keys.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::ChipSetMode;
use crate::theme::{C_MODE_CHOICE, C_MODE_FILTER, C_MODE_PLAIN, C_MUTED, C_PRIMARY, C_SECONDARY};

fn mode_color(mode: ChipSetMode) -> ratatui::style::Color {
    match mode {
        ChipSetMode::Choice => C_MODE_CHOICE,
        ChipSetMode::Filter => C_MODE_FILTER,
        ChipSetMode::Plain => C_MODE_PLAIN,
    }
}

pub fn draw_status_bar(
    frame: &mut Frame,
    area: Rect,
    mode: ChipSetMode,
    rtl: bool,
    selected: &[String],
    last_event: Option<&str>,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(mode_color(mode))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if rtl { " RTL " } else { " LTR " },
            Style::default().fg(C_SECONDARY),
        ),
        Span::styled("│ ", Style::default().fg(C_MUTED)),
    ];

    if selected.is_empty() {
        spans.push(Span::styled("nothing selected", Style::default().fg(C_MUTED)));
    } else {
        spans.push(Span::styled(
            selected.join(", "),
            Style::default().fg(C_PRIMARY),
        ));
    }

    if let Some(event) = last_event {
        spans.push(Span::styled("  │ ", Style::default().fg(C_MUTED)));
        spans.push(Span::styled(event.to_string(), Style::default().fg(C_SECONDARY)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn draw_key_hints(frame: &mut Frame, area: Rect) {
    const HINTS: &[(&str, &str)] = &[
        ("←→↑↓", "move"),
        ("home/end", "jump"),
        ("enter", "select"),
        ("tab", "✕"),
        ("del", "remove"),
        ("m", "mode"),
        ("r", "rtl"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(HINTS.len() * 2);
    for (key, what) in HINTS {
        spans.push(Span::styled(format!(" {}", key), Style::default().fg(C_SECONDARY)));
        spans.push(Span::styled(format!(" {} ", what), Style::default().fg(C_MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
