//! Chip row rendering and hit-testing.
//!
//! Chips flow along the row and wrap onto the next line when they run out of
//! width. In RTL the row starts at the right edge and each chip puts its
//! trailing action on its left.

use chip_set::ChipAction;
use ratatui::{
    layout::{Position, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::host::Chip;
use crate::theme::{style_chip, style_chip_focused, style_trailing};

const TRAILING_TEXT: &str = " ✕ ";
const SELECTED_MARK: &str = "✓ ";
const GAP: u16 = 1;
const ROW_SPACING: u16 = 2;

/// Screen areas of one chip's two actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipLayout {
    pub primary: Rect,
    pub trailing: Rect,
}

impl ChipLayout {
    pub fn hit(&self, column: u16, row: u16) -> Option<ChipAction> {
        let pos = Position::new(column, row);
        if self.primary.contains(pos) {
            Some(ChipAction::Primary)
        } else if self.trailing.contains(pos) {
            Some(ChipAction::Trailing)
        } else {
            None
        }
    }
}

fn primary_text(chip: &Chip) -> String {
    if chip.selected {
        format!(" {}{} ", SELECTED_MARK, chip.label)
    } else {
        format!(" {} ", chip.label)
    }
}

/// Place every chip inside `area`. Chips that don't fit vertically are
/// dropped from the result.
pub fn layout_chips(chips: &[Chip], area: Rect, rtl: bool) -> Vec<ChipLayout> {
    let trailing_w = TRAILING_TEXT.width() as u16;
    let mut layouts = Vec::with_capacity(chips.len());
    let mut offset: u16 = 0;
    let mut y = area.y;

    for chip in chips {
        let primary_w = (primary_text(chip).width() as u16).min(area.width.saturating_sub(trailing_w));
        let chip_w = primary_w + trailing_w;
        if offset > 0 && offset + chip_w > area.width {
            offset = 0;
            y += ROW_SPACING;
        }
        if y >= area.bottom() || chip_w > area.width {
            break;
        }

        let layout = if rtl {
            let right = area.right() - offset;
            ChipLayout {
                trailing: Rect::new(right - chip_w, y, trailing_w, 1),
                primary: Rect::new(right - primary_w, y, primary_w, 1),
            }
        } else {
            let left = area.x + offset;
            ChipLayout {
                primary: Rect::new(left, y, primary_w, 1),
                trailing: Rect::new(left + primary_w, y, trailing_w, 1),
            }
        };
        layouts.push(layout);
        offset += chip_w + GAP;
    }
    layouts
}

/// Draw the chips and return where each one landed, for mouse hit-testing.
pub fn draw_chip_row(frame: &mut Frame, area: Rect, chips: &[Chip], rtl: bool) -> Vec<ChipLayout> {
    let layouts = layout_chips(chips, area, rtl);
    for (chip, layout) in chips.iter().zip(&layouts) {
        let primary_style = if chip.focus == Some(ChipAction::Primary) {
            style_chip_focused(chip.selected)
        } else {
            style_chip(chip.selected)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(primary_text(chip), primary_style)),
            layout.primary,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                TRAILING_TEXT,
                style_trailing(chip.focus == Some(ChipAction::Trailing)),
            )),
            layout.trailing,
        );
    }
    layouts
}
