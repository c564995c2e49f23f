//! Terminal input → chip-row intents.

use chip_set::{ChipAction, NavigationKey};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Navigate(NavigationKey),
    /// Activate whichever action of the focused chip holds focus.
    Activate,
    Remove,
    /// Move focus between the focused chip's primary and trailing action.
    SwapAction,
    CycleMode,
    ToggleRtl,
    Quit,
    Noop,
}

pub fn intent_for_key(key: KeyEvent) -> Intent {
    if key.kind == KeyEventKind::Release {
        return Intent::Noop;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Intent::Quit;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Intent::Navigate(NavigationKey::ArrowLeft),
        KeyCode::Right | KeyCode::Char('l') => Intent::Navigate(NavigationKey::ArrowRight),
        KeyCode::Up | KeyCode::Char('k') => Intent::Navigate(NavigationKey::ArrowUp),
        KeyCode::Down | KeyCode::Char('j') => Intent::Navigate(NavigationKey::ArrowDown),
        KeyCode::Home | KeyCode::Char('g') => Intent::Navigate(NavigationKey::Home),
        KeyCode::End | KeyCode::Char('G') => Intent::Navigate(NavigationKey::End),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Activate,
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => Intent::Remove,
        KeyCode::Tab | KeyCode::BackTab => Intent::SwapAction,
        KeyCode::Char('m') => Intent::CycleMode,
        KeyCode::Char('r') => Intent::ToggleRtl,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        _ => Intent::Noop,
    }
}

/// The other half of a chip.
pub fn swapped(action: ChipAction) -> ChipAction {
    match action {
        ChipAction::Primary => ChipAction::Trailing,
        ChipAction::Trailing => ChipAction::Primary,
    }
}
