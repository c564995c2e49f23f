//! App — owns the chip-set controller and runs the terminal event loop.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chip_set::{ChipAction, ChipSetAdapter, ChipSetFoundation};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::host::ChipRow;
use crate::keymap::{intent_for_key, swapped, Intent};
use crate::session::{save_ui_session_state, UiSessionState};
use crate::theme::{style_border, style_muted};
use crate::widgets::chip_row::{draw_chip_row, ChipLayout};
use crate::widgets::status_bar::{draw_key_hints, draw_status_bar};

/// How long a selection notification stays in the status bar.
const EVENT_TTL: Duration = Duration::from_secs(4);

/// Upper bound on how long the input reader waits before rechecking shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

enum AppMessage {
    Event(Event),
}

pub struct App {
    chips: ChipSetFoundation<ChipRow>,
    session_path: PathBuf,
    last_event: Option<(String, Instant)>,
    /// Where each chip was drawn last frame.
    layouts: Vec<ChipLayout>,
    /// Set once the user changes the selection. Until then the session file
    /// is left alone, so a selection that could not be restored survives.
    selection_dirty: bool,
    should_quit: bool,
}

impl App {
    pub fn new(row: ChipRow, session_path: PathBuf) -> Self {
        Self {
            chips: ChipSetFoundation::new(row),
            session_path,
            last_event: None,
            layouts: Vec::new(),
            selection_dirty: false,
            should_quit: false,
        }
    }

    /// Replay a saved selection. These come from our own state, not the
    /// user, so they go through the silent path and notify nobody.
    pub fn restore_selection(&mut self, chip_ids: &[String]) {
        for id in chip_ids {
            self.chips.handle_chip_selection(id, true, false);
        }
        debug!("restored selection {:?}", self.chips.selected_chip_ids());
    }

    pub fn selected_chip_ids(&self) -> &[String] {
        self.chips.selected_chip_ids()
    }

    pub fn row(&self) -> &ChipRow {
        self.chips.adapter()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_ref().map(|(text, _)| text.as_str())
    }

    fn focused(&self) -> Option<(String, ChipAction)> {
        self.row()
            .focused()
            .map(|(chip, action)| (chip.id.clone(), action))
    }

    /// Focus the first chip when nothing holds focus. Returns true if focus
    /// had to be placed.
    fn place_focus_if_lost(&mut self) -> bool {
        if self.focused().is_some() || self.row().is_empty() {
            return false;
        }
        self.chips
            .adapter_mut()
            .focus_chip_primary_action_at_index(0);
        true
    }

    pub fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Navigate(key) => {
                if !self.place_focus_if_lost() {
                    if let Some((id, action)) = self.focused() {
                        self.chips
                            .handle_chip_navigation(&id, key.as_str(), action.into());
                    }
                }
            }
            Intent::Activate => match self.focused() {
                Some((id, ChipAction::Primary)) => self.chips.handle_chip_interaction(&id),
                Some((id, ChipAction::Trailing)) => self.chips.handle_chip_removal(&id),
                None => {
                    self.place_focus_if_lost();
                }
            },
            Intent::Remove => {
                if let Some((id, _)) = self.focused() {
                    self.chips.handle_chip_removal(&id);
                }
            }
            Intent::SwapAction => {
                if let Some((id, action)) = self.focused() {
                    let row = self.chips.adapter_mut();
                    if let Some(index) = row.get_index_of_chip_by_id(&id) {
                        row.focus(index, swapped(action));
                    }
                }
            }
            Intent::CycleMode => {
                let row = self.chips.adapter_mut();
                let mode = row.mode().next();
                row.set_mode(mode);
                info!("chip set mode → {}", mode.label());
            }
            Intent::ToggleRtl => {
                let row = self.chips.adapter_mut();
                let rtl = !row.is_rtl();
                row.set_rtl(rtl);
                info!("rtl → {}", rtl);
            }
            Intent::Quit => self.should_quit = true,
            Intent::Noop => {}
        }
        self.flush_notifications();
    }

    fn handle_mouse(&mut self, ev: MouseEvent) {
        if ev.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((index, action)) = self
            .layouts
            .iter()
            .enumerate()
            .find_map(|(i, layout)| layout.hit(ev.column, ev.row).map(|a| (i, a)))
        else {
            return;
        };
        let Some(id) = self.row().chips().get(index).map(|chip| chip.id.clone()) else {
            return;
        };

        match action {
            ChipAction::Primary => {
                self.chips.handle_chip_interaction(&id);
                self.chips.adapter_mut().focus(index, ChipAction::Primary);
            }
            ChipAction::Trailing => self.chips.handle_chip_removal(&id),
        }
        self.flush_notifications();
    }

    fn flush_notifications(&mut self) {
        for n in self.chips.adapter_mut().drain_notifications() {
            let text = format!(
                "{} {}",
                n.chip_id,
                if n.selected { "selected" } else { "deselected" }
            );
            info!("selection: {}", text);
            self.selection_dirty = true;
            self.last_event = Some((text, Instant::now()));
        }
    }

    fn tick(&mut self) -> bool {
        let expired = self
            .last_event
            .as_ref()
            .is_some_and(|(_, at)| at.elapsed() >= EVENT_TTL);
        if expired {
            self.last_event = None;
        }
        expired
    }

    fn save_session(&self) {
        if !self.selection_dirty {
            debug!("selection untouched; keeping {}", self.session_path.display());
            return;
        }
        let state = UiSessionState {
            selected_chip_ids: self.selected_chip_ids().to_vec(),
        };
        if let Err(e) = save_ui_session_state(&self.session_path, &state) {
            warn!("failed to save session state: {}", e);
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal ready, size={:?}", terminal.size());

        let (tx, mut rx) = mpsc::channel::<AppMessage>(256);
        let shutdown = Arc::new(AtomicBool::new(false));

        // ── Background task: keyboard/mouse events ────────────────────────────
        let reader_shutdown = Arc::clone(&shutdown);
        let reader = tokio::task::spawn_blocking(move || {
            pump_input(&reader_shutdown, &tx, |timeout| {
                if event::poll(timeout)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            })
        });

        let mut ui_tick = tokio::time::interval(Duration::from_millis(250));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit() {
                break;
            }

            tokio::select! {
                msg = rx.recv() => {
                    let Some(AppMessage::Event(ev)) = msg else {
                        warn!("input reader stopped");
                        break;
                    };
                    match ev {
                        Event::Key(key) => self.handle_intent(intent_for_key(key)),
                        Event::Mouse(mouse) => self.handle_mouse(mouse),
                        _ => {}
                    }
                    needs_redraw = true;
                }
                _ = ui_tick.tick() => {
                    needs_redraw = self.tick();
                }
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        shutdown.store(true, Ordering::Relaxed);
        drop(rx);
        if let Err(e) = reader.await {
            warn!("input reader failed: {}", e);
        }
        self.save_session();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [body, status, hints] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let block = Block::default()
            .title(" chips ")
            .borders(Borders::ALL)
            .border_style(style_border());
        let inner = block.inner(body);
        frame.render_widget(block, body);

        let chips_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let row = self.chips.adapter();
        self.layouts = draw_chip_row(frame, chips_area, row.chips(), row.is_rtl());
        if row.is_empty() {
            frame.render_widget(
                ratatui::widgets::Paragraph::new("no chips left").style(style_muted()),
                chips_area,
            );
        }

        draw_status_bar(
            frame,
            status,
            row.mode(),
            row.is_rtl(),
            self.chips.selected_chip_ids(),
            self.last_event(),
        );
        draw_key_hints(frame, hints);
    }
}

/// Forward terminal events to the app until `shutdown` is set or the app
/// stops listening. `next` waits at most [`INPUT_POLL`] for one event.
fn pump_input<F>(shutdown: &AtomicBool, tx: &mpsc::Sender<AppMessage>, mut next: F)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    while !shutdown.load(Ordering::Relaxed) {
        match next(INPUT_POLL) {
            Ok(Some(ev)) => {
                if tx.blocking_send(AppMessage::Event(ev)).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("terminal input error: {}", e);
                break;
            }
        }
    }
    debug!("input reader stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChipSetMode;
    use crate::session::load_ui_session_state;
    use crate::widgets::chip_row::layout_chips;
    use chip_set::NavigationKey;
    use ratatui::crossterm::event::KeyModifiers;

    fn app(mode: ChipSetMode) -> App {
        let mut row = ChipRow::from_labels(&["Rust", "Go", "Zig"]);
        row.set_mode(mode);
        row.focus(0, ChipAction::Primary);
        App::new(row, PathBuf::from("unused.json"))
    }

    fn focused_id(app: &App) -> Option<String> {
        app.focused().map(|(id, _)| id)
    }

    #[test]
    fn test_restore_emits_no_notifications() {
        let mut app = app(ChipSetMode::Filter);
        app.restore_selection(&["go".to_string(), "zig".to_string(), "gone".to_string()]);
        assert_eq!(app.selected_chip_ids(), ["go", "zig"]);
        assert!(app.last_event().is_none());
        assert!(app.row().chips()[1].selected);
    }

    #[test]
    fn test_activate_selects_and_reports() {
        let mut app = app(ChipSetMode::Filter);
        app.handle_intent(Intent::Activate);
        assert_eq!(app.selected_chip_ids(), ["rust"]);
        assert_eq!(app.last_event(), Some("rust selected"));

        app.handle_intent(Intent::Activate);
        assert!(app.selected_chip_ids().is_empty());
        assert_eq!(app.last_event(), Some("rust deselected"));
    }

    #[test]
    fn test_activate_on_trailing_removes() {
        let mut app = app(ChipSetMode::Filter);
        app.handle_intent(Intent::SwapAction);
        app.handle_intent(Intent::Activate);
        assert_eq!(app.row().chips().len(), 2);
        assert_eq!(focused_id(&app).as_deref(), Some("go"));
        assert_eq!(app.focused().map(|(_, a)| a), Some(ChipAction::Trailing));
    }

    #[test]
    fn test_navigation_follows_rtl_toggle() {
        let mut app = app(ChipSetMode::Plain);
        app.handle_intent(Intent::Navigate(NavigationKey::ArrowRight));
        assert_eq!(focused_id(&app).as_deref(), Some("go"));

        app.handle_intent(Intent::ToggleRtl);
        app.handle_intent(Intent::Navigate(NavigationKey::ArrowRight));
        assert_eq!(focused_id(&app).as_deref(), Some("rust"));
        assert_eq!(app.focused().map(|(_, a)| a), Some(ChipAction::Trailing));
    }

    #[test]
    fn test_mode_change_applies_to_next_interaction() {
        let mut app = app(ChipSetMode::Plain);
        app.handle_intent(Intent::Activate);
        assert!(app.selected_chip_ids().is_empty());

        app.handle_intent(Intent::CycleMode);
        assert_eq!(app.row().mode(), ChipSetMode::Choice);
        app.handle_intent(Intent::Activate);
        assert_eq!(app.selected_chip_ids(), ["rust"]);
    }

    #[test]
    fn test_focus_returns_after_removing_last_chip() {
        let mut app = app(ChipSetMode::Filter);
        app.handle_intent(Intent::Navigate(NavigationKey::End));
        app.handle_intent(Intent::Remove);
        assert_eq!(app.row().chips().len(), 2);
        assert!(app.focused().is_none());

        app.handle_intent(Intent::Navigate(NavigationKey::ArrowRight));
        assert_eq!(focused_id(&app).as_deref(), Some("rust"));
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn laid_out(mode: ChipSetMode) -> App {
        let mut app = app(mode);
        app.layouts = layout_chips(app.row().chips(), Rect::new(0, 0, 40, 1), false);
        app
    }

    #[test]
    fn test_click_on_label_interacts() {
        let mut app = laid_out(ChipSetMode::Filter);
        app.handle_intent(Intent::Navigate(NavigationKey::End));
        app.handle_mouse(click(2, 0));
        assert_eq!(app.selected_chip_ids(), ["rust"]);
        assert_eq!(app.last_event(), Some("rust selected"));
        assert_eq!(
            app.focused(),
            Some(("rust".to_string(), ChipAction::Primary))
        );
    }

    #[test]
    fn test_click_on_trailing_removes() {
        let mut app = laid_out(ChipSetMode::Filter);
        let trailing = app.layouts[0].trailing;
        app.handle_mouse(click(trailing.x, trailing.y));
        let ids: Vec<_> = app.row().chips().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["go", "zig"]);
        assert_eq!(
            app.focused(),
            Some(("go".to_string(), ChipAction::Trailing))
        );
    }

    #[test]
    fn test_click_ignores_misses_and_other_buttons() {
        let mut app = laid_out(ChipSetMode::Filter);
        app.handle_mouse(click(39, 0));
        let mut right = click(2, 0);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(right);
        assert!(app.selected_chip_ids().is_empty());
        assert_eq!(app.row().chips().len(), 3);
    }

    #[test]
    fn test_unrestorable_selection_survives_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_state.json");
        let saved = UiSessionState {
            selected_chip_ids: vec!["go".to_string(), "zig".to_string()],
        };
        save_ui_session_state(&path, &saved).unwrap();

        let mut row = ChipRow::from_labels(&["Rust", "Go", "Zig"]);
        row.set_mode(ChipSetMode::Plain);
        let mut app = App::new(row, path.clone());
        app.restore_selection(&load_ui_session_state(&path).selected_chip_ids);
        assert!(app.selected_chip_ids().is_empty());
        app.save_session();

        assert_eq!(load_ui_session_state(&path).selected_chip_ids, ["go", "zig"]);
    }

    #[test]
    fn test_changed_selection_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_state.json");
        let mut row = ChipRow::from_labels(&["Rust", "Go", "Zig"]);
        row.set_mode(ChipSetMode::Filter);
        row.focus(0, ChipAction::Primary);
        let mut app = App::new(row, path.clone());

        app.save_session();
        assert!(!path.exists());

        app.handle_intent(Intent::Activate);
        app.save_session();
        assert_eq!(load_ui_session_state(&path).selected_chip_ids, ["rust"]);
    }

    #[test]
    fn test_input_reader_stops_on_shutdown() {
        let shutdown = AtomicBool::new(false);
        let (tx, mut rx) = mpsc::channel(8);
        let mut polls = 0;
        pump_input(&shutdown, &tx, |_| {
            polls += 1;
            match polls {
                1 => Ok(Some(Event::FocusGained)),
                2 => Ok(None),
                _ => {
                    shutdown.store(true, Ordering::Relaxed);
                    Ok(None)
                }
            }
        });
        assert_eq!(polls, 3);
        assert!(matches!(rx.try_recv(), Ok(AppMessage::Event(Event::FocusGained))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_input_reader_stops_when_app_is_gone() {
        let shutdown = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel(8);
        drop(rx);
        let mut polls = 0;
        pump_input(&shutdown, &tx, |_| {
            polls += 1;
            Ok(Some(Event::FocusLost))
        });
        assert_eq!(polls, 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app(ChipSetMode::Filter);
        assert!(!app.should_quit());
        app.handle_intent(Intent::Quit);
        assert!(app.should_quit());
    }
}
