//! ChipSetFoundation — owns the selection set and turns clicks, key presses
//! and removal requests into adapter calls.
//!
//! The chip-set mode is never cached: `has_class` is asked on every call, so a
//! host can switch between choice and filter behaviour at runtime.

use tracing::debug;

use crate::adapter::ChipSetAdapter;
use crate::constants::css_classes;
use crate::event::{ChipAction, EventSource, NavigationKey};

pub struct ChipSetFoundation<A> {
    adapter: A,
    /// Selected chip ids in selection order (not display order).
    selected_chip_ids: Vec<String>,
}

impl<A: ChipSetAdapter> ChipSetFoundation<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            selected_chip_ids: Vec::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    pub fn selected_chip_ids(&self) -> &[String] {
        &self.selected_chip_ids
    }

    pub fn is_selected(&self, chip_id: &str) -> bool {
        self.selected_chip_ids.iter().any(|id| id == chip_id)
    }

    /// Select `chip_id` and notify clients.
    ///
    /// In a choice set every other selected chip is deselected first. Does
    /// nothing if the chip is already selected or the set is neither choice
    /// nor filter.
    pub fn select(&mut self, chip_id: &str) {
        self.select_chip(chip_id, true);
    }

    /// A chip was activated (click, Enter). Focus collapses onto it and, for
    /// selectable sets, its selection changes: filter chips toggle, choice
    /// chips only ever turn on.
    pub fn handle_chip_interaction(&mut self, chip_id: &str) {
        let Some(index) = self.adapter.get_index_of_chip_by_id(chip_id) else {
            debug!("interaction on unknown chip {:?}", chip_id);
            return;
        };
        self.remove_focus_from_chips_except(Some(index));

        if self.is_filter() {
            if self.is_selected(chip_id) {
                self.deselect_chip(chip_id, true);
            } else {
                self.select_chip(chip_id, true);
            }
        } else if self.is_choice() {
            self.select_chip(chip_id, true);
        }
    }

    /// A chip reported its own selection state.
    ///
    /// Mirrors the state into the selection set without re-notifying clients,
    /// since the change originated on the host side. `should_ignore` is set by
    /// hosts for echoes of changes the controller itself made.
    pub fn handle_chip_selection(&mut self, chip_id: &str, selected: bool, should_ignore: bool) {
        if should_ignore {
            return;
        }
        let is_selected = self.is_selected(chip_id);
        if selected && !is_selected {
            self.select_chip(chip_id, false);
        } else if !selected && is_selected {
            self.deselect_chip(chip_id, false);
        }
    }

    /// Remove a chip and hand focus to the trailing action of the chip that
    /// slides into its slot. Removing the last chip leaves nothing focused.
    pub fn handle_chip_removal(&mut self, chip_id: &str) {
        let Some(index) = self.adapter.get_index_of_chip_by_id(chip_id) else {
            debug!("removal of unknown chip {:?}", chip_id);
            return;
        };
        if self.is_selected(chip_id) {
            self.deselect_chip(chip_id, true);
        }
        self.adapter.remove_chip_at_index(index);

        let count = self.adapter.get_chip_list_count();
        if index < count {
            self.remove_focus_from_chips_except(Some(index));
            self.adapter.focus_chip_trailing_action_at_index(index);
        } else {
            debug!("removed trailing chip at {}; no successor to focus", index);
            self.remove_focus_from_chips_except(None);
        }
    }

    /// Move focus in response to `key` pressed on `chip_id`'s `source` action.
    ///
    /// Keys other than the arrows, Home and End are ignored, as is any move
    /// that would leave the row (no wrapping).
    pub fn handle_chip_navigation(&mut self, chip_id: &str, key: &str, source: EventSource) {
        let key = match key.parse::<NavigationKey>() {
            Ok(key) => key,
            Err(e) => {
                debug!("ignoring key: {}", e);
                return;
            }
        };
        let Some(index) = self.adapter.get_index_of_chip_by_id(chip_id) else {
            debug!("navigation from unknown chip {:?}", chip_id);
            return;
        };
        let count = self.adapter.get_chip_list_count();
        let is_rtl = self.adapter.is_rtl();

        let Some((target, action)) = navigation_target(index, count, key, source, is_rtl) else {
            debug!("{} from chip {} of {} leaves the row", key, index, count);
            return;
        };

        self.remove_focus_from_chips_except(Some(target));
        match action {
            ChipAction::Primary => self.adapter.focus_chip_primary_action_at_index(target),
            ChipAction::Trailing => self.adapter.focus_chip_trailing_action_at_index(target),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn is_choice(&self) -> bool {
        self.adapter.has_class(css_classes::CHOICE)
    }

    fn is_filter(&self) -> bool {
        self.adapter.has_class(css_classes::FILTER)
    }

    fn select_chip(&mut self, chip_id: &str, should_notify_clients: bool) {
        if self.is_selected(chip_id) {
            return;
        }
        let is_choice = self.is_choice();
        if !is_choice && !self.is_filter() {
            debug!("chip set is neither choice nor filter; {:?} not selected", chip_id);
            return;
        }
        let Some(index) = self.adapter.get_index_of_chip_by_id(chip_id) else {
            debug!("select of unknown chip {:?}", chip_id);
            return;
        };

        if is_choice {
            for previous in std::mem::take(&mut self.selected_chip_ids) {
                if let Some(previous_index) = self.adapter.get_index_of_chip_by_id(&previous) {
                    self.adapter
                        .select_chip_at_index(previous_index, false, should_notify_clients);
                }
            }
        }

        self.selected_chip_ids.push(chip_id.to_string());
        self.adapter
            .select_chip_at_index(index, true, should_notify_clients);
    }

    fn deselect_chip(&mut self, chip_id: &str, should_notify_clients: bool) {
        let Some(pos) = self.selected_chip_ids.iter().position(|id| id == chip_id) else {
            return;
        };
        self.selected_chip_ids.remove(pos);
        if let Some(index) = self.adapter.get_index_of_chip_by_id(chip_id) {
            self.adapter
                .select_chip_at_index(index, false, should_notify_clients);
        }
    }

    /// `None` sweeps every chip.
    fn remove_focus_from_chips_except(&mut self, keep: Option<usize>) {
        let count = self.adapter.get_chip_list_count();
        for i in (0..count).filter(|&i| Some(i) != keep) {
            self.adapter.remove_focus_from_chip_at_index(i);
        }
    }
}

/// Where focus lands when `key` is pressed on chip `index` of `count`.
///
/// Returns `None` when the move would fall outside `[0, count)`.
pub fn navigation_target(
    index: usize,
    count: usize,
    key: NavigationKey,
    source: EventSource,
    is_rtl: bool,
) -> Option<(usize, ChipAction)> {
    // In RTL the visual left is the logical next chip.
    let moves_left = match key {
        NavigationKey::ArrowLeft => !is_rtl,
        NavigationKey::ArrowRight => is_rtl,
        _ => false,
    };

    let target = match key {
        NavigationKey::Home => Some(0),
        NavigationKey::End => count.checked_sub(1),
        NavigationKey::ArrowUp => index.checked_sub(1),
        NavigationKey::ArrowDown => index.checked_add(1),
        NavigationKey::ArrowLeft | NavigationKey::ArrowRight if moves_left => {
            index.checked_sub(1)
        }
        NavigationKey::ArrowLeft | NavigationKey::ArrowRight => index.checked_add(1),
    }
    .filter(|&target| target < count)?;

    let action = match key {
        NavigationKey::Home | NavigationKey::End => ChipAction::Primary,
        _ if key.jumps_chips() => match source {
            EventSource::Trailing => ChipAction::Trailing,
            EventSource::Primary | EventSource::None => ChipAction::Primary,
        },
        _ if moves_left => ChipAction::Trailing,
        _ => ChipAction::Primary,
    };

    Some((target, action))
}
