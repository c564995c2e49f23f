use std::collections::HashSet;

use chip_set::constants::css_classes;
use chip_set::ChipSetAdapter;

/// One mutating call made against the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RemoveChip(usize),
    SelectChip {
        index: usize,
        selected: bool,
        notify: bool,
    },
    FocusPrimary(usize),
    FocusTrailing(usize),
    RemoveFocus(usize),
}

/// Adapter backed by a plain id list that records every mutating call.
///
/// `remove_chip_at_index` really removes the id, so lookups and the chip
/// count reflect the post-removal row.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub chip_ids: Vec<String>,
    pub classes: HashSet<String>,
    pub rtl: bool,
    pub calls: Vec<Call>,
}

impl RecordingAdapter {
    pub fn new(chip_ids: &[&str]) -> Self {
        Self {
            chip_ids: chip_ids.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn choice(chip_ids: &[&str]) -> Self {
        Self::new(chip_ids).with_class(css_classes::CHOICE)
    }

    pub fn filter(chip_ids: &[&str]) -> Self {
        Self::new(chip_ids).with_class(css_classes::FILTER)
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.classes.insert(class_name.to_string());
        self
    }

    pub fn rtl(mut self) -> Self {
        self.rtl = true;
        self
    }

    pub fn select_calls(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::SelectChip { .. }))
            .collect()
    }

    pub fn focus_calls(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::FocusPrimary(_) | Call::FocusTrailing(_)))
            .collect()
    }

    pub fn removed_focus(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::RemoveFocus(i) => Some(*i),
                _ => None,
            })
            .collect()
    }
}

impl ChipSetAdapter for RecordingAdapter {
    fn has_class(&self, class_name: &str) -> bool {
        self.classes.contains(class_name)
    }

    fn remove_chip_at_index(&mut self, index: usize) {
        self.calls.push(Call::RemoveChip(index));
        if index < self.chip_ids.len() {
            self.chip_ids.remove(index);
        }
    }

    fn select_chip_at_index(&mut self, index: usize, selected: bool, should_notify_clients: bool) {
        self.calls.push(Call::SelectChip {
            index,
            selected,
            notify: should_notify_clients,
        });
    }

    fn focus_chip_primary_action_at_index(&mut self, index: usize) {
        self.calls.push(Call::FocusPrimary(index));
    }

    fn focus_chip_trailing_action_at_index(&mut self, index: usize) {
        self.calls.push(Call::FocusTrailing(index));
    }

    fn get_index_of_chip_by_id(&self, chip_id: &str) -> Option<usize> {
        self.chip_ids.iter().position(|id| id == chip_id)
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn get_chip_list_count(&self) -> usize {
        self.chip_ids.len()
    }

    fn remove_focus_from_chip_at_index(&mut self, index: usize) {
        self.calls.push(Call::RemoveFocus(index));
    }
}

pub fn select(index: usize, selected: bool, notify: bool) -> Call {
    Call::SelectChip {
        index,
        selected,
        notify,
    }
}
