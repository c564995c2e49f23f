//! ChipRow — the terminal host surface behind the chip-set controller.
//!
//! Holds the chips the row renders, the classes that decide choice/filter
//! behaviour, and the selection notifications waiting to be shown.

use std::collections::HashSet;

use chip_set::{ChipAction, ChipSetAdapter};
use tracing::info;

use crate::config::ChipSetMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub id: String,
    pub label: String,
    pub selected: bool,
    /// Which part of the chip holds focus, if any.
    pub focus: Option<ChipAction>,
}

impl Chip {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            selected: false,
            focus: None,
        }
    }
}

/// Emitted when the controller changes a chip's selection and asks for
/// clients to be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub chip_id: String,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct ChipRow {
    chips: Vec<Chip>,
    classes: HashSet<String>,
    rtl: bool,
    notifications: Vec<SelectionChanged>,
}

impl ChipRow {
    pub fn new(chips: Vec<Chip>) -> Self {
        Self {
            chips,
            ..Self::default()
        }
    }

    /// Build a row from display labels, deriving stable ids from them.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut taken = HashSet::new();
        let chips = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                let id = unique_chip_id(label, &mut taken);
                Chip::new(id, label)
            })
            .collect();
        Self::new(chips)
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    /// Swap the class that decides selection behaviour.
    pub fn set_mode(&mut self, mode: ChipSetMode) {
        self.classes.clear();
        if let Some(class_name) = mode.class_name() {
            self.classes.insert(class_name.to_string());
        }
    }

    pub fn mode(&self) -> ChipSetMode {
        [ChipSetMode::Choice, ChipSetMode::Filter]
            .into_iter()
            .find(|m| m.class_name().is_some_and(|c| self.classes.contains(c)))
            .unwrap_or(ChipSetMode::Plain)
    }

    /// The chip holding focus and which of its actions has it.
    pub fn focused(&self) -> Option<(&Chip, ChipAction)> {
        self.chips
            .iter()
            .find_map(|chip| chip.focus.map(|action| (chip, action)))
    }

    /// Put focus on `index` without going through the controller, e.g. on
    /// startup or after the focused chip disappeared.
    pub fn focus(&mut self, index: usize, action: ChipAction) {
        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.focus = (i == index).then_some(action);
        }
    }

    pub fn drain_notifications(&mut self) -> Vec<SelectionChanged> {
        std::mem::take(&mut self.notifications)
    }
}

impl ChipSetAdapter for ChipRow {
    fn has_class(&self, class_name: &str) -> bool {
        self.classes.contains(class_name)
    }

    fn remove_chip_at_index(&mut self, index: usize) {
        if index < self.chips.len() {
            let chip = self.chips.remove(index);
            info!("removed chip {:?}", chip.id);
        }
    }

    fn select_chip_at_index(&mut self, index: usize, selected: bool, should_notify_clients: bool) {
        let Some(chip) = self.chips.get_mut(index) else {
            return;
        };
        chip.selected = selected;
        if should_notify_clients {
            self.notifications.push(SelectionChanged {
                chip_id: chip.id.clone(),
                selected,
            });
        }
    }

    fn focus_chip_primary_action_at_index(&mut self, index: usize) {
        if let Some(chip) = self.chips.get_mut(index) {
            chip.focus = Some(ChipAction::Primary);
        }
    }

    fn focus_chip_trailing_action_at_index(&mut self, index: usize) {
        if let Some(chip) = self.chips.get_mut(index) {
            chip.focus = Some(ChipAction::Trailing);
        }
    }

    fn get_index_of_chip_by_id(&self, chip_id: &str) -> Option<usize> {
        self.chips.iter().position(|chip| chip.id == chip_id)
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn get_chip_list_count(&self) -> usize {
        self.chips.len()
    }

    fn remove_focus_from_chip_at_index(&mut self, index: usize) {
        if let Some(chip) = self.chips.get_mut(index) {
            chip.focus = None;
        }
    }
}

/// Lowercase alphanumeric slug of `label`, suffixed until unused.
fn unique_chip_id(label: &str, taken: &mut HashSet<String>) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    let base = if slug.is_empty() { "chip" } else { slug };

    let mut id = base.to_string();
    let mut n = 2;
    while !taken.insert(id.clone()) {
        id = format!("{}-{}", base, n);
        n += 1;
    }
    id
}
