//! ChipSetAdapter trait — the host surface the controller drives.
//!
//! Every method has a no-op default, so an adapter that only cares about a
//! few operations is still a complete one.

/// The operations a host UI surface exposes to [`crate::ChipSetFoundation`].
///
/// Indices refer to the host's current chip order. Queries take `&self`,
/// mutations take `&mut self`.
pub trait ChipSetAdapter {
    /// Whether the chip-set root carries `class_name`.
    /// Used to derive choice/filter mode on every call.
    fn has_class(&self, _class_name: &str) -> bool {
        false
    }

    /// Remove the chip at `index` from the host's list.
    fn remove_chip_at_index(&mut self, _index: usize) {}

    /// Set the selected state of the chip at `index`.
    /// `should_notify_clients` is false when the change mirrors state the
    /// host already reported, so it must not be re-announced.
    fn select_chip_at_index(&mut self, _index: usize, _selected: bool, _should_notify_clients: bool) {}

    fn focus_chip_primary_action_at_index(&mut self, _index: usize) {}

    fn focus_chip_trailing_action_at_index(&mut self, _index: usize) {}

    /// Position of `chip_id` in the host's list, `None` if absent.
    fn get_index_of_chip_by_id(&self, _chip_id: &str) -> Option<usize> {
        None
    }

    fn is_rtl(&self) -> bool {
        false
    }

    fn get_chip_list_count(&self) -> usize {
        0
    }

    fn remove_focus_from_chip_at_index(&mut self, _index: usize) {}
}

/// Adapter with every operation left at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdapter;

impl ChipSetAdapter for NoopAdapter {}
