//! Class names and string constants shared between the controller and hosts.

/// Class names a host reports through `ChipSetAdapter::has_class`.
pub mod css_classes {
    /// At most one chip selected at a time.
    pub const CHOICE: &str = "mdc-chip-set--choice";
    /// Any number of chips selected, each toggled independently.
    pub const FILTER: &str = "mdc-chip-set--filter";
}

// ── Navigation key names ──────────────────────────────────────────────────────

pub const ARROW_LEFT_KEY: &str = "ArrowLeft";
pub const ARROW_RIGHT_KEY: &str = "ArrowRight";
pub const ARROW_UP_KEY: &str = "ArrowUp";
pub const ARROW_DOWN_KEY: &str = "ArrowDown";
pub const HOME_KEY: &str = "Home";
pub const END_KEY: &str = "End";

// ── Event source names ────────────────────────────────────────────────────────

pub const SOURCE_PRIMARY: &str = "PRIMARY";
pub const SOURCE_TRAILING: &str = "TRAILING";
pub const SOURCE_NONE: &str = "NONE";
