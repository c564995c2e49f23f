//! Chip set controller — selection, keyboard navigation and removal logic for
//! a row of selectable, removable chips.
//!
//! The controller never touches a rendering surface directly. Hosts implement
//! [`ChipSetAdapter`] and hand it to a [`ChipSetFoundation`], which owns the
//! selection set and turns user intents into adapter calls.

pub mod adapter;
pub mod constants;
pub mod error;
pub mod event;
pub mod foundation;

pub use adapter::ChipSetAdapter;
pub use error::ChipSetError;
pub use event::{ChipAction, EventSource, NavigationKey};
pub use foundation::ChipSetFoundation;
