//! Key, event-source and chip-action types used by navigation.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ARROW_DOWN_KEY, ARROW_LEFT_KEY, ARROW_RIGHT_KEY, ARROW_UP_KEY, END_KEY, HOME_KEY,
    SOURCE_NONE, SOURCE_PRIMARY, SOURCE_TRAILING,
};
use crate::error::ChipSetError;

/// The keys that move focus between chips. Every other key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

impl NavigationKey {
    pub const ALL: [NavigationKey; 6] = [
        NavigationKey::ArrowLeft,
        NavigationKey::ArrowRight,
        NavigationKey::ArrowUp,
        NavigationKey::ArrowDown,
        NavigationKey::Home,
        NavigationKey::End,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowLeft => ARROW_LEFT_KEY,
            Self::ArrowRight => ARROW_RIGHT_KEY,
            Self::ArrowUp => ARROW_UP_KEY,
            Self::ArrowDown => ARROW_DOWN_KEY,
            Self::Home => HOME_KEY,
            Self::End => END_KEY,
        }
    }

    /// Up/Down/Home/End jump between chips; Left/Right move along the row.
    pub fn jumps_chips(self) -> bool {
        matches!(
            self,
            Self::ArrowUp | Self::ArrowDown | Self::Home | Self::End
        )
    }
}

impl FromStr for NavigationKey {
    type Err = ChipSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ChipSetError::UnrecognizedKey(s.to_string()))
    }
}

impl fmt::Display for NavigationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sub-element of a chip originated a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventSource {
    Primary,
    Trailing,
    #[default]
    None,
}

impl EventSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => SOURCE_PRIMARY,
            Self::Trailing => SOURCE_TRAILING,
            Self::None => SOURCE_NONE,
        }
    }
}

impl FromStr for EventSource {
    type Err = ChipSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            SOURCE_PRIMARY => Ok(Self::Primary),
            SOURCE_TRAILING => Ok(Self::Trailing),
            SOURCE_NONE => Ok(Self::None),
            _ => Err(ChipSetError::UnrecognizedSource(s.to_string())),
        }
    }
}

impl From<ChipAction> for EventSource {
    fn from(action: ChipAction) -> Self {
        match action {
            ChipAction::Primary => Self::Primary,
            ChipAction::Trailing => Self::Trailing,
        }
    }
}

/// The two focusable parts of a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipAction {
    /// The chip body.
    Primary,
    /// The trailing affordance, e.g. a remove button.
    Trailing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_key_names_round_trip() {
        for key in NavigationKey::ALL {
            assert_eq!(key.as_str().parse::<NavigationKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        for name in ["Space", " ", "Enter", "arrowleft", "Left", ""] {
            assert_eq!(
                name.parse::<NavigationKey>(),
                Err(ChipSetError::UnrecognizedKey(name.to_string()))
            );
        }
    }

    #[test]
    fn test_jump_keys() {
        assert!(NavigationKey::ArrowUp.jumps_chips());
        assert!(NavigationKey::End.jumps_chips());
        assert!(!NavigationKey::ArrowLeft.jumps_chips());
        assert!(!NavigationKey::ArrowRight.jumps_chips());
    }

    #[test]
    fn test_event_source_parse() {
        assert_eq!("PRIMARY".parse(), Ok(EventSource::Primary));
        assert_eq!("trailing".parse(), Ok(EventSource::Trailing));
        assert_eq!("None".parse(), Ok(EventSource::None));
        assert!(matches!(
            "leading".parse::<EventSource>(),
            Err(ChipSetError::UnrecognizedSource(_))
        ));
    }

    #[test]
    fn test_event_source_from_action() {
        assert_eq!(EventSource::from(ChipAction::Primary), EventSource::Primary);
        assert_eq!(EventSource::from(ChipAction::Trailing), EventSource::Trailing);
    }
}
