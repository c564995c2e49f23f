//! Selection persisted between runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSessionState {
    /// Selected chip ids in selection order.
    #[serde(default)]
    pub selected_chip_ids: Vec<String>,
}

pub fn load_ui_session_state(path: &Path) -> UiSessionState {
    let Ok(content) = std::fs::read_to_string(path) else {
        return UiSessionState::default();
    };
    match serde_json::from_str(&content) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("ignoring unreadable session state {}: {}", path.display(), e);
            UiSessionState::default()
        }
    }
}

pub fn save_ui_session_state(path: &Path, state: &UiSessionState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(state)?)?;
    Ok(())
}
