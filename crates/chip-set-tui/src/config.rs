use std::path::{Path, PathBuf};

use chip_set::constants::css_classes;
use serde::{Deserialize, Serialize};

use crate::platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chips: ChipsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipsConfig {
    #[serde(default)]
    pub mode: ChipSetMode,
    /// One chip per label, in display order.
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub rtl: bool,
    /// Re-select the chips that were selected when the app last exited.
    #[serde(default = "default_restore_selection")]
    pub restore_selection: bool,
}

/// How the chip row treats selection. Maps onto the class the host reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChipSetMode {
    Choice,
    #[default]
    Filter,
    /// Chips can be focused and removed but not selected.
    Plain,
}

impl ChipSetMode {
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Choice => Some(css_classes::CHOICE),
            Self::Filter => Some(css_classes::FILTER),
            Self::Plain => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Choice => Self::Filter,
            Self::Filter => Self::Plain,
            Self::Plain => Self::Choice,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Choice => "CHOICE",
            Self::Filter => "FILTER",
            Self::Plain => "PLAIN",
        }
    }
}

impl Default for ChipsConfig {
    fn default() -> Self {
        Self {
            mode: ChipSetMode::default(),
            labels: default_labels(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            rtl: false,
            restore_selection: default_restore_selection(),
        }
    }
}

fn default_labels() -> Vec<String> {
    ["Rust", "Go", "Zig", "OCaml", "Haskell", "Elixir"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_restore_selection() -> bool {
    true
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read `path`, writing a default config there first if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
