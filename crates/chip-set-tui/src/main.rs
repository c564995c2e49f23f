mod app;
mod config;
mod host;
mod keymap;
mod platform;
mod session;
mod theme;
mod widgets;

use std::path::PathBuf;

use chip_set::ChipAction;
use clap::Parser;

use crate::config::{ChipSetMode, Config};
use crate::host::ChipRow;

/// A row of selectable, removable chips in the terminal.
#[derive(Debug, Parser)]
#[command(name = "chips", version)]
struct Args {
    /// Selection behaviour (overrides config).
    #[arg(long, value_enum)]
    mode: Option<ChipSetMode>,
    /// Lay the row out right-to-left.
    #[arg(long)]
    rtl: bool,
    /// Start with nothing selected instead of the last session's selection.
    #[arg(long)]
    no_restore: bool,
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Chip labels (overrides config).
    labels: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("chips.log");
    let session_path = data_dir.join("ui_state.json");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so it can be tailed while the TUI owns the screen.
    eprintln!("chips log: {}", log_path.display());

    tracing::info!("chips starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let loaded = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config unavailable, using defaults: {}", e);
        Config::default()
    });
    if let Some(mode) = args.mode {
        config.chips.mode = mode;
    }
    if args.rtl {
        config.ui.rtl = true;
    }
    if args.no_restore {
        config.ui.restore_selection = false;
    }
    if !args.labels.is_empty() {
        config.chips.labels = args.labels;
    }

    // ── Build the chip row ───────────────────────────────────────────────────
    let mut row = ChipRow::from_labels(config.chips.labels.as_slice());
    row.set_mode(config.chips.mode);
    row.set_rtl(config.ui.rtl);
    if !row.is_empty() {
        row.focus(0, ChipAction::Primary);
    }

    let mut app = app::App::new(row, session_path.clone());
    if config.ui.restore_selection {
        let state = session::load_ui_session_state(&session_path);
        app.restore_selection(&state.selected_chip_ids);
    }

    app.run().await?;

    Ok(())
}
