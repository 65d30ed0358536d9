// Tyrannus - panel UI demo in the terminal
//
// Architecture:
// - ui: host-agnostic panel engine (panels, scrolling, nav bar, tabs, screen)
// - host: ratatui canvas + crossterm input driving a demo screen
// - logging: tracing output captured in memory so it never garbles the screen

use anyhow::Result;
use clap::Parser;
use tyrannus_ui::cli::{self, Cli};
use tyrannus_ui::config::Config;
use tyrannus_ui::host;
use tyrannus_ui::logging::{self, LogBuffer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands first (config --show, --path, --reset)
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::load()?.with_fps(cli.fps);

    // Logs go to the in-memory buffer (shown in the Logs tab) and,
    // when enabled, to rotating JSON files. The guard flushes on drop.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, log_buffer.clone());

    tracing::info!(fps = config.fps, "starting tyrannus {}", tyrannus_ui::config::VERSION);

    host::run(&config, log_buffer)
}
