// Tyrannus UI - retained-mode panels, tabs and scrollable regions
//
// The panel engine in `ui` is host-agnostic. `host` adapts it to a terminal
// (ratatui + crossterm); `config`, `logging` and `cli` back the demo binary.

pub mod cli;
pub mod config;
pub mod host;
pub mod logging;
pub mod ui;
