// Host module - runs a `Screen` in the terminal
//
// This module owns everything terminal-specific:
// - Terminal initialization and cleanup
// - Frame loop (fixed frame rate, input polling)
// - Adapting ratatui buffers and crossterm events to the panel engine

pub mod canvas;
pub mod demo;
pub mod input;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::ui::screen::Screen;
use anyhow::{Context, Result};
use canvas::{BufferCanvas, CellMetrics};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::Pointer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Animation steps are tuned for one step per 50 ms tick
const TICK: Duration = Duration::from_millis(50);
/// Upper bound on one frame's delta so a stall does not jump animations
const MAX_DELTA: f32 = 4.0;

/// Elapsed time expressed in ticks
pub fn frame_delta(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / TICK.as_secs_f32()).clamp(0.0, MAX_DELTA)
}

/// What a key press asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Select the tab at this nav position
    SelectTab(usize),
    None,
}

pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(c @ '1'..='9') => KeyAction::SelectTab(c as usize - '1' as usize),
        _ => KeyAction::None,
    }
}

/// Run the demo screen until the user quits
///
/// This function sets up the terminal, runs the frame loop, and restores
/// the terminal when done, whether or not the loop failed.
pub fn run(config: &Config, log_buffer: LogBuffer) -> Result<()> {
    let screen = demo::build_screen(config, Rc::new(CellMetrics), log_buffer)
        .context("Failed to build demo screen")?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_frame_loop(&mut terminal, screen, config.frame_duration());

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main frame loop
///
/// Each iteration draws one frame, then handles input until the next frame
/// is due. Resizes rebuild the screen's panels for the new size.
fn run_frame_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut screen: Screen,
    frame: Duration,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    screen.init(size.width as i32, size.height as i32);

    let mut pointer = Pointer::default();
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let delta = frame_delta(now - last_frame);
        last_frame = now;

        terminal
            .draw(|f| {
                let mut canvas = BufferCanvas::new(f.buffer_mut());
                screen.render(&mut canvas, pointer.position(), delta);
                if !canvas.is_balanced() {
                    tracing::warn!("frame ended with unbalanced clip or transform state");
                }
            })
            .context("Failed to draw terminal")?;

        let deadline = now + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("Failed to poll input")? {
                break;
            }
            match event::read().context("Failed to read input")? {
                Event::Key(key) => match key_action(key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::SelectTab(index) => {
                        if let Some(id) = demo::TAB_IDS.get(index) {
                            screen.select_tab(id);
                        }
                    }
                    KeyAction::None => {}
                },
                Event::Mouse(mouse) => {
                    pointer.dispatch(&mut screen, mouse);
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                    screen.init(width as i32, height as i32);
                }
                _ => {}
            }
        }
    }
}
