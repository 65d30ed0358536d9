//! Terminal input mapped onto screen calls
//!
//! crossterm reports absolute cell positions; drags additionally need the
//! movement since the previous pointer event, which [`Pointer`] tracks.

use crate::ui::geometry::Point;
use crate::ui::screen::Screen;
use crate::ui::traits::{Handled, MouseButton};
use crossterm::event::{MouseButton as TermButton, MouseEvent, MouseEventKind};

/// Wheel notch size in scroll units
const NOTCH: f64 = 1.0;

pub fn map_button(button: TermButton) -> MouseButton {
    match button {
        TermButton::Left => MouseButton::Left,
        TermButton::Right => MouseButton::Right,
        TermButton::Middle => MouseButton::Middle,
    }
}

/// Last known pointer position, used for hover and drag deltas
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    position: Point,
}

impl Default for Pointer {
    fn default() -> Self {
        // off-screen until the first mouse event so nothing starts hovered
        Self {
            position: Point::new(-1.0, -1.0),
        }
    }
}

impl Pointer {
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move to `to`, returning (dx, dy) from the previous position
    fn move_to(&mut self, to: Point) -> (f64, f64) {
        let delta = (to.x - self.position.x, to.y - self.position.y);
        self.position = to;
        delta
    }

    /// Forward one mouse event to `screen`
    pub fn dispatch(&mut self, screen: &mut Screen, event: MouseEvent) -> Handled {
        let at = Point::new(event.column as f64, event.row as f64);

        match event.kind {
            MouseEventKind::Down(button) => {
                self.move_to(at);
                screen.mouse_clicked(at, map_button(button))
            }
            MouseEventKind::Drag(button) => {
                let (dx, dy) = self.move_to(at);
                screen.mouse_dragged(at, map_button(button), dx, dy)
            }
            MouseEventKind::Up(button) => {
                self.move_to(at);
                screen.mouse_released(at, map_button(button))
            }
            MouseEventKind::Moved => {
                self.move_to(at);
                Handled::No
            }
            MouseEventKind::ScrollUp => screen.mouse_scrolled(at, 0.0, NOTCH),
            MouseEventKind::ScrollDown => screen.mouse_scrolled(at, 0.0, -NOTCH),
            MouseEventKind::ScrollLeft => screen.mouse_scrolled(at, NOTCH, 0.0),
            MouseEventKind::ScrollRight => screen.mouse_scrolled(at, -NOTCH, 0.0),
        }
    }
}
