//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be drawn and hit-tested implements
//! `Element`. No element inherits from a host widget type; a host adapter
//! forwards its frame and input callbacks into these methods.

use super::interactive::{Handled, MouseButton};
use crate::ui::draw::DrawContext;
use crate::ui::geometry::{Point, Rect};

/// Dispatch tag carried by every element
///
/// Containers read this instead of testing concrete types: only
/// `Scrollable` elements receive drag and release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capability {
    #[default]
    Plain,
    Scrollable,
}

impl Capability {
    pub fn receives_drags(self) -> bool {
        self == Capability::Scrollable
    }
}

/// Base trait for all UI components
///
/// The minimum contract is geometry plus `render`; every input handler
/// defaults to [`Handled::No`].
///
/// # Example
///
/// ```ignore
/// struct Swatch {
///     bounds: Rect,
///     color: Argb,
/// }
///
/// impl Element for Swatch {
///     fn bounds(&self) -> Rect {
///         self.bounds
///     }
///
///     fn set_bounds(&mut self, bounds: Rect) {
///         self.bounds = bounds;
///     }
///
///     fn render(&mut self, ctx: &mut dyn DrawContext, _mouse: Point, _delta: f32) {
///         ctx.fill(self.bounds, self.color);
///     }
/// }
/// ```
pub trait Element {
    /// Outer rectangle in absolute coordinates
    fn bounds(&self) -> Rect;

    /// Reposition/resize; derived state (content area, spans) follows
    fn set_bounds(&mut self, bounds: Rect);

    /// Draw one frame
    ///
    /// # Arguments
    ///
    /// * `ctx` - Host drawing handle
    /// * `mouse` - Current pointer position
    /// * `delta` - Frame delta in host ticks
    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32);

    fn is_mouse_over(&self, mouse: Point) -> bool {
        self.bounds().contains(mouse)
    }

    fn mouse_clicked(&mut self, _mouse: Point, _button: MouseButton) -> Handled {
        Handled::No
    }

    fn mouse_dragged(
        &mut self,
        _mouse: Point,
        _button: MouseButton,
        _dx: f64,
        _dy: f64,
    ) -> Handled {
        Handled::No
    }

    fn mouse_released(&mut self, _mouse: Point, _button: MouseButton) -> Handled {
        Handled::No
    }

    /// Wheel input already known to be over this element
    fn handle_scrolling(&mut self, _horizontal: f64, _vertical: f64) -> Handled {
        Handled::No
    }

    fn capability(&self) -> Capability {
        Capability::Plain
    }

    /// Shift by an offset (used when parenting relative coordinates)
    fn offset_by(&mut self, dx: i32, dy: i32) {
        let bounds = self.bounds();
        self.set_bounds(bounds.translated(dx, dy));
    }
}
