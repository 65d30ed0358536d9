//! Content hook for scrollable panels
//!
//! A [`ScrollablePanel`](crate::ui::scrollable_panel::ScrollablePanel)
//! owns the scroll state, scrollbar and clipping; what it scrolls is
//! supplied by a `ScrollContent` implementation.

use super::interactive::{Handled, MouseButton};
use crate::ui::draw::DrawContext;
use crate::ui::error::Result;
use crate::ui::geometry::{Point, Rect};

/// What a content hook sees of its panel for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollView {
    /// Visible content rectangle (already clipped to)
    pub viewport: Rect,
    /// Width usable by content, excluding the scrollbar gutter
    pub inner_width: i32,
    /// Current scroll offset, `0 ≤ offset ≤ max_scroll`
    pub offset: f64,
}

impl ScrollView {
    /// Y coordinate of the content's first row after scrolling
    pub fn top(&self) -> i32 {
        self.viewport.y - self.offset as i32
    }

    /// Whether a content row at absolute `y` with height `h` intersects
    /// the viewport
    pub fn is_visible(&self, y: i32, h: i32) -> bool {
        y + h > self.viewport.y && y < self.viewport.bottom()
    }
}

/// Trait for content rendered inside a scrollable panel
///
/// # Example
///
/// ```ignore
/// struct Lines(Vec<String>);
///
/// impl ScrollContent for Lines {
///     fn measure(&mut self, _width: i32) -> Option<i32> {
///         Some(self.0.len() as i32 * 9)
///     }
///
///     fn render(&mut self, ctx: &mut dyn DrawContext, view: ScrollView, _mouse: Point, _delta: f32) -> Result<()> {
///         let mut y = view.top();
///         for line in &self.0 {
///             ctx.draw_text(line, view.viewport.x, y, Argb::WHITE, true);
///             y += 9;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait ScrollContent {
    /// Draw the content; the viewport clip is active for the whole call
    fn render(
        &mut self,
        ctx: &mut dyn DrawContext,
        view: ScrollView,
        mouse: Point,
        delta: f32,
    ) -> Result<()>;

    /// Total content height for the given usable width.
    ///
    /// `None` means the owner sets the height explicitly through
    /// `ScrollablePanel::set_content_height`.
    fn measure(&mut self, _inner_width: i32) -> Option<i32> {
        None
    }

    /// Click inside the viewport (never on the scrollbar)
    fn mouse_clicked(&mut self, _view: ScrollView, _mouse: Point, _button: MouseButton) -> Handled {
        Handled::No
    }
}
