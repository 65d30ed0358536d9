//! Scrollbar geometry and rendering helper
//!
//! Provides the strip/track geometry and a unified rendering function that
//! works with `ScrollState`, so scrollable panels never duplicate thumb math.

use crate::ui::color::{glow, Argb};
use crate::ui::draw::DrawContext;
use crate::ui::geometry::{Point, Rect};
use crate::ui::scroll::{ScrollState, Track};

const TRACK_ALPHA_BASE: f32 = 25.0;
const TRACK_ALPHA_HOVER: f32 = 55.0;
const THUMB_ALPHA_BASE: f32 = 120.0;
const THUMB_ALPHA_HOVER: f32 = 135.0;
const THUMB_GREY: Argb = Argb(0x0066_6666);
const THUMB_FG: Argb = Argb(0xFFAA_AAAA);
const GRIP: Argb = Argb(0x0099_9999);

/// Scrollbar dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarStyle {
    /// Strip width
    pub width: i32,
    /// Gap between the strip and the panel's right edge
    pub padding: i32,
    /// Smallest thumb length regardless of content size
    pub min_thumb: i32,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            width: 6,
            padding: 2,
            min_thumb: 20,
        }
    }
}

impl ScrollbarStyle {
    /// The strip along the right edge of `panel`, spanning `content` vertically
    pub fn strip(&self, panel: Rect, content: Rect) -> Rect {
        Rect::new(
            panel.right() - self.width - self.padding,
            content.y,
            self.width,
            content.height,
        )
    }

    /// Whether `mouse` grabs the scrollbar. Only present while content overflows.
    pub fn hit(&self, panel: Rect, content: Rect, scroll: &ScrollState, mouse: Point) -> bool {
        scroll.needs_scrollbar() && self.strip(panel, content).contains_inclusive(mouse)
    }

    /// Width left to content once the strip is reserved
    pub fn inner_width(&self, content: Rect) -> i32 {
        (content.width - self.width - self.padding).max(0)
    }
}

/// Track the thumb moves along for a given strip
pub fn track(strip: Rect) -> Track {
    Track::new(strip.y, strip.height)
}

/// Render a vertical scrollbar into `strip`
///
/// Only renders if content exceeds the viewport (uses
/// `scroll.needs_scrollbar()`). `hover` is the scrollbar's own hover
/// amount in [0, 1]; it brightens the track and widens the thumb.
///
/// # Example
///
/// ```ignore
/// // In a panel's render function:
/// let strip = self.scrollbar.strip(self.bounds(), content);
/// render_scrollbar(ctx, strip, &self.scroll, &self.scrollbar, self.scrollbar_hover.value());
/// ```
pub fn render_scrollbar(
    ctx: &mut dyn DrawContext,
    strip: Rect,
    scroll: &ScrollState,
    style: &ScrollbarStyle,
    hover: f32,
) {
    if !scroll.needs_scrollbar() {
        return;
    }
    let hover = hover.clamp(0.0, 1.0);

    let track_alpha = (TRACK_ALPHA_BASE + TRACK_ALPHA_HOVER * hover) as u8;
    ctx.fill(strip, Argb::BLACK.with_alpha(track_alpha));

    let Some(thumb) = scroll.thumb(track(strip), style.min_thumb as f64) else {
        return;
    };

    // Full hover widens the thumb by one unit on each side
    let expansion = hover as i32;
    let x = strip.x - expansion;
    let y = thumb.start as i32;
    let height = thumb.length as i32 + expansion * 2;
    let handle = Rect::new(x, y, strip.width, height);

    if hover > 0.1 {
        let size = (4.0 * hover) as i32;
        ctx.fill(
            Rect::new(x - size, y - size, strip.width + size * 2, height + size * 2),
            glow(hover, 40.0),
        );
    }

    let thumb_alpha = (THUMB_ALPHA_BASE + THUMB_ALPHA_HOVER * hover) as u8;
    ctx.fill(handle, THUMB_GREY.with_alpha(thumb_alpha));
    ctx.fill(handle.inset(1, 1, 1, 1), THUMB_FG.lerp(Argb::WHITE, hover));

    if hover > 0.5 {
        let alpha = (255.0 * (hover - 0.5) * 2.0) as u8;
        let line_y = y + height / 2 - 3;
        for i in 0..3 {
            ctx.fill(
                Rect::new(x + 2, line_y + i * 3, (strip.width - 4).max(0), 1),
                GRIP.with_alpha(alpha),
            );
        }
    }
}
