//! Scrollable panel
//!
//! Wraps a [`Panel`] with a [`ScrollState`], a scrollbar strip and a
//! clipped content hook. The panel owns all scroll state; containers only
//! forward events, reading [`Capability::Scrollable`] to decide who gets
//! drags and releases.
//!
//! Click routing order is load-bearing: the scrollbar is checked before
//! content and children, so a press on the strip never reaches a widget
//! that happens to sit underneath it.

use crate::ui::animation::Ramp;
use crate::ui::components::scrollbar::{self, render_scrollbar, ScrollbarStyle};
use crate::ui::draw::{ClipGuard, DrawContext, TextMetrics};
use crate::ui::geometry::{Point, Rect};
use crate::ui::panel::Panel;
use crate::ui::scroll::ScrollState;
use crate::ui::traits::{Capability, Element, Handled, MouseButton, ScrollContent, ScrollView};

const SCROLLBAR_HOVER_RISE: f32 = 0.15;
const SCROLLBAR_HOVER_FALL: f32 = 0.1;

/// A panel whose content scrolls vertically inside its content rectangle
pub struct ScrollablePanel<C: ScrollContent> {
    panel: Panel,
    content: C,
    scroll: ScrollState,
    scrollbar: ScrollbarStyle,
    scrollbar_hover: Ramp,
}

impl<C: ScrollContent> ScrollablePanel<C> {
    pub fn new(panel: Panel, content: C) -> Self {
        let mut this = Self {
            panel,
            content,
            scroll: ScrollState::new(),
            scrollbar: ScrollbarStyle::default(),
            scrollbar_hover: Ramp::asymmetric(SCROLLBAR_HOVER_RISE, SCROLLBAR_HOVER_FALL),
        };
        this.sync_viewport();
        this
    }

    pub fn with_scrollbar(mut self, style: ScrollbarStyle) -> Self {
        self.scrollbar = style;
        self
    }

    /// Replace the scroll model (wheel tuning), keeping current dimensions
    pub fn with_scroll(mut self, scroll: ScrollState) -> Self {
        let content_height = self.scroll.content_height();
        self.scroll = scroll;
        self.scroll.set_content_height(content_height);
        self.sync_viewport();
        self
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn max_scroll(&self) -> f64 {
        self.scroll.max_scroll()
    }

    pub fn is_dragging(&self) -> bool {
        self.scroll.is_dragging()
    }

    /// Set the total content height; the offset is re-clamped immediately
    pub fn set_content_height(&mut self, height: i32) {
        self.scroll.set_content_height(height);
    }

    /// Scrollbar hover amount in [0, 1]
    pub fn scrollbar_hover(&self) -> f32 {
        self.scrollbar_hover.value()
    }

    /// What the content hook sees this frame
    pub fn view(&self) -> ScrollView {
        let viewport = self.panel.content_rect();
        ScrollView {
            viewport,
            inner_width: self.scrollbar.inner_width(viewport),
            offset: self.scroll.offset(),
        }
    }

    fn strip(&self) -> Rect {
        self.scrollbar
            .strip(self.panel.bounds(), self.panel.content_rect())
    }

    fn scrollbar_hit(&self, mouse: Point) -> bool {
        self.scrollbar.hit(
                self.panel.bounds(),
                self.panel.content_rect(),
                &self.scroll,
                mouse,
            )
    }

    /// Re-derive the viewport from the panel and let the content re-measure
    fn sync_viewport(&mut self) {
        let viewport = self.panel.content_rect();
        self.scroll.set_viewport(viewport.height);
        if let Some(height) = self.content.measure(self.scrollbar.inner_width(viewport)) {
            self.scroll.set_content_height(height);
        }
    }
}

impl<C: ScrollContent> Element for ScrollablePanel<C> {
    fn bounds(&self) -> Rect {
        self.panel.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.panel.set_bounds(bounds);
        self.sync_viewport();
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        self.panel.update_hover(mouse);
        self.panel.draw_chrome(ctx);

        self.sync_viewport();
        let view = self.view();

        {
            let mut clipped = ClipGuard::new(ctx, view.viewport);
            if let Err(e) = self.content.render(&mut *clipped, view, mouse, delta) {
                tracing::warn!(error = %e, "scrollable content failed to render");
            }
        }

        self.panel.render_children(ctx, mouse, delta);

        if self.scroll.needs_scrollbar() {
            let strip = self.strip();
            let hovered = strip.contains_inclusive(mouse) || self.scroll.is_dragging();
            self.scrollbar_hover.update(hovered);
            render_scrollbar(ctx, strip, &self.scroll, &self.scrollbar, self.scrollbar_hover.value());
        }
    }

    fn mouse_clicked(&mut self, mouse: Point, button: MouseButton) -> Handled {
        if self.scrollbar_hit(mouse) {
            let track = scrollbar::track(self.strip());
            self.scroll.begin_drag(track, mouse.y);
            return Handled::Yes;
        }

        let view = self.view();
        if view.viewport.contains(mouse)
            && self.content.mouse_clicked(view, mouse, button).was_handled()
        {
            return Handled::Yes;
        }

        self.panel.click_children(mouse, button)
    }

    fn mouse_dragged(&mut self, mouse: Point, _button: MouseButton, _dx: f64, _dy: f64) -> Handled {
        let track = scrollbar::track(self.strip());
        Handled::from_bool(self.scroll.drag_to(track, mouse.y))
    }

    fn mouse_released(&mut self, _mouse: Point, _button: MouseButton) -> Handled {
        Handled::from_bool(self.scroll.end_drag())
    }

    fn handle_scrolling(&mut self, _horizontal: f64, vertical: f64) -> Handled {
        Handled::from_bool(self.scroll.wheel(vertical))
    }

    fn capability(&self) -> Capability {
        Capability::Scrollable
    }
}

/// Greedy word wrap by measured width
///
/// Words wider than `max_width` get a line of their own rather than being
/// split.
pub fn wrap_text(metrics: &dyn TextMetrics, text: &str, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if metrics.text_width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::color::Argb;
    use crate::ui::error::{Result, UiError};
    use crate::ui::panel::PanelStyle;
    use crate::ui::testing::{metrics, FixedMetrics, Op, RecordingCanvas};
    use proptest::prelude::*;

    /// Content with a fixed height that can be told to fail
    struct Rows {
        height: i32,
        fail: bool,
        clicks: usize,
    }

    impl Rows {
        fn new(height: i32) -> Self {
            Self {
                height,
                fail: false,
                clicks: 0,
            }
        }
    }

    impl ScrollContent for Rows {
        fn render(&mut self, ctx: &mut dyn DrawContext, view: ScrollView, _mouse: Point, _delta: f32) -> Result<()> {
            ctx.draw_text("row", view.viewport.x, view.top(), Argb::WHITE, false);
            if self.fail {
                return Err(UiError::Render("rows unavailable".into()));
            }
            Ok(())
        }

        fn measure(&mut self, _inner_width: i32) -> Option<i32> {
            Some(self.height)
        }

        fn mouse_clicked(&mut self, _view: ScrollView, _mouse: Point, _button: MouseButton) -> Handled {
            self.clicks += 1;
            Handled::Yes
        }
    }

    /// Panel whose content area is exactly (10, 10, 180, 200)
    fn scrollable(height: i32) -> ScrollablePanel<Rows> {
        let panel = Panel::new(Rect::new(0, 0, 200, 220), None, metrics()).with_style(PanelStyle {
            padding: 10,
            draw_header: false,
            draw_border: true,
        });
        ScrollablePanel::new(panel, Rows::new(height))
    }

    #[test]
    fn test_dimensions_from_content() {
        let sp = scrollable(1000);
        assert_eq!(sp.view().viewport, Rect::new(10, 10, 180, 200));
        assert_eq!(sp.max_scroll(), 800.0);
    }

    #[test]
    fn test_scrollbar_click_at_track_midpoint() {
        let mut sp = scrollable(1000);
        // strip x = 200 - 6 - 2 = 192, track y in [10, 210]
        let handled = sp.mouse_clicked(Point::new(195.0, 110.0), MouseButton::Left);
        assert_eq!(handled, Handled::Yes);
        assert!(sp.is_dragging());
        assert_eq!(sp.offset(), 400.0);
        assert_eq!(sp.content().clicks, 0);
    }

    #[test]
    fn test_drag_overshoot_clamps_and_release_ends_drag() {
        let mut sp = scrollable(1000);
        sp.mouse_clicked(Point::new(195.0, 20.0), MouseButton::Left);

        sp.mouse_dragged(Point::new(195.0, 9000.0), MouseButton::Left, 0.0, 8980.0);
        assert_eq!(sp.offset(), 800.0);
        sp.mouse_dragged(Point::new(195.0, -9000.0), MouseButton::Left, 0.0, -18000.0);
        assert_eq!(sp.offset(), 0.0);

        assert_eq!(sp.mouse_released(Point::new(0.0, 0.0), MouseButton::Left), Handled::Yes);
        assert!(!sp.is_dragging());
        assert_eq!(
            sp.mouse_dragged(Point::new(195.0, 110.0), MouseButton::Left, 0.0, 0.0),
            Handled::No
        );
    }

    #[test]
    fn test_no_scrollbar_when_content_fits() {
        let mut sp = scrollable(150);
        assert_eq!(sp.max_scroll(), 0.0);
        assert_eq!(sp.handle_scrolling(0.0, -1.0), Handled::No);
        // the strip is absent, so the click falls through to content
        sp.mouse_clicked(Point::new(188.0, 110.0), MouseButton::Left);
        assert!(!sp.is_dragging());
        assert_eq!(sp.content().clicks, 1);
    }

    #[test]
    fn test_wheel_scroll_monotone_and_bounded() {
        let mut sp = scrollable(1000);
        let mut last = sp.offset();
        for _ in 0..300 {
            assert_eq!(sp.handle_scrolling(0.0, -1.0), Handled::Yes);
            assert!(sp.offset() >= last);
            assert!(sp.offset() <= 800.0);
            last = sp.offset();
        }
        assert_eq!(last, 800.0);
    }

    #[test]
    fn test_shrinking_content_reclamps() {
        let mut sp = scrollable(1000);
        sp.mouse_clicked(Point::new(195.0, 210.0), MouseButton::Left);
        assert_eq!(sp.offset(), 800.0);
        sp.content_mut().height = 300;
        let mut canvas = RecordingCanvas::default();
        sp.render(&mut canvas, Point::new(0.0, 0.0), 1.0);
        assert_eq!(sp.offset(), 100.0);
    }

    #[test]
    fn test_content_is_clipped_to_viewport() {
        let mut sp = scrollable(1000);
        let mut canvas = RecordingCanvas::default();
        sp.render(&mut canvas, Point::new(50.0, 50.0), 1.0);

        let clip = canvas.ops.iter().position(|op| *op == Op::PushClip(Rect::new(10, 10, 180, 200)));
        let text = canvas.ops.iter().position(|op| matches!(op, Op::Text(s, ..) if s == "row"));
        let pop = canvas.ops.iter().position(|op| *op == Op::PopClip);
        assert!(clip < text && text < pop);
        assert!(canvas.is_balanced());
    }

    #[test]
    fn test_failing_content_still_releases_clip() {
        let mut sp = scrollable(1000);
        sp.content_mut().fail = true;
        let mut canvas = RecordingCanvas::default();
        sp.render(&mut canvas, Point::new(50.0, 50.0), 1.0);
        assert!(canvas.is_balanced());
        // the scrollbar still draws after the failed hook
        assert!(canvas.fills().len() > 1);
    }

    #[test]
    fn test_scrollbar_hover_tracks_strip() {
        let mut sp = scrollable(1000);
        let mut canvas = RecordingCanvas::default();
        sp.render(&mut canvas, Point::new(195.0, 100.0), 1.0);
        assert!((sp.scrollbar_hover() - 0.15).abs() < 1e-6);
        sp.render(&mut canvas, Point::new(50.0, 100.0), 1.0);
        assert!((sp.scrollbar_hover() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_text_greedy() {
        let m = FixedMetrics::default();
        // 6 units per char, 60 = 10 chars per line
        let lines = wrap_text(&m, "the quick brown fox jumps over", 60);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over"]);
        assert!(wrap_text(&m, "   ", 60).is_empty());
        assert_eq!(wrap_text(&m, "extraordinarily long", 30), vec!["extraordinarily", "long"]);
    }

    proptest! {
        #[test]
        fn offset_bounded_under_any_input(
            height in 0i32..3000,
            events in prop::collection::vec((0u8..4, -100.0f64..400.0, -5.0f64..5.0), 1..50),
        ) {
            let mut sp = scrollable(height);
            for (kind, y, wheel) in events {
                let mouse = Point::new(195.0, y);
                match kind {
                    0 => { sp.mouse_clicked(mouse, MouseButton::Left); }
                    1 => { sp.mouse_dragged(mouse, MouseButton::Left, 0.0, 1.0); }
                    2 => { sp.mouse_released(mouse, MouseButton::Left); }
                    _ => { sp.handle_scrolling(0.0, wheel); }
                }
                prop_assert!(sp.offset() >= 0.0);
                prop_assert!(sp.offset() <= sp.max_scroll());
            }
            if height <= 200 {
                prop_assert_eq!(sp.max_scroll(), 0.0);
                prop_assert_eq!(sp.offset(), 0.0);
            }
        }
    }
}
