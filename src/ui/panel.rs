//! Panel - the rectangular composition unit
//!
//! A panel owns its geometry, an optional title band, a hover animation
//! and an ordered list of child elements. Specialised panels (scrollable,
//! nav bar, the demo's attribute sheet) embed a `Panel` and call its
//! chrome/children helpers instead of inheriting from it.
//!
//! Frame order is fixed: hover update, chrome (background, border, header),
//! the owner's own contents, then children in registration order.

use crate::ui::animation::Ramp;
use crate::ui::color::{glow, Argb};
use crate::ui::draw::{outer_ring, outline, DrawContext, Metrics, Transform, TransformGuard};
use crate::ui::geometry::{Point, Rect};
use crate::ui::traits::{Element, Handled, MouseButton};

pub const BACKGROUND: Argb = Argb(0xFF1A_1A1A);
pub const BACKGROUND_HOVER: Argb = Argb(0xFF22_2222);
pub const BORDER: Argb = Argb(0xFF42_4242);
pub const BORDER_HIGHLIGHT: Argb = Argb(0xFF6D_6D6D);
pub const CORNER: Argb = Argb(0xFF4A_4A4A);
pub const HEADER_TEXT: Argb = Argb(0xFFFF_D700);
pub const HEADER_BG: Argb = Argb(0xFF21_2121);
pub const HEADER_BG_HOVER: Argb = Argb(0xFF2A_2A2A);

/// Hover animation step per frame (fixed, not scaled by delta)
pub const HOVER_STEP: f32 = 0.1;

/// Per-panel presentation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    /// Inset applied before deriving the content rectangle
    pub padding: i32,
    /// Show the title band
    pub draw_header: bool,
    /// Show border, corner accents and hover glow
    pub draw_border: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            padding: 10,
            draw_header: true,
            draw_border: true,
        }
    }
}

/// A titled, hover-animated rectangle holding child elements
pub struct Panel {
    bounds: Rect,
    title: Option<String>,
    style: PanelStyle,
    metrics: Metrics,
    hover: Ramp,
    children: Vec<Box<dyn Element>>,
}

impl Panel {
    pub fn new(bounds: Rect, title: Option<String>, metrics: Metrics) -> Self {
        Self {
            bounds,
            title,
            style: PanelStyle::default(),
            metrics,
            hover: Ramp::new(HOVER_STEP),
            children: Vec::new(),
        }
    }

    pub fn titled(bounds: Rect, title: impl Into<String>, metrics: Metrics) -> Self {
        Self::new(bounds, Some(title.into()), metrics)
    }

    pub fn with_style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn style(&self) -> PanelStyle {
        self.style
    }

    pub fn set_padding(&mut self, padding: i32) {
        self.style.padding = padding.max(0);
    }

    pub fn set_draw_header(&mut self, draw_header: bool) {
        self.style.draw_header = draw_header;
    }

    pub fn set_draw_border(&mut self, draw_border: bool) {
        self.style.draw_border = draw_border;
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Current hover amount in [0, 1]
    pub fn hover(&self) -> f32 {
        self.hover.value()
    }

    /// Height of the title band (zero when hidden)
    pub fn header_height(&self) -> i32 {
        if self.style.draw_header {
            let pad = self.style.padding.max(0);
            self.metrics.font_height().saturating_add(pad.saturating_mul(2))
        } else {
            0
        }
    }

    /// Content rectangle, derived from the current geometry and style.
    ///
    /// Always lies within `bounds`, however large the padding.
    pub fn content_rect(&self) -> Rect {
        let pad = self.style.padding.max(0);
        let header = self.header_height();
        let top = header.saturating_add(if self.style.draw_header { pad } else { 0 });
        self.bounds.inset(pad, top, pad, pad)
    }

    /// Add a child positioned relative to the panel origin
    pub fn add_child(&mut self, mut child: Box<dyn Element>) -> usize {
        child.offset_by(self.bounds.x, self.bounds.y);
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    /// Advance the hover animation by one frame
    pub fn update_hover(&mut self, mouse: Point) -> f32 {
        let over = self.is_mouse_over(mouse);
        self.hover.update(over)
    }

    /// Background, border and header
    pub fn draw_chrome(&self, ctx: &mut dyn DrawContext) {
        let hover = self.hover.value();
        let b = self.bounds;

        ctx.fill(b, BACKGROUND.lerp(BACKGROUND_HOVER, hover));

        if self.style.draw_border {
            outline(ctx, b, BORDER.lerp(BORDER_HIGHLIGHT, hover));

            let corner = CORNER.lerp(BORDER_HIGHLIGHT, hover);
            ctx.fill(Rect::new(b.x + 1, b.y + 1, 2, 2), corner);
            ctx.fill(Rect::new(b.right() - 3, b.y + 1, 2, 2), corner);
            ctx.fill(Rect::new(b.x + 1, b.bottom() - 3, 2, 2), corner);
            ctx.fill(Rect::new(b.right() - 3, b.bottom() - 3, 2, 2), corner);

            if hover > 0.0 {
                outer_ring(ctx, b, glow(hover, 40.0));
            }
        }

        if self.style.draw_header {
            if let Some(title) = &self.title {
                self.draw_header(ctx, title, hover);
            }
        }
    }

    fn draw_header(&self, ctx: &mut dyn DrawContext, title: &str, hover: f32) {
        let b = self.bounds;
        let pad = self.style.padding.clamp(0, b.height);
        let font = self.metrics.font_height();
        let header = self.header_height().min(b.height);

        ctx.fill(
            Rect::new(b.x + 1, b.y + 1, b.width - 2, header - 1),
            HEADER_BG.lerp(HEADER_BG_HOVER, hover),
        );

        let title_width = self.metrics.text_width(title);
        let tx = b.x + (b.width - title_width) / 2;
        let ty = b.y + pad;
        let color = HEADER_TEXT.lerp(Argb::WHITE, hover * 0.3);
        let scale = 1.0 + 0.05 * hover;

        {
            let pivot_x = tx as f32 + title_width as f32 / 2.0;
            let pivot_y = ty as f32 + font as f32 / 2.0;
            let mut scaled = TransformGuard::new(ctx, Transform::scale_about(pivot_x, pivot_y, scale));
            scaled.draw_text(title, tx, ty, color, true);
        }

        let divider_pad = self.style.padding.clamp(0, b.width);
        gradient_divider(
            ctx,
            b.x + divider_pad,
            b.y + header + 1,
            b.width.saturating_sub(divider_pad.saturating_mul(2)),
            hover,
        );
    }

    /// Render children in registration order
    pub fn render_children(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        for child in &mut self.children {
            child.render(ctx, mouse, delta);
        }
    }

    /// Offer a click to children in order; the first taker wins.
    ///
    /// Nothing is offered when the pointer is outside the panel.
    pub fn click_children(&mut self, mouse: Point, button: MouseButton) -> Handled {
        if !self.is_mouse_over(mouse) {
            return Handled::No;
        }
        for child in &mut self.children {
            if child.mouse_clicked(mouse, button).was_handled() {
                return Handled::Yes;
            }
        }
        Handled::No
    }
}

impl Element for Panel {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Children move with the panel
    fn set_bounds(&mut self, bounds: Rect) {
        let dx = bounds.x - self.bounds.x;
        let dy = bounds.y - self.bounds.y;
        self.bounds = bounds;
        if dx != 0 || dy != 0 {
            for child in &mut self.children {
                child.offset_by(dx, dy);
            }
        }
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        self.update_hover(mouse);
        self.draw_chrome(ctx);
        self.render_children(ctx, mouse, delta);
    }

    fn mouse_clicked(&mut self, mouse: Point, button: MouseButton) -> Handled {
        self.click_children(mouse, button)
    }
}

/// A one-unit line fading out toward both ends, tinted gold by `hover`
pub fn gradient_divider(ctx: &mut dyn DrawContext, x: i32, y: i32, width: i32, hover: f32) {
    let segments = width / 2;
    if segments <= 0 {
        return;
    }
    let segment_width = width / segments;
    let (r, g) = if hover > 0.0 {
        (
            0x66 + ((0xA0 - 0x66) as f32 * hover) as u8,
            0x66 + ((0x80 - 0x66) as f32 * hover) as u8,
        )
    } else {
        (0x66, 0x66)
    };

    for i in 0..segments {
        let ratio = i as f32 / segments as f32;
        let edge = ratio.min(1.0 - ratio) * 2.0;
        let strength = edge + (1.0 - edge) * 0.3 * hover;
        let alpha = (strength.clamp(0.0, 1.0) * 255.0) as u8;
        ctx.fill(
            Rect::new(x + i * segment_width, y, segment_width, 1),
            Argb::from_rgba(r, g, 0x66, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{metrics, Op, RecordingCanvas};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Child that records clicks and claims them when inside its bounds
    struct Probe {
        bounds: Rect,
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Element for Probe {
        fn bounds(&self) -> Rect {
            self.bounds
        }

        fn set_bounds(&mut self, bounds: Rect) {
            self.bounds = bounds;
        }

        fn render(&mut self, ctx: &mut dyn DrawContext, _mouse: Point, _delta: f32) {
            ctx.draw_text(self.name, self.bounds.x, self.bounds.y, Argb::WHITE, false);
        }

        fn mouse_clicked(&mut self, mouse: Point, _button: MouseButton) -> Handled {
            if self.bounds.contains(mouse) {
                self.log.borrow_mut().push(self.name);
                Handled::Yes
            } else {
                Handled::No
            }
        }
    }

    fn panel() -> Panel {
        Panel::titled(Rect::new(100, 100, 200, 150), "Stats", metrics())
    }

    #[test]
    fn test_content_rect_with_header() {
        let p = panel();
        // header = 9 + 2*10 = 29, content starts 29 + 10 below the top
        assert_eq!(p.header_height(), 29);
        assert_eq!(p.content_rect(), Rect::new(110, 139, 180, 101));
    }

    #[test]
    fn test_content_rect_follows_style_and_geometry() {
        let mut p = panel();
        p.set_draw_header(false);
        assert_eq!(p.content_rect(), Rect::new(110, 110, 180, 130));

        p.set_padding(0);
        assert_eq!(p.content_rect(), p.bounds());

        p.set_bounds(Rect::new(0, 0, 50, 50));
        assert_eq!(p.content_rect(), Rect::new(0, 0, 50, 50));
    }

    #[test]
    fn test_hover_ramps_in_fixed_steps_regardless_of_delta() {
        let mut p = panel();
        let mut canvas = RecordingCanvas::default();
        let inside = Point::new(150.0, 150.0);

        p.render(&mut canvas, inside, 10.0);
        assert!((p.hover() - 0.1).abs() < 1e-6);

        for _ in 0..20 {
            p.render(&mut canvas, inside, 0.01);
        }
        assert_eq!(p.hover(), 1.0);

        p.render(&mut canvas, Point::new(0.0, 0.0), 1.0);
        assert!((p.hover() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_hidden_border_skips_glow_and_corners() {
        let mut p = panel().with_style(PanelStyle {
            padding: 10,
            draw_header: false,
            draw_border: false,
        });
        let mut canvas = RecordingCanvas::default();
        p.render(&mut canvas, Point::new(150.0, 150.0), 1.0);
        assert_eq!(canvas.fills().len(), 1);
        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn test_header_title_is_scaled_and_balanced() {
        let mut p = panel();
        let mut canvas = RecordingCanvas::default();
        p.render(&mut canvas, Point::new(150.0, 150.0), 1.0);
        assert_eq!(canvas.texts(), vec!["Stats".to_string()]);
        assert!(canvas.is_balanced());
        assert!(canvas
            .ops
            .iter()
            .any(|op| matches!(op, Op::PushTransform(t) if t.scale > 1.0)));
    }

    #[test]
    fn test_children_are_offset_and_move_with_panel() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = panel();
        p.add_child(Box::new(Probe {
            bounds: Rect::new(10, 40, 20, 20),
            name: "a",
            log: log.clone(),
        }));
        assert_eq!(p.children()[0].bounds(), Rect::new(110, 140, 20, 20));

        p.set_bounds(Rect::new(0, 0, 200, 150));
        assert_eq!(p.children()[0].bounds(), Rect::new(10, 40, 20, 20));
    }

    #[test]
    fn test_click_dispatch_short_circuits_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = panel();
        // A and B overlap on x in [30, 40)
        p.add_child(Box::new(Probe {
            bounds: Rect::new(10, 40, 30, 20),
            name: "a",
            log: log.clone(),
        }));
        p.add_child(Box::new(Probe {
            bounds: Rect::new(30, 40, 30, 20),
            name: "b",
            log: log.clone(),
        }));

        // overlap: only A
        assert_eq!(p.mouse_clicked(Point::new(135.0, 145.0), MouseButton::Left), Handled::Yes);
        assert_eq!(*log.borrow(), vec!["a"]);

        // B only
        log.borrow_mut().clear();
        assert_eq!(p.mouse_clicked(Point::new(155.0, 145.0), MouseButton::Left), Handled::Yes);
        assert_eq!(*log.borrow(), vec!["b"]);

        // neither
        log.borrow_mut().clear();
        assert_eq!(p.mouse_clicked(Point::new(250.0, 200.0), MouseButton::Left), Handled::No);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_clicks_outside_panel_never_reach_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = panel();
        // child hangs outside the panel's bounds
        p.add_child(Box::new(Probe {
            bounds: Rect::new(-50, 0, 40, 40),
            name: "outside",
            log: log.clone(),
        }));
        assert_eq!(p.mouse_clicked(Point::new(60.0, 110.0), MouseButton::Left), Handled::No);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_gradient_divider_ignores_tiny_widths() {
        let mut canvas = RecordingCanvas::default();
        gradient_divider(&mut canvas, 0, 0, 1, 0.5);
        assert!(canvas.ops.is_empty());
        gradient_divider(&mut canvas, 0, 0, 10, 0.5);
        assert_eq!(canvas.fills().len(), 5);
    }

    #[test]
    fn test_huge_padding_collapses_content_inside_bounds() {
        let mut p = Panel::titled(Rect::new(0, 0, 100, 100), "Stats", metrics()).with_style(PanelStyle {
            padding: 1_200_000_000,
            draw_header: true,
            draw_border: true,
        });
        assert_eq!(p.header_height(), i32::MAX);
        let content = p.content_rect();
        assert!(p.bounds().contains_rect(&content));
        assert!(content.is_empty());

        let mut canvas = RecordingCanvas::default();
        p.render(&mut canvas, Point::new(50.0, 50.0), 1.0);
        assert!(canvas.is_balanced());
    }

    proptest! {
        #[test]
        fn content_stays_inside_and_hover_clamped(
            x in -500i32..500,
            y in -500i32..500,
            w in 0i32..400,
            h in 0i32..400,
            padding in 0i32..i32::MAX,
            header in any::<bool>(),
            moves in prop::collection::vec((-600.0f64..600.0, -600.0f64..600.0), 1..40),
        ) {
            let mut p = Panel::titled(Rect::new(x, y, w, h), "t", metrics()).with_style(PanelStyle {
                padding,
                draw_header: header,
                draw_border: true,
            });
            prop_assert!(p.bounds().contains_rect(&p.content_rect()));

            let mut canvas = RecordingCanvas::default();
            for (mx, my) in moves {
                p.render(&mut canvas, Point::new(mx, my), 1.0);
                prop_assert!((0.0..=1.0).contains(&p.hover()));
            }
            prop_assert!(canvas.is_balanced());
        }
    }
}
