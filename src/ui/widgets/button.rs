//! Clickable button with hover and press animation

use crate::ui::animation::Ramp;
use crate::ui::color::{glow, Argb};
use crate::ui::draw::{outer_ring, DrawContext, Icon, Metrics, Transform, TransformGuard};
use crate::ui::geometry::{Point, Rect};
use crate::ui::panel::{Panel, PanelStyle};
use crate::ui::traits::{Element, Handled, MouseButton};

const BG: Argb = Argb(0xFF2A_2A2A);
const BG_HOVER: Argb = Argb(0xFF3A_3A3A);
const BG_PRESSED: Argb = Argb(0xFF1A_1A1A);
const BG_DISABLED: Argb = Argb(0xFF1A_1A1A);
const TEXT: Argb = Argb(0xFFAA_AAAA);
const TEXT_HOVER: Argb = Argb(0xFFFF_FFFF);
const TEXT_DISABLED: Argb = Argb(0xFF66_6666);
const SHADOW: Argb = Argb(0x6600_0000);

const PRESS_RISE: f32 = 0.2;
const PRESS_FALL: f32 = 0.1;
const ICON_SIZE: i32 = 16;
const ICON_GAP: i32 = 5;

pub type ClickCallback = Box<dyn FnMut()>;

pub struct Button {
    panel: Panel,
    label: String,
    icon: Option<Icon>,
    enabled: bool,
    pressed: bool,
    press: Ramp,
    scale: f32,
    shadow: bool,
    on_click: Option<ClickCallback>,
}

impl Button {
    pub fn new(bounds: Rect, label: impl Into<String>, metrics: Metrics) -> Self {
        let panel = Panel::new(bounds, None, metrics).with_style(PanelStyle {
            padding: 0,
            draw_header: false,
            draw_border: false,
        });
        Self {
            panel,
            label: label.into(),
            icon: None,
            enabled: true,
            pressed: false,
            press: Ramp::asymmetric(PRESS_RISE, PRESS_FALL),
            scale: 1.0,
            shadow: true,
            on_click: None,
        }
    }

    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn press_amount(&self) -> f32 {
        self.press.value()
    }

    pub fn hover(&self) -> f32 {
        self.panel.hover()
    }

    fn update_animations(&mut self) {
        self.press.update(self.pressed);
        if self.pressed {
            self.scale = (1.0 - self.press.value() * 0.05).max(0.95);
        } else {
            self.scale = (self.scale + 0.1).min(1.0);
        }
    }

    fn background(&self) -> Argb {
        if !self.enabled {
            return BG_DISABLED;
        }
        BG.lerp(BG_HOVER, self.hover())
            .lerp(BG_PRESSED, self.press.value())
    }

    fn text_color(&self) -> Argb {
        if !self.enabled {
            return TEXT_DISABLED;
        }
        TEXT.lerp(TEXT_HOVER, self.hover())
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        let b = self.panel.bounds();
        let metrics = self.panel.metrics();
        let bg = self.background();

        let (cx, cy) = b.center();
        let mut ctx = TransformGuard::new(ctx, Transform::scale_about(cx, cy, self.scale));

        if self.shadow {
            ctx.fill(b.translated(2, 2), SHADOW);
        }
        ctx.fill(b, bg);

        let band = (b.height as f32 * 0.15) as i32;
        if band > 0 {
            ctx.fill(Rect::new(b.x, b.y, b.width, band), bg.lighten(0.2));
            ctx.fill(Rect::new(b.x, b.bottom() - band, b.width, band), bg.darken(0.2));
        }

        let nudge = (self.press.value() * 1.5) as i32;
        let text_width = metrics.text_width(&self.label);
        let text_y = b.y + (b.height - metrics.font_height()) / 2 + nudge;
        let text_x = match &self.icon {
            Some(icon) => {
                let start = b.x + (b.width - (text_width + ICON_SIZE + ICON_GAP)) / 2;
                let icon_y = b.y + (b.height - ICON_SIZE) / 2 + nudge;
                ctx.draw_icon(icon, Rect::new(start, icon_y, ICON_SIZE, ICON_SIZE));
                start + ICON_SIZE + ICON_GAP
            }
            None => b.x + (b.width - text_width) / 2,
        };
        ctx.draw_text(&self.label, text_x, text_y, self.text_color(), true);

        if self.enabled && self.hover() > 0.3 {
            outer_ring(&mut *ctx, b, glow(self.hover(), 40.0));
        }
    }
}

impl Element for Button {
    fn bounds(&self) -> Rect {
        self.panel.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.panel.set_bounds(bounds);
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, _delta: f32) {
        self.panel.update_hover(mouse);
        self.update_animations();
        self.draw(ctx);
        if !self.is_mouse_over(mouse) {
            self.pressed = false;
        }
    }

    /// Fires the callback exactly once per accepted click
    fn mouse_clicked(&mut self, mouse: Point, button: MouseButton) -> Handled {
        if !self.enabled || !button.is_primary() || !self.is_mouse_over(mouse) {
            return Handled::No;
        }
        self.pressed = true;
        if let Some(on_click) = self.on_click.as_mut() {
            on_click();
        }
        Handled::Yes
    }
}
