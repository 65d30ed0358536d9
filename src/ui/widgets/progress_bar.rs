//! Progress bar (experience, health, quest progress)

use crate::ui::color::Argb;
use crate::ui::draw::{outline, DrawContext, Metrics};
use crate::ui::geometry::{Point, Rect};
use crate::ui::panel::{Panel, PanelStyle};
use crate::ui::traits::Element;

/// Fraction of the remaining distance covered per frame when smoothing
const SMOOTHING: f32 = 0.1;
const SNAP: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressColors {
    pub background: Argb,
    pub border: Argb,
    pub fill: Argb,
    pub text: Argb,
}

impl Default for ProgressColors {
    fn default() -> Self {
        Self {
            background: Argb(0xFF33_3333),
            border: Argb(0xFF55_5555),
            fill: Argb(0xFF7F_BD3E),
            text: Argb::WHITE,
        }
    }
}

pub struct ProgressBar {
    panel: Panel,
    progress: f32,
    target: f32,
    value_text: String,
    show_value: bool,
    show_percent: bool,
    smooth: bool,
    colors: ProgressColors,
    bar_height: i32,
}

impl ProgressBar {
    /// Untitled bar filling `bounds`
    pub fn new(bounds: Rect, metrics: Metrics) -> Self {
        let panel = Panel::new(bounds, None, metrics).with_style(PanelStyle {
            padding: 0,
            draw_header: false,
            draw_border: true,
        });
        Self::from_panel(panel)
    }

    /// Bar inside a titled panel
    pub fn titled(bounds: Rect, title: impl Into<String>, metrics: Metrics) -> Self {
        Self::from_panel(Panel::titled(bounds, title, metrics))
    }

    fn from_panel(panel: Panel) -> Self {
        Self {
            panel,
            progress: 0.0,
            target: 0.0,
            value_text: String::new(),
            show_value: true,
            show_percent: false,
            smooth: true,
            colors: ProgressColors::default(),
            bar_height: 12,
        }
    }

    pub fn with_colors(mut self, colors: ProgressColors) -> Self {
        self.colors = colors;
        self
    }

    /// Restyle the surrounding panel (a titled bar keeps its title)
    pub fn with_panel_style(mut self, style: PanelStyle) -> Self {
        self.panel.set_padding(style.padding);
        self.panel.set_draw_header(style.draw_header);
        self.panel.set_draw_border(style.draw_border);
        self
    }

    pub fn with_bar_height(mut self, height: i32) -> Self {
        self.bar_height = height.max(1);
        self
    }

    pub fn set_smooth_animation(&mut self, smooth: bool) {
        self.smooth = smooth;
        if !smooth {
            self.progress = self.target;
        }
    }

    pub fn set_show_value(&mut self, show: bool) {
        self.show_value = show;
    }

    pub fn set_show_percent(&mut self, show: bool) {
        self.show_percent = show;
    }

    pub fn set_value_text(&mut self, text: impl Into<String>) {
        self.value_text = text.into();
    }

    /// Target progress in [0, 1]; applied instantly unless smoothing
    pub fn set_progress(&mut self, progress: f32) {
        self.target = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        if !self.smooth {
            self.progress = self.target;
        }
    }

    /// Displayed progress
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Rectangle of the bar itself inside the panel
    pub fn bar_rect(&self) -> Rect {
        let content = self.panel.content_rect();
        Rect::new(content.x, content.y, content.width, self.bar_height.min(content.height.max(1)))
    }

    /// Advance the smoothing by one frame
    pub fn step(&mut self) {
        if !self.smooth || self.progress == self.target {
            return;
        }
        let diff = self.target - self.progress;
        self.progress += diff * SMOOTHING;
        if diff.abs() < SNAP {
            self.progress = self.target;
        }
    }

    /// Text drawn over the bar, if any
    pub fn display_text(&self) -> Option<String> {
        if !self.show_value || self.value_text.is_empty() {
            return None;
        }
        if self.show_percent {
            Some(format!("{} ({:.0}%)", self.value_text, self.progress * 100.0))
        } else {
            Some(self.value_text.clone())
        }
    }

    fn draw_bar(&self, ctx: &mut dyn DrawContext) {
        let bar = self.bar_rect();

        ctx.fill(bar, self.colors.background);
        outline(ctx, bar, self.colors.border);

        let inner = bar.inset(1, 1, 1, 1);
        let fill_width = ((bar.width as f32 * self.progress) as i32).min(inner.width);
        if fill_width > 0 {
            let fill = Rect::new(inner.x, inner.y, fill_width, inner.height);
            ctx.fill(fill, self.colors.fill);
            let band = 2.min(inner.height);
            ctx.fill(Rect::new(fill.x, fill.y, fill.width, band), self.colors.fill.lighten(0.2));
            ctx.fill(
                Rect::new(fill.x, fill.bottom() - band, fill.width, band),
                self.colors.fill.darken(0.2),
            );
        }

        if let Some(text) = self.display_text() {
            let metrics = self.panel.metrics();
            let width = metrics.text_width(&text);
            ctx.draw_text(
                &text,
                bar.x + (bar.width - width) / 2,
                bar.y + (bar.height - metrics.font_height()) / 2,
                self.colors.text,
                true,
            );
        }
    }
}

impl Element for ProgressBar {
    fn bounds(&self) -> Rect {
        self.panel.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.panel.set_bounds(bounds);
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, _delta: f32) {
        self.panel.update_hover(mouse);
        self.panel.draw_chrome(ctx);
        self.step();
        self.draw_bar(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{metrics, RecordingCanvas};

    fn bar() -> ProgressBar {
        ProgressBar::new(Rect::new(0, 0, 102, 12), metrics())
    }

    #[test]
    fn test_instant_mode() {
        let mut p = bar();
        p.set_smooth_animation(false);
        p.set_progress(0.75);
        assert_eq!(p.progress(), 0.75);
        p.set_progress(4.0);
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn test_smooth_mode_eases_then_snaps() {
        let mut p = bar();
        p.set_progress(1.0);
        assert_eq!(p.progress(), 0.0);
        p.step();
        assert!((p.progress() - 0.1).abs() < 1e-6);

        let mut last = p.progress();
        for _ in 0..200 {
            p.step();
            assert!(p.progress() >= last);
            last = p.progress();
        }
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn test_display_text_variants() {
        let mut p = bar();
        assert_eq!(p.display_text(), None);
        p.set_value_text("120 / 200 XP");
        assert_eq!(p.display_text().as_deref(), Some("120 / 200 XP"));

        p.set_smooth_animation(false);
        p.set_progress(0.6);
        p.set_show_percent(true);
        assert_eq!(p.display_text().as_deref(), Some("120 / 200 XP (60%)"));

        p.set_show_value(false);
        assert_eq!(p.display_text(), None);
    }

    #[test]
    fn test_fill_stays_inside_border() {
        let mut p = bar();
        p.set_smooth_animation(false);
        p.set_progress(1.0);
        let mut canvas = RecordingCanvas::default();
        p.render(&mut canvas, Point::new(-1.0, -1.0), 1.0);
        let fill = canvas
            .fills()
            .into_iter()
            .find(|(_, c)| *c == ProgressColors::default().fill)
            .map(|(r, _)| r)
            .unwrap();
        assert_eq!(fill, Rect::new(1, 1, 100, 10));
    }
}
