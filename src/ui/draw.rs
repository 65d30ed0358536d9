//! Host drawing boundary
//!
//! The core never talks to a renderer directly. Hosts implement
//! [`DrawContext`] (fill/text/icon/clip/transform primitives) and
//! [`TextMetrics`] (measurement), and the core issues primitives through
//! them without interpreting the handle any further.
//!
//! Scoped state (clip regions, transforms) is acquired through the RAII
//! guards in this module so that every exit path of a render pass
//! releases what it pushed.

use super::color::Argb;
use super::geometry::Rect;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Opaque reference to a host texture (sprite path, glyph, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Scale about a pivot point, applied to everything drawn while pushed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub pivot_x: f32,
    pub pivot_y: f32,
    pub scale: f32,
}

impl Transform {
    pub fn scale_about(pivot_x: f32, pivot_y: f32, scale: f32) -> Self {
        Self {
            pivot_x,
            pivot_y,
            scale,
        }
    }

    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < f32::EPSILON
    }
}

/// Text measurement, available outside of render passes
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
    fn font_height(&self) -> i32;
}

/// Shared handle to the host's text measurement
pub type Metrics = Rc<dyn TextMetrics>;

/// Drawing primitives issued by the core during a render pass
pub trait DrawContext {
    fn fill(&mut self, rect: Rect, color: Argb);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Argb, shadow: bool);

    fn draw_icon(&mut self, icon: &Icon, rect: Rect);

    /// Restrict drawing to `rect` (intersected with any enclosing clip)
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    fn push_transform(&mut self, transform: Transform);

    fn pop_transform(&mut self);
}

/// Clip region held for the guard's lifetime
pub struct ClipGuard<'a> {
    ctx: &'a mut dyn DrawContext,
}

impl<'a> ClipGuard<'a> {
    pub fn new(ctx: &'a mut dyn DrawContext, rect: Rect) -> Self {
        ctx.push_clip(rect);
        Self { ctx }
    }
}

impl<'a> Deref for ClipGuard<'a> {
    type Target = dyn DrawContext + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<'a> DerefMut for ClipGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for ClipGuard<'_> {
    fn drop(&mut self) {
        self.ctx.pop_clip();
    }
}

/// Transform held for the guard's lifetime
pub struct TransformGuard<'a> {
    ctx: &'a mut dyn DrawContext,
}

impl<'a> TransformGuard<'a> {
    pub fn new(ctx: &'a mut dyn DrawContext, transform: Transform) -> Self {
        ctx.push_transform(transform);
        Self { ctx }
    }
}

impl<'a> Deref for TransformGuard<'a> {
    type Target = dyn DrawContext + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<'a> DerefMut for TransformGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.ctx.pop_transform();
    }
}

/// Draw a one-unit outline just inside `rect`
pub fn outline(ctx: &mut dyn DrawContext, rect: Rect, color: Argb) {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    ctx.fill(Rect::new(x, y, width, 1), color);
    ctx.fill(Rect::new(x, y + height - 1, width, 1), color);
    ctx.fill(Rect::new(x, y, 1, height), color);
    ctx.fill(Rect::new(x + width - 1, y, 1, height), color);
}

/// Draw a one-unit ring just outside `rect`
pub fn outer_ring(ctx: &mut dyn DrawContext, rect: Rect, color: Argb) {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    ctx.fill(Rect::new(x - 1, y - 1, width + 2, 1), color);
    ctx.fill(Rect::new(x - 1, y + height, width + 2, 1), color);
    ctx.fill(Rect::new(x - 1, y, 1, height), color);
    ctx.fill(Rect::new(x + width, y, 1, height), color);
}
