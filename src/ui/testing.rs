//! Test doubles for the drawing boundary

use super::color::Argb;
use super::draw::{DrawContext, Icon, Metrics, TextMetrics, Transform};
use super::geometry::Rect;
use std::rc::Rc;

/// Fixed-width font: every char is `char_width` wide
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub font_height: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 6,
            font_height: 9,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    fn font_height(&self) -> i32 {
        self.font_height
    }
}

pub fn metrics() -> Metrics {
    Rc::new(FixedMetrics::default())
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Rect, Argb),
    Text(String, i32, i32, Argb),
    Icon(String, Rect),
    PushClip(Rect),
    PopClip,
    PushTransform(Transform),
    PopTransform,
}

/// Records every primitive and tracks clip/transform nesting
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    clip_depth: i32,
    transform_depth: i32,
    max_clip_depth: i32,
    underflow: bool,
}

impl RecordingCanvas {
    pub fn is_balanced(&self) -> bool {
        self.clip_depth == 0 && self.transform_depth == 0 && !self.underflow
    }

    pub fn max_clip_depth(&self) -> i32 {
        self.max_clip_depth
    }

    pub fn fills(&self) -> Vec<(Rect, Argb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(r, c) => Some((*r, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s, ..) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawContext for RecordingCanvas {
    fn fill(&mut self, rect: Rect, color: Argb) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Argb, _shadow: bool) {
        self.ops.push(Op::Text(text.to_string(), x, y, color));
    }

    fn draw_icon(&mut self, icon: &Icon, rect: Rect) {
        self.ops.push(Op::Icon(icon.id().to_string(), rect));
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.max_clip_depth = self.max_clip_depth.max(self.clip_depth);
        self.ops.push(Op::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth -= 1;
        if self.clip_depth < 0 {
            self.underflow = true;
        }
        self.ops.push(Op::PopClip);
    }

    fn push_transform(&mut self, transform: Transform) {
        self.transform_depth += 1;
        self.ops.push(Op::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        self.transform_depth -= 1;
        if self.transform_depth < 0 {
            self.underflow = true;
        }
        self.ops.push(Op::PopTransform);
    }
}
