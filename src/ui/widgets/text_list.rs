//! Wrapped paragraphs as scrollable content

use crate::ui::color::Argb;
use crate::ui::draw::{DrawContext, Metrics};
use crate::ui::error::Result;
use crate::ui::geometry::Point;
use crate::ui::scrollable_panel::wrap_text;
use crate::ui::traits::{ScrollContent, ScrollView};

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub color: Argb,
}

/// Paragraphs wrapped to the panel's usable width
///
/// Reports its wrapped height so the owning panel's scroll range follows
/// the text.
pub struct TextList {
    metrics: Metrics,
    paragraphs: Vec<Paragraph>,
    paragraph_gap: i32,
    /// Wrapped lines for `wrapped_width`, tagged with their paragraph
    lines: Vec<(usize, String)>,
    wrapped_width: Option<i32>,
}

impl TextList {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            paragraphs: Vec::new(),
            paragraph_gap: 0,
            lines: Vec::new(),
            wrapped_width: None,
        }
    }

    pub fn with_paragraph_gap(mut self, gap: i32) -> Self {
        self.paragraph_gap = gap.max(0);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, color: Argb) {
        self.paragraphs.push(Paragraph {
            text: text.into(),
            color,
        });
        self.wrapped_width = None;
    }

    pub fn set_paragraphs(&mut self, paragraphs: Vec<Paragraph>) {
        self.paragraphs = paragraphs;
        self.wrapped_width = None;
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn line_height(&self) -> i32 {
        self.metrics.font_height()
    }

    fn rewrap(&mut self, width: i32) {
        if self.wrapped_width == Some(width) {
            return;
        }
        self.lines.clear();
        for (index, paragraph) in self.paragraphs.iter().enumerate() {
            for line in wrap_text(self.metrics.as_ref(), &paragraph.text, width) {
                self.lines.push((index, line));
            }
        }
        self.wrapped_width = Some(width);
    }

    fn height(&self) -> i32 {
        let breaks = self
            .lines
            .windows(2)
            .filter(|pair| pair[0].0 != pair[1].0)
            .count() as i32;
        self.lines.len() as i32 * self.line_height() + breaks * self.paragraph_gap
    }
}

impl ScrollContent for TextList {
    fn measure(&mut self, inner_width: i32) -> Option<i32> {
        self.rewrap(inner_width);
        Some(self.height())
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, view: ScrollView, _mouse: Point, _delta: f32) -> Result<()> {
        self.rewrap(view.inner_width);
        let line_height = self.line_height();
        let mut y = view.top();
        let mut previous = None;

        for (index, line) in &self.lines {
            if previous.is_some_and(|p| p != *index) {
                y += self.paragraph_gap;
            }
            previous = Some(*index);
            if view.is_visible(y, line_height) {
                let color = self.paragraphs[*index].color;
                ctx.draw_text(line, view.viewport.x, y, color, false);
            }
            y += line_height;
        }
        Ok(())
    }
}
