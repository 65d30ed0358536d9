//! Drawing boundary over a ratatui buffer
//!
//! One UI unit is one terminal cell. Fills paint cell backgrounds, text
//! paints symbols and foregrounds, and translucent colors are blended over
//! whatever background the cell already has. Transforms cannot scale
//! cells, so they are only tracked for balance.

use crate::ui::color::Argb;
use crate::ui::draw::{DrawContext, Icon, TextMetrics, Transform};
use crate::ui::geometry::Rect;
use ratatui::buffer::{Buffer, Cell};
use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures text in terminal columns; every line is one row tall
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn text_width(&self, text: &str) -> i32 {
        UnicodeWidthStr::width(text) as i32
    }

    fn font_height(&self) -> i32 {
        1
    }
}

/// Composite `color` over `under`; non-RGB backgrounds count as black
fn blend(color: Argb, under: Color) -> Color {
    let (r, g, b) = match under {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let mixed = Argb::from_rgb(r, g, b).lerp(color.with_alpha(0xFF), color.alpha() as f32 / 255.0);
    Color::Rgb(mixed.red(), mixed.green(), mixed.blue())
}

/// [`DrawContext`] writing into a ratatui [`Buffer`]
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    /// Effective clip per nesting level, already intersected
    clips: Vec<Rect>,
    transforms: usize,
    underflow: bool,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self {
            buf,
            clips: Vec::new(),
            transforms: 0,
            underflow: false,
        }
    }

    /// Every clip and transform pushed so far has been popped
    pub fn is_balanced(&self) -> bool {
        self.clips.is_empty() && self.transforms == 0 && !self.underflow
    }

    fn buffer_rect(&self) -> Rect {
        let area = self.buf.area;
        Rect::new(
            area.x as i32,
            area.y as i32,
            area.width as i32,
            area.height as i32,
        )
    }

    /// Region currently writable
    pub fn clip(&self) -> Rect {
        self.clips.last().copied().unwrap_or_else(|| self.buffer_rect())
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let clip = self.clip();
        if x < clip.x || y < clip.y || x >= clip.right() || y >= clip.bottom() {
            return None;
        }
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.buf.cell_mut((x, y))
    }
}

impl DrawContext for BufferCanvas<'_> {
    fn fill(&mut self, rect: Rect, color: Argb) {
        if color.alpha() == 0 {
            return;
        }
        let area = rect.intersection(&self.clip());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let Some(cell) = self.cell_mut(x, y) else {
                    continue;
                };
                if color.alpha() == 0xFF {
                    // an opaque fill covers whatever was drawn beneath
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(color.red(), color.green(), color.blue()));
                } else {
                    let bg = blend(color, cell.bg);
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Argb, _shadow: bool) {
        if color.alpha() == 0 {
            return;
        }
        let mut column = x;
        let mut utf8 = [0u8; 4];
        for ch in text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            let clip = self.clip();
            let fits = column >= clip.x && column + width <= clip.right();
            if fits {
                let symbol: &str = ch.encode_utf8(&mut utf8);
                if let Some(cell) = self.cell_mut(column, y) {
                    let fg = blend(color, cell.bg);
                    cell.set_symbol(symbol);
                    cell.set_fg(fg);
                }
                // the trailing half of a wide glyph must not keep old text
                for extra in 1..width {
                    if let Some(cell) = self.cell_mut(column + extra, y) {
                        cell.set_symbol(" ");
                    }
                }
            }
            column += width;
        }
    }

    fn draw_icon(&mut self, icon: &Icon, rect: Rect) {
        let Some(glyph) = icon.id().chars().next() else {
            return;
        };
        let (cx, cy) = rect.center();
        let mut utf8 = [0u8; 4];
        self.draw_text(glyph.encode_utf8(&mut utf8), cx as i32, cy as i32, Argb::WHITE, false);
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = rect.intersection(&self.clip());
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        if self.clips.pop().is_none() {
            self.underflow = true;
        }
    }

    fn push_transform(&mut self, _transform: Transform) {
        self.transforms += 1;
    }

    fn pop_transform(&mut self) {
        match self.transforms.checked_sub(1) {
            Some(depth) => self.transforms = depth,
            None => self.underflow = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::draw::ClipGuard;
    use ratatui::layout::Rect as CellArea;

    fn buffer(width: u16, height: u16) -> Buffer {
        Buffer::empty(CellArea::new(0, 0, width, height))
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_cell_metrics_use_display_width() {
        assert_eq!(CellMetrics.text_width("abc"), 3);
        assert_eq!(CellMetrics.text_width("日本"), 4);
        assert_eq!(CellMetrics.font_height(), 1);
    }

    #[test]
    fn test_opaque_fill_sets_background() {
        let mut buf = buffer(4, 2);
        BufferCanvas::new(&mut buf).fill(Rect::new(1, 0, 2, 1), Argb(0xFF10_2030));
        assert_eq!(buf[(1, 0)].bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
        assert_eq!(buf[(1, 1)].bg, Color::Reset);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut buf = buffer(1, 1);
        let mut canvas = BufferCanvas::new(&mut buf);
        canvas.fill(Rect::new(0, 0, 1, 1), Argb(0xFF00_0000));
        canvas.fill(Rect::new(0, 0, 1, 1), Argb::from_rgba(200, 100, 0, 0x80));
        let Color::Rgb(r, g, b) = buf[(0, 0)].bg else {
            panic!("expected rgb background");
        };
        assert!((95..=105).contains(&r));
        assert!((45..=55).contains(&g));
        assert_eq!(b, 0);
    }

    #[test]
    fn test_text_respects_clip() {
        let mut buf = buffer(10, 1);
        {
            let mut canvas = BufferCanvas::new(&mut buf);
            {
                let mut clip = ClipGuard::new(&mut canvas, Rect::new(2, 0, 3, 1));
                clip.draw_text("abcdef", 0, 0, Argb::WHITE, false);
            }
            assert!(canvas.is_balanced());
        }
        assert_eq!(row(&buf, 0), "  cde     ");
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut buf = buffer(10, 3);
        let mut canvas = BufferCanvas::new(&mut buf);
        canvas.push_clip(Rect::new(0, 0, 5, 3));
        canvas.push_clip(Rect::new(3, 1, 10, 10));
        assert_eq!(canvas.clip(), Rect::new(3, 1, 2, 2));
        canvas.pop_clip();
        assert_eq!(canvas.clip(), Rect::new(0, 0, 5, 3));
        canvas.pop_clip();
        assert!(canvas.is_balanced());
    }

    #[test]
    fn test_offscreen_drawing_is_ignored() {
        let mut buf = buffer(3, 1);
        let mut canvas = BufferCanvas::new(&mut buf);
        canvas.fill(Rect::new(-5, -5, 20, 20), Argb::WHITE);
        canvas.draw_text("hello", -2, 0, Argb::BLACK, false);
        assert_eq!(row(&buf, 0), "llo");
    }

    #[test]
    fn test_wide_glyph_not_split_at_clip_edge() {
        let mut buf = buffer(3, 1);
        BufferCanvas::new(&mut buf).draw_text("a日", 1, 0, Argb::WHITE, false);
        assert_eq!(row(&buf, 0), " a ");
    }

    #[test]
    fn test_unbalanced_pop_detected() {
        let mut buf = buffer(1, 1);
        let mut canvas = BufferCanvas::new(&mut buf);
        canvas.pop_transform();
        assert!(!canvas.is_balanced());
    }
}
