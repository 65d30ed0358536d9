//! Screen-space geometry shared by every component.
//!
//! Coordinates are caller-supplied absolute positions in host units
//! (pixels for a game host, cells for a terminal host). Nothing here
//! performs layout.

/// Pointer position as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in absolute coordinates
///
/// Width and height are never negative; constructors clamp them to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Rectangle spanning two corners (`x1`/`y1` exclusive)
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Inclusive-left, exclusive-right containment test
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x as f64
            && p.x < self.right() as f64
            && p.y >= self.y as f64
            && p.y < self.bottom() as f64
    }

    /// Containment test including the right and bottom edges.
    ///
    /// The scrollbar strip uses this so a pointer resting on the last
    /// pixel row of the track still grabs the thumb.
    pub fn contains_inclusive(&self, p: Point) -> bool {
        p.x >= self.x as f64
            && p.x <= self.right() as f64
            && p.y >= self.y as f64
            && p.y <= self.bottom() as f64
    }

    /// Whether `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlap of two rectangles (empty rect at `self`'s origin if disjoint)
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Rect::new(x0.min(self.right()), y0.min(self.bottom()), 0, 0);
        }
        Rect::from_corners(x0, y0, x1, y1)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Shrink by per-edge insets, never escaping the original bounds
    pub fn inset(&self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        let left = left.clamp(0, self.width);
        let top = top.clamp(0, self.height);
        let right = right.clamp(0, self.width - left);
        let bottom = bottom.clamp(0, self.height - top);
        Rect::new(
            self.x + left,
            self.y + top,
            self.width - left - right,
            self.height - top - bottom,
        )
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_left_exclusive_right() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 29.9)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 30.0)));
        assert!(!r.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn inclusive_containment_accepts_far_edges() {
        let r = Rect::new(0, 0, 6, 100);
        assert!(r.contains_inclusive(Point::new(6.0, 100.0)));
        assert!(!r.contains_inclusive(Point::new(6.1, 50.0)));
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let r = Rect::new(5, 5, -3, -1);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
        assert!(r.is_empty());
    }

    #[test]
    fn oversized_inset_stays_inside() {
        let r = Rect::new(0, 0, 10, 10);
        let inner = r.inset(8, 8, 8, 8);
        assert!(r.contains_rect(&inner));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn intersection_of_disjoint_rects_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 5, 5);
        assert!(a.intersection(&b).is_empty());
        assert_eq!(a.intersection(&Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
    }
}
