// Scroll state for scrollable panels
//
// This module provides the scroll model used by every scrollable panel.
// Each panel owns its ScrollState - containers just route input.
//
// Design principles:
// 1. Component owns state (containers are agnostic)
// 2. Offset is re-clamped at every mutation site: 0 <= offset <= max_scroll
// 3. Scrollbar dragging is absolute: the thumb follows the pointer's
//    position within the track, not an accumulated delta
// 4. Wheel input eases toward its target instead of jumping
//
// States:
//   Idle --click on scrollbar--> Dragging --drag--> Dragging
//   Dragging --release--> Idle

/// Default wheel distance per notch
pub const WHEEL_SPEED: f64 = 20.0;

/// Fraction of the remaining distance covered per wheel event
pub const WHEEL_SMOOTHING: f64 = 0.3;

/// Phase of the scrollbar interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Dragging,
}

/// Vertical track the scrollbar thumb moves along
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub start: f64,
    pub length: f64,
}

impl Track {
    pub fn new(start: i32, length: i32) -> Self {
        Self {
            start: start as f64,
            length: length.max(0) as f64,
        }
    }

    /// Pointer position as a fraction of the track (unclamped)
    pub fn ratio(&self, y: f64) -> f64 {
        if self.length <= 0.0 {
            return 0.0;
        }
        (y - self.start) / self.length
    }
}

/// Thumb placement within a track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumb {
    pub start: f64,
    pub length: f64,
}

/// Scroll state for a single panel
///
/// Owns all state needed for scrolling: position, content size,
/// viewport size and the drag phase. Can be embedded in any component
/// that needs scrolling.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (distance scrolled from the top)
    offset: f64,

    /// Total height of the content, set by the owning widget
    content_height: i32,

    /// Height of the visible content area
    viewport: i32,

    phase: ScrollPhase,

    wheel_speed: f64,
    wheel_smoothing: f64,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::with_wheel(WHEEL_SPEED, WHEEL_SMOOTHING)
    }

    /// Create scroll state with custom wheel tuning
    pub fn with_wheel(speed: f64, smoothing: f64) -> Self {
        Self {
            offset: 0.0,
            content_height: 0,
            viewport: 0,
            phase: ScrollPhase::Idle,
            wheel_speed: speed,
            wheel_smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Set total content height and re-clamp the offset
    pub fn set_content_height(&mut self, height: i32) {
        self.content_height = height.max(0);
        self.clamp();
    }

    /// Set visible height and re-clamp the offset
    pub fn set_viewport(&mut self, height: i32) {
        self.viewport = height.max(0);
        self.clamp();
    }

    /// Maximum valid offset
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport).max(0) as f64
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn viewport(&self) -> i32 {
        self.viewport
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == ScrollPhase::Dragging
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Set the offset directly (clamped)
    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
        self.clamp();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_scroll();
    }

    /// Idle → Dragging: grab the scrollbar at `y` and jump there
    pub fn begin_drag(&mut self, track: Track, y: f64) {
        self.phase = ScrollPhase::Dragging;
        self.jump_to(track, y);
        tracing::trace!(offset = self.offset, "scrollbar drag started");
    }

    /// Dragging → Dragging: follow the pointer. No-op when idle.
    pub fn drag_to(&mut self, track: Track, y: f64) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.jump_to(track, y);
        true
    }

    /// Dragging → Idle, unconditionally. Returns whether a drag ended.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = ScrollPhase::Idle;
        if was_dragging {
            tracing::trace!(offset = self.offset, "scrollbar drag ended");
        }
        was_dragging
    }

    /// Apply one wheel event. Returns false when there is nothing to scroll.
    pub fn wheel(&mut self, vertical: f64) -> bool {
        if !self.needs_scrollbar() {
            return false;
        }
        let target = self.offset - vertical * self.wheel_speed;
        // stays in f64: tall content would lose whole units in f32
        self.offset += (target - self.offset) * self.wheel_smoothing;
        self.clamp();
        true
    }

    /// Thumb geometry for `track`, or `None` when nothing scrolls
    pub fn thumb(&self, track: Track, min_length: f64) -> Option<Thumb> {
        let max = self.max_scroll();
        if max <= 0.0 || self.content_height <= 0 {
            return None;
        }
        let proportional = track.length * self.viewport as f64 / self.content_height as f64;
        let length = proportional.max(min_length).min(track.length);
        let start = track.start + (track.length - length) * self.offset / max;
        Some(Thumb { start, length })
    }

    fn jump_to(&mut self, track: Track, y: f64) {
        self.offset = track.ratio(y) * self.max_scroll();
        self.clamp();
    }

    fn clamp(&mut self) {
        let max = self.max_scroll();
        if self.offset.is_nan() {
            self.offset = 0.0;
        }
        self.offset = self.offset.clamp(0.0, max);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
