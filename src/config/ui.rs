//! Widget styling configuration
//!
//! Defaults here are sized for the terminal host, where one unit is one
//! cell. The core's own `Default` impls keep pixel-scale values for hosts
//! that draw in pixels.

use crate::ui::components::ScrollbarStyle;
use crate::ui::nav_bar::{NavStyle, Orientation};
use crate::ui::panel::PanelStyle;
use crate::ui::scroll::ScrollState;
use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// [panel]
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub padding: i32,
    pub draw_header: bool,
    pub draw_border: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            padding: 1,
            draw_header: true,
            draw_border: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FilePanel {
    pub padding: Option<i32>,
    pub draw_header: Option<bool>,
    pub draw_border: Option<bool>,
}

impl PanelConfig {
    pub fn from_file(file: Option<FilePanel>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            padding: file.padding.map(|p| p.max(0)).unwrap_or(defaults.padding),
            draw_header: file.draw_header.unwrap_or(defaults.draw_header),
            draw_border: file.draw_border.unwrap_or(defaults.draw_border),
        }
    }

    pub fn style(&self) -> PanelStyle {
        PanelStyle {
            padding: self.padding,
            draw_header: self.draw_header,
            draw_border: self.draw_border,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// [nav]
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    pub orientation: Orientation,
    /// Nav bar height (row) or width (column)
    pub height: i32,
    pub item_padding: i32,
    pub item_spacing: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Row,
            height: 3,
            item_padding: 1,
            item_spacing: 2,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileNav {
    pub orientation: Option<String>,
    pub height: Option<i32>,
    pub item_padding: Option<i32>,
    pub item_spacing: Option<i32>,
}

/// Parse orientation string from config; unknown values fall back to row
pub fn parse_orientation(s: &str) -> Orientation {
    match s.to_lowercase().as_str() {
        "column" | "vertical" => Orientation::Column,
        _ => Orientation::Row,
    }
}

pub fn orientation_str(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Row => "row",
        Orientation::Column => "column",
    }
}

impl NavConfig {
    pub fn from_file(file: Option<FileNav>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            orientation: file
                .orientation
                .map(|s| parse_orientation(&s))
                .unwrap_or(defaults.orientation),
            height: file.height.map(|h| h.max(1)).unwrap_or(defaults.height),
            item_padding: file
                .item_padding
                .map(|p| p.max(0))
                .unwrap_or(defaults.item_padding),
            item_spacing: file
                .item_spacing
                .map(|s| s.max(0))
                .unwrap_or(defaults.item_spacing),
        }
    }

    pub fn style(&self) -> NavStyle {
        NavStyle {
            orientation: self.orientation,
            item_padding: self.item_padding,
            item_spacing: self.item_spacing,
            // an icon takes one cell
            icon_size: 1,
            icon_gap: 1,
            indicator_thickness: 1,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// [scroll]
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    pub scrollbar_width: i32,
    pub scrollbar_padding: i32,
    pub min_thumb: i32,
    /// Units scrolled per wheel notch
    pub wheel_speed: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrollbar_width: 1,
            scrollbar_padding: 0,
            min_thumb: 1,
            wheel_speed: 3.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileScroll {
    pub scrollbar_width: Option<i32>,
    pub scrollbar_padding: Option<i32>,
    pub min_thumb: Option<i32>,
    pub wheel_speed: Option<f64>,
}

impl ScrollConfig {
    pub fn from_file(file: Option<FileScroll>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            scrollbar_width: file
                .scrollbar_width
                .map(|w| w.max(1))
                .unwrap_or(defaults.scrollbar_width),
            scrollbar_padding: file
                .scrollbar_padding
                .map(|p| p.max(0))
                .unwrap_or(defaults.scrollbar_padding),
            min_thumb: file.min_thumb.map(|m| m.max(1)).unwrap_or(defaults.min_thumb),
            wheel_speed: file
                .wheel_speed
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(defaults.wheel_speed),
        }
    }

    pub fn scrollbar_style(&self) -> ScrollbarStyle {
        ScrollbarStyle {
            width: self.scrollbar_width,
            padding: self.scrollbar_padding,
            min_thumb: self.min_thumb,
        }
    }

    /// Fresh scroll state using the configured wheel speed.
    ///
    /// Cells are too coarse for eased wheel steps, so a notch moves the
    /// full distance.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState::with_wheel(self.wheel_speed, 1.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// [progress]
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    pub smooth_animation: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            smooth_animation: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileProgress {
    pub smooth_animation: Option<bool>,
}

impl ProgressConfig {
    pub fn from_file(file: Option<FileProgress>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            smooth_animation: file.smooth_animation.unwrap_or(true),
        }
    }
}
