//! Navigation bar
//!
//! A strip of selectable items laid out along one axis, with an animated
//! selection indicator and per-item hover easing. The bar reports what a
//! click selected through [`NavClick`]; items may additionally carry their
//! own callback.

use std::collections::HashMap;

use crate::ui::animation::{ramp, Tracked};
use crate::ui::color::Argb;
use crate::ui::draw::{DrawContext, Icon, Metrics, Transform, TransformGuard};
use crate::ui::error::{Result, UiError};
use crate::ui::geometry::{Point, Rect};
use crate::ui::traits::{Element, Handled, MouseButton};

pub const BACKGROUND: Argb = Argb(0xFF1E_1E1E);
pub const INACTIVE: Argb = Argb(0xFFAA_AAAA);
pub const ACTIVE: Argb = Argb(0xFFFF_FFFF);
pub const HOVER: Argb = Argb(0xFFE0_E0E0);
pub const INDICATOR: Argb = Argb(0xFFFF_CC00);

const SELECTION_SPEED: f32 = 0.4;
const HOVER_SPEED: f32 = 0.7;
const HOVER_PRUNE: f32 = 0.01;

/// Primary layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub orientation: Orientation,
    /// Inset from the bar's leading edge (and cross-axis inset)
    pub item_padding: i32,
    /// Gap between consecutive items
    pub item_spacing: i32,
    pub icon_size: i32,
    /// Gap between icon and label
    pub icon_gap: i32,
    /// Selection indicator width across the primary axis
    pub indicator_thickness: i32,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            orientation: Orientation::Row,
            item_padding: 10,
            item_spacing: 5,
            icon_size: 16,
            icon_gap: 5,
            indicator_thickness: 3,
        }
    }
}

/// Callback invoked with the item id when that item becomes selected
pub type SelectCallback = Box<dyn FnMut(&str)>;

pub struct NavItem {
    id: String,
    label: String,
    icon: Option<Icon>,
    on_select: Option<SelectCallback>,
}

impl NavItem {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }
}

impl std::fmt::Debug for NavItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Outcome of a click on the bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavClick {
    /// No item under the pointer (or not the primary button)
    Missed,
    /// The already-selected item was clicked; nothing changed
    Reselected,
    /// A different item became selected
    Selected(String),
}

impl NavClick {
    pub fn handled(&self) -> Handled {
        Handled::from_bool(!matches!(self, NavClick::Missed))
    }
}

pub struct NavBar {
    bounds: Rect,
    style: NavStyle,
    metrics: Metrics,
    items: Vec<NavItem>,
    selected: Option<usize>,
    indicator_pos: Tracked,
    indicator_len: Tracked,
    /// Hover amount per item index; decayed entries are dropped
    hover: HashMap<usize, f32>,
}

impl NavBar {
    pub fn new(bounds: Rect, metrics: Metrics) -> Self {
        Self {
            bounds,
            style: NavStyle::default(),
            metrics,
            items: Vec::new(),
            selected: None,
            indicator_pos: Tracked::default(),
            indicator_len: Tracked::default(),
            hover: HashMap::new(),
        }
    }

    pub fn with_style(mut self, style: NavStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> NavStyle {
        self.style
    }

    /// Append an item. Ids are unique within one bar.
    pub fn add_item(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        icon: Option<Icon>,
        on_select: Option<SelectCallback>,
    ) -> Result<()> {
        let id = id.into();
        if self.index_of(&id).is_some() {
            tracing::warn!(id = %id, "rejected duplicate nav item");
            return Err(UiError::DuplicateNavItem(id));
        }
        self.items.push(NavItem {
            id,
            label: label.into(),
            icon,
            on_select,
        });
        Ok(())
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.map(|i| self.items[i].id.as_str())
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Select `id` without invoking callbacks. Unknown ids are ignored.
    pub fn set_active(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.selected = Some(index);
        self.retarget();
        true
    }

    /// Hit-test items in layout order and select the one under the pointer
    pub fn click(&mut self, mouse: Point, button: MouseButton) -> NavClick {
        if !button.is_primary() {
            return NavClick::Missed;
        }
        let Some(index) = self.item_spans().iter().position(|span| span.contains(mouse)) else {
            return NavClick::Missed;
        };
        if self.selected == Some(index) {
            return NavClick::Reselected;
        }

        self.selected = Some(index);
        self.retarget();

        let item = &mut self.items[index];
        if let Some(on_select) = item.on_select.as_mut() {
            on_select(&item.id);
        }
        NavClick::Selected(item.id.clone())
    }

    /// Length of an item along the primary axis
    fn item_extent(&self, item: &NavItem) -> i32 {
        match self.style.orientation {
            Orientation::Row => {
                let mut width = self.metrics.text_width(&item.label);
                if item.icon.is_some() {
                    width += self.style.icon_size + self.style.icon_gap;
                }
                width
            }
            Orientation::Column => {
                let font = self.metrics.font_height();
                if item.icon.is_some() {
                    font.max(self.style.icon_size)
                } else {
                    font
                }
            }
        }
    }

    /// On-screen span of every item, used for hover, clicks and the indicator
    pub fn item_spans(&self) -> Vec<Rect> {
        let b = self.bounds;
        let pad = self.style.item_padding.max(0);
        let mut cursor = match self.style.orientation {
            Orientation::Row => b.x.saturating_add(pad),
            Orientation::Column => b.y.saturating_add(pad),
        };
        let cross = |start: i32, extent: i32| {
            let inset = pad.min(extent);
            (start + inset, extent.saturating_sub(pad.saturating_mul(2)))
        };

        self.items
            .iter()
            .map(|item| {
                let extent = self.item_extent(item);
                let span = match self.style.orientation {
                    Orientation::Row => {
                        let (y, height) = cross(b.y, b.height);
                        Rect::new(cursor, y, extent, height)
                    }
                    Orientation::Column => {
                        let (x, width) = cross(b.x, b.width);
                        Rect::new(x, cursor, width, extent)
                    }
                };
                cursor = cursor.saturating_add(extent.saturating_add(self.style.item_spacing));
                span
            })
            .collect()
    }

    fn retarget(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(span) = self.item_spans().get(index).copied() else {
            return;
        };
        let (pos, len) = match self.style.orientation {
            Orientation::Row => (span.x, span.width),
            Orientation::Column => (span.y, span.height),
        };
        self.indicator_pos.set_target(pos as f32);
        self.indicator_len.set_target(len as f32);
    }

    /// Current indicator (position, length) along the primary axis
    pub fn indicator(&self) -> (f32, f32) {
        (self.indicator_pos.current(), self.indicator_len.current())
    }

    pub fn item_hover(&self, index: usize) -> f32 {
        self.hover.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of items with a live hover animation
    pub fn hover_entries(&self) -> usize {
        self.hover.len()
    }

    /// Advance indicator and hover animations by one frame
    pub fn update(&mut self, mouse: Point, delta: f32) {
        self.indicator_pos.step(SELECTION_SPEED * delta);
        self.indicator_len.step(SELECTION_SPEED * delta);

        let step = HOVER_SPEED * delta;
        for (index, span) in self.item_spans().into_iter().enumerate() {
            let hovered = span.contains(mouse);
            let current = self.item_hover(index);
            let target = if hovered { 1.0 } else { 0.0 };
            if current == target {
                continue;
            }
            let next = ramp(current, hovered, step);
            if next < HOVER_PRUNE {
                self.hover.remove(&index);
            } else {
                self.hover.insert(index, next);
            }
        }
    }

    fn draw_indicator(&self, ctx: &mut dyn DrawContext) {
        if self.selected.is_none() {
            return;
        }
        let (pos, len) = self.indicator();
        let b = self.bounds;
        let thickness = self.style.indicator_thickness;
        let rect = match self.style.orientation {
            Orientation::Row => Rect::new(
                pos as i32,
                b.bottom() - thickness,
                len as i32,
                thickness,
            ),
            Orientation::Column => Rect::new(b.x, pos as i32, thickness, len as i32),
        };
        ctx.fill(rect, INDICATOR);
    }

    fn draw_item(&self, ctx: &mut dyn DrawContext, item: &NavItem, span: Rect, selected: bool, hover: f32) {
        let base = if selected { ACTIVE } else { INACTIVE };
        let hover_target = if selected { ACTIVE } else { HOVER };
        let color = base.lerp(hover_target, hover);

        let font = self.metrics.font_height();
        let icon_size = self.style.icon_size;
        let text_y = span.y + (span.height - font) / 2;

        let (cx, cy) = span.center();
        let mut ctx = TransformGuard::new(ctx, Transform::scale_about(cx, cy, 1.0 + 0.05 * hover));

        let mut x = match self.style.orientation {
            Orientation::Row => span.x,
            Orientation::Column => {
                let mut content = self.metrics.text_width(&item.label);
                if item.icon.is_some() {
                    content += icon_size + self.style.icon_gap;
                }
                span.x + (span.width - content) / 2
            }
        };

        if let Some(icon) = &item.icon {
            let icon_y = span.y + (span.height - icon_size) / 2;
            ctx.draw_icon(icon, Rect::new(x, icon_y, icon_size, icon_size));
            x += icon_size + self.style.icon_gap;
        }

        ctx.draw_text(&item.label, x, text_y, color, true);
    }
}

impl Element for NavBar {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.retarget();
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        self.update(mouse, delta);

        ctx.fill(self.bounds, BACKGROUND);
        self.draw_indicator(ctx);

        for (index, span) in self.item_spans().into_iter().enumerate() {
            if span.is_empty() {
                continue;
            }
            let item = &self.items[index];
            self.draw_item(ctx, item, span, self.selected == Some(index), self.item_hover(index));
        }
    }

    fn mouse_clicked(&mut self, mouse: Point, button: MouseButton) -> Handled {
        self.click(mouse, button).handled()
    }
}
