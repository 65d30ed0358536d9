//! Screen - the top-level container a host embeds
//!
//! The screen owns every panel through a [`PanelRegistry`] and keeps the
//! ordered list of active slots that frames and input walk. Tabs and root
//! content register panels into the registry; only membership in the
//! active list changes when tabs switch.
//!
//! Dispatch rules:
//! - render: slots in order, then the title, then the active tab's overlay
//! - click: slots in order, first taker wins
//! - drag: scrollable slots in order, first taker wins
//! - release: every scrollable slot (a drag may end anywhere)
//! - wheel: slots under the pointer in order, first taker wins
//!
//! A tab switch triggered by a nav bar click is applied after the dispatch
//! loop has finished, never while it is iterating.

use std::collections::HashMap;

use crate::ui::color::Argb;
use crate::ui::draw::{DrawContext, Metrics};
use crate::ui::geometry::{Point, Rect};
use crate::ui::tab_manager::TabManager;
use crate::ui::traits::{Capability, Element, Handled, MouseButton};

pub const BACKGROUND: Argb = Argb(0xF012_1212);
pub const TITLE_COLOR: Argb = Argb(0xFFFF_FFFF);

/// Where the title and the tab nav bar sit inside the screen area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title_y: i32,
    pub nav_x: i32,
    pub nav_y: i32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            title_y: 10,
            nav_x: 10,
            nav_y: 25,
        }
    }
}

/// Opaque handle to a panel held by a [`PanelRegistry`]
///
/// Ids are never reused, so two owners can never alias one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

/// One entry of the active list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Panel(PanelId),
    /// The tab manager's navigation bar
    NavBar,
}

/// Owns panels and tracks which of them are live
#[derive(Default)]
pub struct PanelRegistry {
    panels: HashMap<PanelId, Box<dyn Element>>,
    active: Vec<Slot>,
    next_id: u64,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a panel without making it live
    pub fn insert(&mut self, panel: Box<dyn Element>) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        self.panels.insert(id, panel);
        id
    }

    /// Insert and activate (root-level panels)
    pub fn add_panel(&mut self, panel: Box<dyn Element>) -> PanelId {
        let id = self.insert(panel);
        self.activate(id);
        id
    }

    /// Deactivate and drop
    pub fn remove_panel(&mut self, id: PanelId) -> Option<Box<dyn Element>> {
        self.deactivate(id);
        self.panels.remove(&id)
    }

    /// Append to the active list. Returns false if unknown or already live.
    pub fn activate(&mut self, id: PanelId) -> bool {
        if !self.panels.contains_key(&id) || self.is_active(id) {
            return false;
        }
        self.active.push(Slot::Panel(id));
        true
    }

    pub fn deactivate(&mut self, id: PanelId) -> bool {
        let before = self.active.len();
        self.active.retain(|slot| *slot != Slot::Panel(id));
        self.active.len() != before
    }

    pub fn activate_nav_bar(&mut self) {
        if !self.active.contains(&Slot::NavBar) {
            self.active.push(Slot::NavBar);
        }
    }

    pub fn is_active(&self, id: PanelId) -> bool {
        self.active.contains(&Slot::Panel(id))
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.contains_key(&id)
    }

    /// Active slots in render/dispatch order
    pub fn slots(&self) -> &[Slot] {
        &self.active
    }

    /// Ids of the active panels, in order
    pub fn active_panels(&self) -> Vec<PanelId> {
        self.active
            .iter()
            .filter_map(|slot| match slot {
                Slot::Panel(id) => Some(*id),
                Slot::NavBar => None,
            })
            .collect()
    }

    pub fn get(&self, id: PanelId) -> Option<&dyn Element> {
        self.panels.get(&id).map(|p| p.as_ref())
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut (dyn Element + 'static)> {
        self.panels.get_mut(&id).map(|p| p.as_mut())
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Drop every panel and empty the active list
    pub fn clear(&mut self) {
        self.panels.clear();
        self.active.clear();
    }
}

/// Root-level content supplied by whoever builds a screen
pub trait ScreenContent {
    /// Register root panels; called on every `Screen::init`
    fn init_panels(&mut self, registry: &mut PanelRegistry, area: Rect, metrics: &Metrics);

    /// Drawn after panels and title, before the tab overlay
    fn render_overlay(&mut self, _ctx: &mut dyn DrawContext, _mouse: Point, _delta: f32) {}
}

/// Host-embedded screen: background, title, panels and optional tabs
pub struct Screen {
    title: String,
    metrics: Metrics,
    area: Rect,
    layout: ScreenLayout,
    registry: PanelRegistry,
    tabs: Option<TabManager>,
    content: Option<Box<dyn ScreenContent>>,
}

impl Screen {
    pub fn new(title: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            title: title.into(),
            metrics,
            area: Rect::default(),
            layout: ScreenLayout::default(),
            registry: PanelRegistry::new(),
            tabs: None,
            content: None,
        }
    }

    pub fn with_tabs(mut self, tabs: TabManager) -> Self {
        self.tabs = Some(tabs);
        self
    }

    pub fn with_layout(mut self, layout: ScreenLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    pub fn with_content(mut self, content: Box<dyn ScreenContent>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PanelRegistry {
        &mut self.registry
    }

    pub fn tabs(&self) -> Option<&TabManager> {
        self.tabs.as_ref()
    }

    pub fn tabs_mut(&mut self) -> Option<&mut TabManager> {
        self.tabs.as_mut()
    }

    pub fn add_panel(&mut self, panel: Box<dyn Element>) -> PanelId {
        self.registry.add_panel(panel)
    }

    pub fn remove_panel(&mut self, id: PanelId) -> Option<Box<dyn Element>> {
        self.registry.remove_panel(id)
    }

    /// (Re)build the screen for a host area of `width` x `height`
    ///
    /// Root panels first, then the nav bar, then the active tab's panels.
    pub fn init(&mut self, width: i32, height: i32) {
        self.area = Rect::new(0, 0, width, height);
        self.registry.clear();

        if let Some(content) = self.content.as_mut() {
            content.init_panels(&mut self.registry, self.area, &self.metrics);
        }

        if let Some(tabs) = self.tabs.as_mut() {
            let ScreenLayout { nav_x, nav_y, .. } = self.layout;
            let top = nav_y + tabs.nav_height();
            tabs.set_area(Rect::new(0, top, width, height - top));
            tabs.init(nav_x, nav_y, width - nav_x * 2, &mut self.registry);
        }

        tracing::debug!(
            width,
            height,
            panels = self.registry.len(),
            "screen initialized"
        );
    }

    /// Switch tabs from outside of input dispatch
    pub fn select_tab(&mut self, id: &str) -> bool {
        match self.tabs.as_mut() {
            Some(tabs) => tabs.select_tab(id, &mut self.registry),
            None => false,
        }
    }

    pub fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        ctx.fill(self.area, BACKGROUND);

        let slots = self.registry.slots().to_vec();
        for slot in slots {
            match slot {
                Slot::Panel(id) => {
                    if let Some(panel) = self.registry.get_mut(id) {
                        panel.render(ctx, mouse, delta);
                    }
                }
                Slot::NavBar => {
                    if let Some(nav) = self.tabs.as_mut().and_then(|t| t.nav_bar_mut()) {
                        nav.render(ctx, mouse, delta);
                    }
                }
            }
        }

        let title_width = self.metrics.text_width(&self.title);
        ctx.draw_text(
            &self.title,
            self.area.x + (self.area.width - title_width) / 2,
            self.layout.title_y,
            TITLE_COLOR,
            true,
        );

        if let Some(content) = self.content.as_mut() {
            content.render_overlay(ctx, mouse, delta);
        }
        if let Some(tabs) = self.tabs.as_mut() {
            tabs.render(ctx, mouse, delta);
        }
    }

    pub fn mouse_clicked(&mut self, mouse: Point, button: MouseButton) -> Handled {
        let slots = self.registry.slots().to_vec();
        let mut handled = Handled::No;

        for slot in slots {
            let result = match slot {
                Slot::Panel(id) => self
                    .registry
                    .get_mut(id)
                    .map(|panel| panel.mouse_clicked(mouse, button))
                    .unwrap_or_default(),
                Slot::NavBar => self
                    .tabs
                    .as_mut()
                    .map(|tabs| tabs.nav_clicked(mouse, button))
                    .unwrap_or_default(),
            };
            if result.was_handled() {
                handled = Handled::Yes;
                break;
            }
        }

        self.apply_pending_tab();
        handled
    }

    pub fn mouse_dragged(&mut self, mouse: Point, button: MouseButton, dx: f64, dy: f64) -> Handled {
        for id in self.registry.active_panels() {
            let Some(panel) = self.registry.get_mut(id) else {
                continue;
            };
            if panel.capability().receives_drags()
                && panel.mouse_dragged(mouse, button, dx, dy).was_handled()
            {
                return Handled::Yes;
            }
        }
        Handled::No
    }

    pub fn mouse_released(&mut self, mouse: Point, button: MouseButton) -> Handled {
        let mut handled = Handled::No;
        for id in self.registry.active_panels() {
            let Some(panel) = self.registry.get_mut(id) else {
                continue;
            };
            if panel.capability() == Capability::Scrollable
                && panel.mouse_released(mouse, button).was_handled()
            {
                handled = Handled::Yes;
            }
        }
        handled
    }

    pub fn mouse_scrolled(&mut self, mouse: Point, horizontal: f64, vertical: f64) -> Handled {
        for id in self.registry.active_panels() {
            let Some(panel) = self.registry.get_mut(id) else {
                continue;
            };
            if panel.is_mouse_over(mouse)
                && panel.handle_scrolling(horizontal, vertical).was_handled()
            {
                return Handled::Yes;
            }
        }
        Handled::No
    }

    fn apply_pending_tab(&mut self) {
        if let Some(tabs) = self.tabs.as_mut() {
            tabs.apply_pending(&mut self.registry);
        }
    }
}
