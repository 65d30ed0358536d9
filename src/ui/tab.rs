//! Tab - a named bundle of panels with its own lifecycle
//!
//! A tab owns the ids of the panels it built. Activation only toggles
//! their membership in the screen's active list, so every panel added on
//! activate is removed again on deactivate.
//!
//! Lifecycle:
//!   init (build panels) -> on_activate <-> on_deactivate
//!   init again (screen rebuilt) drops the old panels first

use crate::ui::draw::{DrawContext, Icon, Metrics};
use crate::ui::geometry::{Point, Rect};
use crate::ui::screen::{PanelId, PanelRegistry};
use crate::ui::traits::Element;

/// What a tab builds and draws
pub trait TabContent {
    /// Create this tab's panels; called from every `Tab::init`
    fn build(&mut self, panels: &mut TabPanels<'_>);

    /// Extra drawing after all panels (tooltips, overlays)
    fn render(&mut self, _ctx: &mut dyn DrawContext, _mouse: Point, _delta: f32) {}
}

/// Panel sink handed to [`TabContent::build`]
pub struct TabPanels<'a> {
    registry: &'a mut PanelRegistry,
    owned: &'a mut Vec<PanelId>,
    active: bool,
    metrics: &'a Metrics,
    area: Rect,
}

impl TabPanels<'_> {
    /// Register a panel owned by this tab; live at once if the tab is active
    pub fn add(&mut self, panel: Box<dyn Element>) -> PanelId {
        let id = self.registry.insert(panel);
        self.owned.push(id);
        if self.active {
            self.registry.activate(id);
        }
        id
    }

    pub fn metrics(&self) -> &Metrics {
        self.metrics
    }

    /// Region below the nav bar available to this tab
    pub fn area(&self) -> Rect {
        self.area
    }
}

pub struct Tab {
    id: String,
    label: String,
    icon: Option<Icon>,
    panels: Vec<PanelId>,
    active: bool,
    content: Box<dyn TabContent>,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: impl TabContent + 'static) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            panels: Vec::new(),
            active: false,
            content: Box::new(content),
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }

    /// (Re)build the panel list, dropping any panels from a previous init
    pub fn init(&mut self, registry: &mut PanelRegistry, metrics: &Metrics, area: Rect) {
        for id in self.panels.drain(..) {
            registry.remove_panel(id);
        }

        let Self {
            panels,
            active,
            content,
            ..
        } = self;
        let mut sink = TabPanels {
            registry,
            owned: panels,
            active: *active,
            metrics,
            area,
        };
        content.build(&mut sink);

        tracing::debug!(tab = %self.id, panels = self.panels.len(), "tab initialized");
    }

    pub fn on_activate(&mut self, registry: &mut PanelRegistry) {
        self.active = true;
        for &id in &self.panels {
            registry.activate(id);
        }
    }

    pub fn on_deactivate(&mut self, registry: &mut PanelRegistry) {
        self.active = false;
        for &id in &self.panels {
            registry.deactivate(id);
        }
    }

    pub fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        self.content.render(ctx, mouse, delta);
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("panels", &self.panels)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
