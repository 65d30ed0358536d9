//! Tab manager - the single owner of tab activation
//!
//! States:
//!   Uninitialized --init--> Active(first or requested tab)
//!   Active(a) --select_tab(b)--> Active(b)    (a deactivated, b activated)
//!   Active(a) --select_tab(a)--> Active(a)    (no-op)
//!
//! Nothing else may change which tab's panels are live. Nav bar clicks are
//! recorded as a pending selection and applied by the screen once its
//! dispatch loop has finished.

use std::collections::HashMap;

use crate::ui::draw::{DrawContext, Metrics};
use crate::ui::error::{Result, UiError};
use crate::ui::geometry::{Point, Rect};
use crate::ui::nav_bar::{NavBar, NavClick, NavStyle};
use crate::ui::screen::PanelRegistry;
use crate::ui::tab::Tab;
use crate::ui::traits::{Handled, MouseButton};

pub const DEFAULT_NAV_HEIGHT: i32 = 30;

pub struct TabManager {
    metrics: Metrics,
    tabs: Vec<Tab>,
    index: HashMap<String, usize>,
    active: Option<String>,
    /// Selection requested before `init`
    requested: Option<String>,
    /// Selection made by a nav click, applied after dispatch
    pending: Option<String>,
    nav: Option<NavBar>,
    nav_height: i32,
    nav_style: NavStyle,
    /// Screen region handed to tabs when they build
    area: Rect,
}

impl TabManager {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            tabs: Vec::new(),
            index: HashMap::new(),
            active: None,
            requested: None,
            pending: None,
            nav: None,
            nav_height: DEFAULT_NAV_HEIGHT,
            nav_style: NavStyle::default(),
            area: Rect::default(),
        }
    }

    pub fn with_nav_style(mut self, style: NavStyle) -> Self {
        self.nav_style = style;
        self
    }

    pub fn nav_height(&self) -> i32 {
        self.nav_height
    }

    /// Takes effect on the next `init`
    pub fn set_nav_height(&mut self, height: i32) {
        self.nav_height = height.max(0);
    }

    /// Region tabs lay their panels out in
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn is_initialized(&self) -> bool {
        self.nav.is_some()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.index.get(id).map(|&i| &self.tabs[i])
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.as_deref().and_then(|id| self.tab(id))
    }

    pub fn nav_bar(&self) -> Option<&NavBar> {
        self.nav.as_ref()
    }

    pub fn nav_bar_mut(&mut self) -> Option<&mut NavBar> {
        self.nav.as_mut()
    }

    /// Register a tab; ids must be unique.
    ///
    /// After `init` the tab is built immediately and gets a nav item.
    pub fn register_tab(&mut self, mut tab: Tab, registry: &mut PanelRegistry) -> Result<()> {
        let id = tab.id().to_string();
        if self.index.contains_key(&id) {
            tracing::warn!(tab = %id, "rejected duplicate tab id");
            return Err(UiError::DuplicateTab(id));
        }

        if let Some(nav) = self.nav.as_mut() {
            nav.add_item(&id, tab.label(), tab.icon().cloned(), None)?;
            tab.init(registry, &self.metrics, self.area);
        }

        self.index.insert(id.clone(), self.tabs.len());
        self.tabs.push(tab);
        tracing::debug!(tab = %id, "tab registered");
        Ok(())
    }

    /// Build the nav bar at (x, y, width), build every tab, select one.
    ///
    /// Selects the tab requested before init if there is one, otherwise
    /// the first registered tab.
    pub fn init(&mut self, x: i32, y: i32, width: i32, registry: &mut PanelRegistry) {
        // a re-init keeps the current tab selected
        if let Some(current) = self.active.take() {
            if let Some(&i) = self.index.get(&current) {
                self.tabs[i].on_deactivate(registry);
            }
            self.requested.get_or_insert(current);
        }
        self.pending = None;

        let mut nav = NavBar::new(Rect::new(x, y, width, self.nav_height), self.metrics.clone())
            .with_style(self.nav_style);
        for tab in &mut self.tabs {
            // ids are unique in the index, so the bar cannot reject them
            if let Err(e) = nav.add_item(tab.id(), tab.label(), tab.icon().cloned(), None) {
                tracing::warn!(error = %e, "nav item not added");
            }
            tab.init(registry, &self.metrics, self.area);
        }
        self.nav = Some(nav);
        registry.activate_nav_bar();

        let initial = self
            .requested
            .take()
            .filter(|id| self.index.contains_key(id))
            .or_else(|| self.tabs.first().map(|t| t.id().to_string()));
        if let Some(id) = initial {
            self.select_tab(&id, registry);
        }
    }

    /// Make `id` the active tab. Unknown ids and the current tab are no-ops.
    ///
    /// Before `init` the id is only remembered for the initial selection.
    pub fn select_tab(&mut self, id: &str, registry: &mut PanelRegistry) -> bool {
        if self.nav.is_none() {
            self.requested = Some(id.to_string());
            return false;
        }
        let Some(&next) = self.index.get(id) else {
            tracing::debug!(tab = %id, "ignored selection of unknown tab");
            return false;
        };
        if self.active.as_deref() == Some(id) {
            return false;
        }

        if let Some(current) = self.active.take() {
            if let Some(&i) = self.index.get(&current) {
                self.tabs[i].on_deactivate(registry);
            }
        }

        self.tabs[next].on_activate(registry);
        self.active = Some(id.to_string());
        if let Some(nav) = self.nav.as_mut() {
            nav.set_active(id);
        }

        tracing::debug!(tab = %id, "tab selected");
        true
    }

    /// Offer a click to the nav bar; a new selection is deferred
    pub fn nav_clicked(&mut self, mouse: Point, button: MouseButton) -> Handled {
        let Some(nav) = self.nav.as_mut() else {
            return Handled::No;
        };
        let click = nav.click(mouse, button);
        let handled = click.handled();
        if let NavClick::Selected(id) = click {
            self.pending = Some(id);
        }
        handled
    }

    /// Apply a selection deferred by `nav_clicked`
    pub fn apply_pending(&mut self, registry: &mut PanelRegistry) -> bool {
        match self.pending.take() {
            Some(id) => self.select_tab(&id, registry),
            None => false,
        }
    }

    /// Active tab's overlay, drawn after every panel
    pub fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        let Some(&i) = self.active.as_deref().and_then(|id| self.index.get(id)) else {
            return;
        };
        self.tabs[i].render(ctx, mouse, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panel::Panel;
    use crate::ui::screen::PanelId;
    use crate::ui::tab::{TabContent, TabPanels};
    use crate::ui::testing::{metrics, RecordingCanvas};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Builds one panel and remembers its id
    struct Single(Rc<RefCell<Option<PanelId>>>);

    impl TabContent for Single {
        fn build(&mut self, panels: &mut TabPanels<'_>) {
            let m = panels.metrics().clone();
            let id = panels.add(Box::new(Panel::titled(panels.area(), "p", m)));
            *self.0.borrow_mut() = Some(id);
        }
    }

    struct Overlay(Rc<RefCell<usize>>);

    impl TabContent for Overlay {
        fn build(&mut self, _panels: &mut TabPanels<'_>) {}

        fn render(&mut self, _ctx: &mut dyn DrawContext, _mouse: Point, _delta: f32) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn single(id: &str) -> (Tab, Rc<RefCell<Option<PanelId>>>) {
        let slot = Rc::new(RefCell::new(None));
        (Tab::new(id, id, Single(slot.clone())), slot)
    }

    fn panel_of(slot: &Rc<RefCell<Option<PanelId>>>) -> PanelId {
        slot.borrow().unwrap()
    }

    #[test]
    fn test_tab_switch_swaps_panel_sets() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (skills, p1) = single("skills");
        let (quests, p2) = single("quests");
        tm.register_tab(skills, &mut reg).unwrap();
        tm.register_tab(quests, &mut reg).unwrap();

        tm.init(10, 25, 380, &mut reg);
        assert_eq!(tm.active_tab_id(), Some("skills"));
        assert_eq!(reg.active_panels(), vec![panel_of(&p1)]);

        assert!(tm.select_tab("quests", &mut reg));
        assert_eq!(reg.active_panels(), vec![panel_of(&p2)]);
        assert!(!reg.is_active(panel_of(&p1)));
        assert_eq!(tm.nav_bar().unwrap().selected_id(), Some("quests"));
    }

    #[test]
    fn test_select_active_tab_is_noop() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (skills, _) = single("skills");
        tm.register_tab(skills, &mut reg).unwrap();
        tm.init(0, 0, 300, &mut reg);

        let before = reg.slots().to_vec();
        assert!(!tm.select_tab("skills", &mut reg));
        assert_eq!(reg.slots(), before.as_slice());
        assert_eq!(tm.nav_bar().unwrap().selected_index(), Some(0));
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (skills, _) = single("skills");
        tm.register_tab(skills, &mut reg).unwrap();
        tm.init(0, 0, 300, &mut reg);
        assert!(!tm.select_tab("nope", &mut reg));
        assert_eq!(tm.active_tab_id(), Some("skills"));
    }

    #[test]
    fn test_duplicate_tab_rejected_without_overwrite() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (a, _) = single("skills");
        let b = Tab::new("skills", "Other", Single(Rc::new(RefCell::new(None))));
        tm.register_tab(a, &mut reg).unwrap();
        let err = tm.register_tab(b, &mut reg).unwrap_err();
        assert_eq!(err, UiError::DuplicateTab("skills".into()));
        assert_eq!(tm.tabs().len(), 1);
        assert_eq!(tm.tab("skills").unwrap().label(), "skills");
    }

    #[test]
    fn test_init_honours_requested_tab() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (skills, _) = single("skills");
        let (quests, p2) = single("quests");
        tm.register_tab(skills, &mut reg).unwrap();
        tm.register_tab(quests, &mut reg).unwrap();

        assert!(!tm.select_tab("quests", &mut reg));
        assert_eq!(tm.active_tab_id(), None);

        tm.init(0, 0, 300, &mut reg);
        assert_eq!(tm.active_tab_id(), Some("quests"));
        assert_eq!(reg.active_panels(), vec![panel_of(&p2)]);
    }

    #[test]
    fn test_init_without_tabs_stays_inactive() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        tm.init(0, 0, 300, &mut reg);
        assert!(tm.is_initialized());
        assert!(tm.active_tab().is_none());
        assert!(reg.active_panels().is_empty());
    }

    #[test]
    fn test_register_after_init_builds_immediately() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        tm.init(0, 0, 300, &mut reg);

        let (late, slot) = single("late");
        tm.register_tab(late, &mut reg).unwrap();
        assert!(reg.contains(panel_of(&slot)));
        assert!(!reg.is_active(panel_of(&slot)));
        assert_eq!(tm.nav_bar().unwrap().items().len(), 1);

        assert!(tm.select_tab("late", &mut reg));
        assert!(reg.is_active(panel_of(&slot)));
    }

    #[test]
    fn test_reinit_keeps_selection_and_rebuilds() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (skills, _) = single("skills");
        let (quests, p2) = single("quests");
        tm.register_tab(skills, &mut reg).unwrap();
        tm.register_tab(quests, &mut reg).unwrap();
        tm.init(0, 0, 300, &mut reg);
        tm.select_tab("quests", &mut reg);
        let old = panel_of(&p2);

        tm.init(0, 0, 500, &mut reg);
        assert_eq!(tm.active_tab_id(), Some("quests"));
        assert!(!reg.contains(old));
        assert_eq!(reg.active_panels(), vec![panel_of(&p2)]);
        assert_eq!(tm.tabs().iter().filter(|t| t.is_active()).count(), 1);
    }

    #[test]
    fn test_nav_click_is_deferred_until_applied() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let (skills, _) = single("skills");
        let (quests, _) = single("quests");
        tm.register_tab(skills, &mut reg).unwrap();
        tm.register_tab(quests, &mut reg).unwrap();
        tm.init(0, 0, 300, &mut reg);

        // "skills" spans x in [10, 46), "quests" x in [51, 87)
        let handled = tm.nav_clicked(Point::new(60.0, 15.0), MouseButton::Left);
        assert_eq!(handled, Handled::Yes);
        assert_eq!(tm.active_tab_id(), Some("skills"));

        assert!(tm.apply_pending(&mut reg));
        assert_eq!(tm.active_tab_id(), Some("quests"));
        assert!(!tm.apply_pending(&mut reg));

        // clicking the selected item claims the click but changes nothing
        assert_eq!(tm.nav_clicked(Point::new(60.0, 15.0), MouseButton::Left), Handled::Yes);
        assert!(!tm.apply_pending(&mut reg));
    }

    #[test]
    fn test_overlay_renders_for_active_tab_only() {
        let mut reg = PanelRegistry::new();
        let mut tm = TabManager::new(metrics());
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        tm.register_tab(Tab::new("a", "A", Overlay(first.clone())), &mut reg).unwrap();
        tm.register_tab(Tab::new("b", "B", Overlay(second.clone())), &mut reg).unwrap();
        tm.init(0, 0, 300, &mut reg);

        let mut canvas = RecordingCanvas::default();
        tm.render(&mut canvas, Point::new(0.0, 0.0), 1.0);
        assert_eq!((*first.borrow(), *second.borrow()), (1, 0));
    }

    proptest! {
        #[test]
        fn exactly_one_active_tab(selections in prop::collection::vec(0usize..4, 1..30)) {
            let ids = ["a", "b", "c", "missing"];
            let mut reg = PanelRegistry::new();
            let root = reg.add_panel(Box::new(Panel::titled(Rect::new(0, 0, 10, 10), "root", metrics())));
            let mut tm = TabManager::new(metrics());
            let mut slots = Vec::new();
            for id in &ids[..3] {
                let (tab, slot) = single(id);
                tm.register_tab(tab, &mut reg).unwrap();
                slots.push(slot);
            }
            tm.init(0, 0, 300, &mut reg);

            for pick in selections {
                tm.select_tab(ids[pick], &mut reg);

                let active: Vec<_> = tm.tabs().iter().filter(|t| t.is_active()).collect();
                prop_assert_eq!(active.len(), 1);
                let tab = active[0];
                prop_assert_eq!(Some(tab.id()), tm.active_tab_id());

                let mut expected = vec![root];
                expected.extend_from_slice(tab.panels());
                prop_assert_eq!(reg.active_panels(), expected);
            }
        }
    }
}
