// Retained-mode panel engine
//
// Everything in here is host-agnostic: drawing goes through `DrawContext`,
// measurement through `TextMetrics`, and input arrives as plain calls on
// `Screen`. The terminal host in `crate::host` is one adapter.

pub mod animation;
pub mod color;
pub mod components;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod nav_bar;
pub mod panel;
pub mod screen;
pub mod scroll;
pub mod scrollable_panel;
pub mod tab;
pub mod tab_manager;
pub mod traits;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use color::Argb;
pub use draw::{DrawContext, Icon, Metrics, TextMetrics};
pub use error::{Result, UiError};
pub use geometry::{Point, Rect};
pub use nav_bar::{NavBar, NavClick, NavStyle, Orientation};
pub use panel::{Panel, PanelStyle};
pub use screen::{PanelId, PanelRegistry, Screen, ScreenContent, ScreenLayout, Slot};
pub use scrollable_panel::ScrollablePanel;
pub use tab::{Tab, TabContent, TabPanels};
pub use tab_manager::TabManager;
pub use traits::{Capability, Element, Handled, MouseButton, ScrollContent, ScrollView};
