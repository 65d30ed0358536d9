// Reusable drawing helpers shared by panels

pub mod scrollbar;

pub use scrollbar::{render_scrollbar, ScrollbarStyle};
