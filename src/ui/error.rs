use thiserror::Error;

/// Errors surfaced by registration and content hooks.
///
/// None of these are fatal to the frame loop: callers log them and keep
/// dispatching to everything else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("tab id '{0}' is already registered")]
    DuplicateTab(String),

    #[error("nav item id '{0}' already exists in this nav bar")]
    DuplicateNavItem(String),

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
