//! Input result types shared by every handler
//!
//! Dispatch walks components in registration order and stops at the
//! first one that reports [`Handled::Yes`].

/// Result of offering an input event to a component
///
/// Tells the container whether the component consumed the event or
/// whether it should continue to the next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, continue dispatch
    #[default]
    No,
}

impl Handled {
    /// Create from a boolean (true = handled)
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Mouse button as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl MouseButton {
    /// Map a host button index (0 = primary)
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Middle,
            n => Self::Other(n),
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::Left
    }
}
