//! Keyboard input recognized by the interaction controllers.
//!
//! Controllers take key names as the UI layer receives them (DOM
//! `KeyboardEvent.key` values) and report whether they handled the key, so
//! the caller knows when to suppress the default browser behavior.

/// Keys the controllers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
}

impl Key {
    /// Parse a key name. Unknown names return `None`.
    ///
    /// Space is accepted as `" "` (the DOM value) as well as `"Space"` and the
    /// legacy `"Spacebar"`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            " " | "Space" | "Spacebar" => Some(Self::Space),
            "Enter" => Some(Self::Enter),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    /// Up or right: the "increase" arrows.
    #[inline]
    pub const fn is_increment(self) -> bool {
        matches!(self, Self::ArrowUp | Self::ArrowRight)
    }

    /// Down or left: the "decrease" arrows.
    #[inline]
    pub const fn is_decrement(self) -> bool {
        matches!(self, Self::ArrowDown | Self::ArrowLeft)
    }
}
