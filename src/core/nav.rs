// Hamburger navigation open/closed state.

pub const NAV_TOGGLED_CLASS: &str = "nav--toggled";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open before.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn label(&self) -> &'static str {
        if self.open {
            "Close"
        } else {
            "Menu"
        }
    }
}
