//! Mobile navigation menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Hamburger button and menu panel flags. They always move together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// `active` class on `.nav-toggle`.
    pub toggle_active: bool,
    /// `open` class on `.nav-links`.
    pub menu_open: bool,
}

impl NavState {
    /// Hamburger click.
    pub fn toggle(&mut self) {
        self.toggle_active = !self.toggle_active;
        self.menu_open = !self.menu_open;
    }

    /// Any nav link click.
    pub fn close(&mut self) {
        self.toggle_active = false;
        self.menu_open = false;
    }
}
