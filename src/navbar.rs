pub const TOGGLE_LABEL: &str = "Toggle navigation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const BRAND: NavLink = NavLink {
    label: "DB",
    url: "https://daultonb.com",
};

pub const LINKS: [NavLink; 2] = [
    NavLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/daultonbaird/",
    },
    NavLink {
        label: "GitHub",
        url: "https://github.com/daultonb",
    },
];

/// Site navigation with a collapsible link menu.
#[derive(Debug, Default, Clone)]
pub struct Navbar {
    is_open: bool,
    selected: usize,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Mirrors `is_open` for the toggle button.
    pub fn expanded(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        if self.is_open {
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn links(&self) -> &'static [NavLink] {
        &LINKS
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % LINKS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + LINKS.len() - 1) % LINKS.len();
    }

    /// Follow the highlighted link. Always collapses the menu.
    pub fn activate(&mut self) -> Option<NavLink> {
        let link = if self.is_open {
            LINKS.get(self.selected).copied()
        } else {
            None
        };
        self.close();
        link
    }

    /// Following the brand link collapses the menu too.
    pub fn activate_brand(&mut self) -> NavLink {
        self.close();
        BRAND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let navbar = Navbar::new();
        assert!(!navbar.is_open());
        assert!(!navbar.expanded());
    }

    #[test]
    fn toggle_flips_state() {
        let mut navbar = Navbar::new();
        navbar.toggle();
        assert!(navbar.is_open());
        navbar.toggle();
        assert!(!navbar.is_open());
    }

    #[test]
    fn activating_link_closes_menu() {
        let mut navbar = Navbar::new();
        navbar.toggle();
        navbar.select_next();
        let link = navbar.activate().unwrap();
        assert_eq!(link.label, "GitHub");
        assert!(!navbar.is_open());
    }

    #[test]
    fn activate_when_closed_yields_nothing() {
        let mut navbar = Navbar::new();
        assert!(navbar.activate().is_none());
    }

    #[test]
    fn brand_closes_menu() {
        let mut navbar = Navbar::new();
        navbar.toggle();
        assert_eq!(navbar.activate_brand().url, "https://daultonb.com");
        assert!(!navbar.is_open());
    }

    #[test]
    fn selection_wraps() {
        let mut navbar = Navbar::new();
        navbar.toggle();
        navbar.select_previous();
        assert_eq!(navbar.selected(), LINKS.len() - 1);
        navbar.select_next();
        assert_eq!(navbar.selected(), 0);
    }

    #[test]
    fn reopening_resets_selection() {
        let mut navbar = Navbar::new();
        navbar.toggle();
        navbar.select_next();
        navbar.close();
        navbar.toggle();
        assert_eq!(navbar.selected(), 0);
    }
}
