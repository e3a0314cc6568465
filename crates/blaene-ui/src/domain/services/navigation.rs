use crate::domain::models::ElementBox;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

pub const SCROLLED_CLASS: &str = "scrolled";
pub const MENU_ACTIVE_CLASS: &str = "active";

/// Adds `scrolled` to the navbar once the page moves past the threshold.
pub struct Navbar {
    navbar: ElementBox,
    threshold: f64,
}

impl Navbar {
    pub fn new(navbar: Option<ElementBox>, threshold: f64) -> Option<Navbar> {
        return Some(Navbar {
            navbar: navbar?,
            threshold,
        });
    }

    pub fn on_scroll(&mut self, offset: f64) {
        if offset > self.threshold {
            self.navbar.add_class(SCROLLED_CLASS);
        } else {
            self.navbar.remove_class(SCROLLED_CLASS);
        }
    }
}

pub struct MobileMenu {
    toggle: ElementBox,
    menu: ElementBox,
}

impl MobileMenu {
    pub fn new(toggle: Option<ElementBox>, menu: Option<ElementBox>) -> Option<MobileMenu> {
        return Some(MobileMenu {
            toggle: toggle?,
            menu: menu?,
        });
    }

    pub fn on_toggle_clicked(&mut self) {
        let open = self.menu.toggle_class(MENU_ACTIVE_CLASS);
        self.toggle.toggle_class(MENU_ACTIVE_CLASS);
        log::debug!("Mobile menu {}", if open { "opened" } else { "closed" });
    }

    pub fn is_open(&self) -> bool {
        return self.menu.has_class(MENU_ACTIVE_CLASS);
    }
}
