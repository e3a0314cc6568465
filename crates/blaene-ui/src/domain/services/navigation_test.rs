use super::MobileMenu;
use super::Navbar;
use crate::domain::models::Element;
use crate::infrastructure::memory::MemoryElement;

#[test]
fn it_marks_the_navbar_past_the_threshold() {
    let element = MemoryElement::new();
    let mut navbar = Navbar::new(Some(element.boxed()), 50.0).unwrap();

    navbar.on_scroll(50.0);
    assert!(!element.has_class("scrolled"));

    navbar.on_scroll(50.5);
    assert!(element.has_class("scrolled"));

    navbar.on_scroll(0.0);
    assert!(!element.has_class("scrolled"));
}

#[test]
fn it_requires_a_navbar() {
    assert!(Navbar::new(None, 50.0).is_none());
}

#[test]
fn it_toggles_menu_and_button_together() {
    let toggle = MemoryElement::new();
    let menu = MemoryElement::new();
    let mut mobile = MobileMenu::new(Some(toggle.boxed()), Some(menu.boxed())).unwrap();

    mobile.on_toggle_clicked();
    assert!(mobile.is_open());
    assert!(toggle.has_class("active"));

    mobile.on_toggle_clicked();
    assert!(!mobile.is_open());
    assert!(!toggle.has_class("active"));
}

#[test]
fn it_skips_the_menu_when_a_handle_is_missing() {
    assert!(MobileMenu::new(Some(MemoryElement::new().boxed()), None).is_none());
    assert!(MobileMenu::new(None, Some(MemoryElement::new().boxed())).is_none());
}
