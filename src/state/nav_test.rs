use super::*;

#[test]
fn nav_starts_closed() {
    let nav = NavState::default();
    assert!(!nav.toggle_active);
    assert!(!nav.menu_open);
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavState::default();
    nav.toggle();
    assert!(nav.toggle_active && nav.menu_open);
    nav.toggle();
    assert!(!nav.toggle_active && !nav.menu_open);
}

#[test]
fn link_click_closes_open_menu() {
    let mut nav = NavState::default();
    nav.toggle();
    nav.close();
    assert_eq!(nav, NavState::default());
}

#[test]
fn link_click_on_closed_menu_stays_closed() {
    let mut nav = NavState::default();
    nav.close();
    assert_eq!(nav, NavState::default());
}
