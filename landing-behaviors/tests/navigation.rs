use landing_behaviors::{FocusTrap, NavDrawer, TrapActivation};
use landing_core::focus::{focusable_descendants, is_focusable};
use landing_core::mock::{MockDocument, MockElement};
use landing_core::{EventDisposition, UiElement};

struct Fixture {
    doc: MockDocument,
    trigger: MockElement,
    drawer: MockElement,
    links: Vec<MockElement>,
    outside: MockElement,
}

fn fixture() -> Fixture {
    let doc = MockDocument::new();
    let header = doc.create("header");
    let trigger = header
        .child("button")
        .with_class("hamburger")
        .with_attribute("aria-expanded", "false");
    trigger.child("span");
    let drawer = doc.create("nav").with_class("mobile-nav");
    let links = ["#drops", "#artists", "#faq"]
        .iter()
        .map(|href| {
            drawer
                .child("a")
                .with_class("mobile-nav-link")
                .with_attribute("href", href)
        })
        .collect();
    let outside = doc.create("main");
    Fixture {
        doc,
        trigger,
        drawer,
        links,
        outside,
    }
}

fn nav(fx: &Fixture) -> NavDrawer<MockElement> {
    NavDrawer::new(fx.trigger.clone(), fx.drawer.clone(), fx.doc.body_element())
}

#[test]
fn toggle_opens_and_even_toggles_restore_state() {
    let fx = fixture();
    let nav = nav(&fx);
    let body = fx.doc.body_element();

    nav.toggle();
    assert!(nav.is_open());
    assert_eq!(fx.trigger.attribute("aria-expanded").as_deref(), Some("true"));
    assert!(body.has_class("menu-open"));

    for _ in 0..3 {
        nav.toggle();
    }
    assert!(!nav.is_open());
    assert_eq!(fx.trigger.attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!fx.drawer.has_class("active"));
    assert!(!body.has_class("menu-open"));
}

#[test]
fn link_click_closes_instead_of_toggling() {
    let fx = fixture();
    let nav = nav(&fx);

    nav.on_link_click();
    assert!(!nav.is_open());

    nav.toggle();
    nav.on_link_click();
    assert!(!nav.is_open());
    assert_eq!(fx.trigger.attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!fx.doc.body_element().has_class("menu-open"));
}

#[test]
fn outside_click_closes_but_inside_clicks_do_not() {
    let fx = fixture();
    let nav = nav(&fx);
    nav.toggle();

    nav.on_document_click(Some(&fx.links[1]));
    assert!(nav.is_open());

    let icon = fx.trigger.descendants().remove(0);
    nav.on_document_click(Some(&icon));
    assert!(nav.is_open());

    nav.on_document_click(Some(&fx.outside));
    assert!(!nav.is_open());
}

#[test]
fn click_without_element_target_counts_as_outside() {
    let fx = fixture();
    let nav = nav(&fx);
    nav.toggle();
    nav.on_document_click(None);
    assert!(!nav.is_open());
}

#[test]
fn escape_closes_only_when_open() {
    let fx = fixture();
    let nav = nav(&fx);

    nav.on_keydown("Escape");
    assert_eq!(fx.trigger.attribute("aria-expanded").as_deref(), Some("false"));

    nav.toggle();
    nav.on_keydown("Enter");
    assert!(nav.is_open());
    nav.on_keydown("Escape");
    assert!(!nav.is_open());
}

#[test]
fn focus_trap_installs_once_across_reopenings() {
    let fx = fixture();
    let nav = nav(&fx);
    let mut trap = FocusTrap::new(fx.drawer.clone());

    assert_eq!(trap.on_class_mutation(), TrapActivation::Inactive);
    nav.toggle();
    assert_eq!(trap.on_class_mutation(), TrapActivation::Installed);
    nav.toggle();
    assert_eq!(trap.on_class_mutation(), TrapActivation::Inactive);
    nav.toggle();
    assert_eq!(trap.on_class_mutation(), TrapActivation::Refreshed);
    assert!(trap.is_installed());
}

#[test]
fn focus_trap_wraps_tab_at_both_ends() {
    let fx = fixture();
    let nav = nav(&fx);
    let mut trap = FocusTrap::new(fx.drawer.clone());
    nav.toggle();
    trap.on_class_mutation();

    let (first, middle, last) = (&fx.links[0], &fx.links[1], &fx.links[2]);

    last.focus();
    assert_eq!(trap.on_keydown("Tab", false), EventDisposition::PreventDefault);
    assert!(first.is_focused());

    assert_eq!(trap.on_keydown("Tab", true), EventDisposition::PreventDefault);
    assert!(last.is_focused());

    middle.focus();
    assert_eq!(trap.on_keydown("Tab", false), EventDisposition::Allow);
    assert_eq!(trap.on_keydown("Tab", true), EventDisposition::Allow);
    assert!(middle.is_focused());

    first.focus();
    assert_eq!(trap.on_keydown("Enter", true), EventDisposition::Allow);
    assert!(first.is_focused());
}

#[test]
fn focus_trap_refresh_picks_up_new_focusables() {
    let fx = fixture();
    let nav = nav(&fx);
    let mut trap = FocusTrap::new(fx.drawer.clone());
    nav.toggle();
    trap.on_class_mutation();
    nav.toggle();

    let close = fx.drawer.child("button");
    nav.toggle();
    assert_eq!(trap.on_class_mutation(), TrapActivation::Refreshed);

    close.focus();
    assert_eq!(trap.on_keydown("Tab", false), EventDisposition::PreventDefault);
    assert!(fx.links[0].is_focused());
}

#[test]
fn focusable_elements_follow_tag_and_tabindex_rules() {
    let doc = MockDocument::new();
    let nav = doc.create("nav");
    let link = nav.child("a").with_attribute("href", "#about");
    let bare_link = nav.child("a");
    let button = nav.child("button");
    let div = nav.child("div");
    let tabbable = nav.child("div").with_attribute("tabindex", "0");
    let untabbable = nav.child("span").with_attribute("tabindex", "-1");
    let input = div.child("input");

    assert!(is_focusable(&link));
    assert!(!is_focusable(&bare_link));
    assert!(is_focusable(&button));
    assert!(!is_focusable(&div));
    assert!(is_focusable(&tabbable));
    assert!(!is_focusable(&untabbable));

    assert_eq!(
        focusable_descendants(&nav),
        vec![link, button, input, tabbable]
    );
}
