use landing_behaviors::{AnchorScroller, CategoryFilter, FooterDropdown, LazyImageLoader};
use landing_core::mock::{MockDocument, MockElement};
use landing_core::{EventDisposition, FilterKey, PageHost, UiElement};

#[test]
fn anchor_scrolls_below_the_header() {
    let doc = MockDocument::new();
    let target = doc.create("section");
    target.set_viewport_top(640.0);
    doc.register("#drops", &target);
    doc.set_scroll_y(100.0);

    let scroller = AnchorScroller::new(80.0);
    assert_eq!(
        scroller.on_click(&doc, "#drops"),
        EventDisposition::PreventDefault
    );
    assert_eq!(doc.scroll_requests(), vec![660.0]);
}

#[test]
fn missing_anchor_destination_is_swallowed() {
    let doc = MockDocument::new();
    let scroller = AnchorScroller::new(80.0);

    assert_eq!(
        scroller.on_click(&doc, "#nonexistent"),
        EventDisposition::PreventDefault
    );
    assert_eq!(scroller.on_click(&doc, "#"), EventDisposition::PreventDefault);
    assert!(doc.scroll_requests().is_empty());
}

#[test]
fn external_links_are_left_alone() {
    let doc = MockDocument::new();
    let scroller = AnchorScroller::new(80.0);
    assert_eq!(
        scroller.on_click(&doc, "https://example.com/#top"),
        EventDisposition::Allow
    );
}

#[test]
fn lazy_image_loads_once() {
    let doc = MockDocument::new();
    let image = doc.create("img").with_attribute("data-src", "/art/drop-01.webp");
    let eager = doc.create("img").with_attribute("src", "/logo.svg");
    let mut loader = LazyImageLoader::new(vec![image.clone(), eager.clone()], "data-src");
    assert_eq!(loader.pending(), &[image.clone()]);

    assert!(loader.on_intersect(&image));
    assert_eq!(image.attribute("src").as_deref(), Some("/art/drop-01.webp"));
    assert_eq!(image.attribute("data-src"), None);

    image.set_attribute("src", "/art/replaced.webp");
    assert!(!loader.on_intersect(&image));
    assert_eq!(image.attribute("src").as_deref(), Some("/art/replaced.webp"));
    assert!(!loader.on_intersect(&eager));
    assert!(loader.pending().is_empty());
}

#[test]
fn footer_dropdown_shows_first_then_hides() {
    let doc = MockDocument::new();
    let toggle = doc.create("h4");
    let group = doc.create("div").with_class("foot-cont-three");
    let links: Vec<MockElement> = (0..3).map(|_| group.child("a")).collect();
    links[2].set_style("display", "none");
    let dropdown = FooterDropdown::new(toggle.clone(), links.clone());

    dropdown.on_click();
    assert!(toggle.has_class("active"));
    assert!(links.iter().all(|link| link.style("display") == "block"));

    dropdown.on_click();
    assert!(!toggle.has_class("active"));
    assert!(links.iter().all(|link| link.style("display") == "none"));
}

fn card(doc: &MockDocument, category: Option<&str>) -> MockElement {
    let card = doc.create("article").with_class("nft-card");
    match category {
        Some(category) => card.with_attribute("data-category", category),
        None => card,
    }
}

#[test]
fn filter_derives_and_caches_keys_from_labels() {
    let doc = MockDocument::new();
    let tagged = doc
        .create("button")
        .with_attribute("data-filter", "photo")
        .with_text("Photos");
    let derived = doc.create("button").with_text("  Digital   Art ");
    let empty = doc
        .create("button")
        .with_attribute("data-filter", "")
        .with_text("All");
    let cards = vec![card(&doc, Some("art"))];

    let filter =
        CategoryFilter::new(vec![tagged, derived.clone(), empty.clone()], cards).expect("filter");
    assert_eq!(filter.key(0), Some(&FilterKey::new("photo")));
    assert_eq!(filter.key(1), Some(&FilterKey::new("digital-art")));
    assert_eq!(derived.attribute("data-filter").as_deref(), Some("digital-art"));
    assert_eq!(empty.attribute("data-filter").as_deref(), Some("all"));
}

#[test]
fn filter_all_and_category_selection() {
    let doc = MockDocument::new();
    let cards = vec![
        card(&doc, Some("Art")),
        card(&doc, Some("photo")),
        card(&doc, None),
        card(&doc, Some("ART")),
    ];
    let all = doc.create("button").with_text("All").with_class("active");
    let art = doc.create("button").with_text("Art");
    let filter =
        CategoryFilter::new(vec![all.clone(), art.clone()], cards.clone()).expect("filter");

    assert_eq!(filter.on_click(1), EventDisposition::PreventDefault);
    assert!(art.has_class("active"));
    assert!(!all.has_class("active"));
    let hidden: Vec<bool> = cards.iter().map(|card| card.has_class("hidden")).collect();
    assert_eq!(hidden, vec![false, true, true, false]);

    filter.on_click(0);
    assert!(cards.iter().all(|card| !card.has_class("hidden")));
    assert_eq!(filter.index_of(&art), Some(1));
    assert_eq!(filter.on_click(7), EventDisposition::Allow);
}

#[test]
fn filter_initializes_from_the_active_control() {
    let doc = MockDocument::new();
    let cards = vec![card(&doc, Some("art")), card(&doc, Some("photo"))];
    let all = doc.create("button").with_attribute("data-filter", "all");
    let photo = doc
        .create("button")
        .with_attribute("data-filter", "photo")
        .with_class("active");
    let filter = CategoryFilter::new(vec![all, photo], cards.clone()).expect("filter");

    filter.initialize();
    assert!(cards[0].has_class("hidden"));
    assert!(!cards[1].has_class("hidden"));
}

#[test]
fn filter_initializes_from_the_first_control_when_none_active() {
    let doc = MockDocument::new();
    let cards = vec![card(&doc, Some("art")), card(&doc, Some("photo"))];
    let art = doc.create("button").with_attribute("data-filter", "art");
    let photo = doc.create("button").with_attribute("data-filter", "photo");
    let filter = CategoryFilter::new(vec![art, photo], cards.clone()).expect("filter");

    filter.initialize();
    assert!(!cards[0].has_class("hidden"));
    assert!(cards[1].has_class("hidden"));
}

#[test]
fn filter_without_controls_or_cards_is_disabled() {
    let doc = MockDocument::new();
    let control = doc.create("button").with_text("All");
    assert!(CategoryFilter::new(vec![control.clone()], Vec::new()).is_none());
    assert!(CategoryFilter::new(Vec::new(), vec![card(&doc, Some("art"))]).is_none());
    assert_eq!(control.attribute("data-filter"), None);
    assert!(doc.query(".filter-btn").is_none());
}
