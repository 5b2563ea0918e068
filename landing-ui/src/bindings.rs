#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use landing_behaviors::{
    AnchorScroller, CategoryFilter, CountdownTimer, FadeInAnimator, FeedbackKind, FocusTrap,
    FooterDropdown, HoverFeedback, IntersectionEntry, LandingPage, LazyImageLoader, NavDrawer,
    Tick, TrapActivation,
};
use landing_core::UiElement;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MutationObserver, MutationObserverInit,
};

use crate::host::{BrowserHost, PageElement};

type ObserverCallback<O> = Closure<dyn FnMut(js_sys::Array, O)>;

enum Observer {
    Intersection {
        observer: IntersectionObserver,
        _callback: ObserverCallback<IntersectionObserver>,
    },
    Mutation {
        observer: MutationObserver,
        _callback: ObserverCallback<MutationObserver>,
    },
}

impl Observer {
    fn disconnect(&self) {
        match self {
            Self::Intersection { observer, .. } => observer.disconnect(),
            Self::Mutation { observer, .. } => observer.disconnect(),
        }
    }
}

/// Listeners, observers and timer tasks keeping the page interactive.
/// Dropping the bindings detaches all of them and stops every countdown.
pub struct PageBindings {
    listeners: Vec<EventListener>,
    trap_listener: Rc<RefCell<Option<EventListener>>>,
    observers: Vec<Observer>,
    cancelled: Rc<Cell<bool>>,
}

impl PageBindings {
    pub fn attach(
        host: Rc<BrowserHost>,
        page: LandingPage<PageElement>,
        tick_ms: u32,
    ) -> Result<Self, JsValue> {
        let mut bindings = Self {
            listeners: Vec::new(),
            trap_listener: Rc::new(RefCell::new(None)),
            observers: Vec::new(),
            cancelled: Rc::new(Cell::new(false)),
        };

        if let Some(nav) = page.nav {
            bindings.bind_nav(&host, Rc::new(nav), &page.nav_links);
        }
        if let Some(fade) = page.fade {
            bindings.observe_fade(fade)?;
        }
        bindings.run_countdowns(page.countdowns, tick_ms);
        bindings.bind_anchors(&host, &page.anchors, page.scroller);
        bindings.bind_hover(page.hover, FeedbackKind::Button, &page.buttons);
        bindings.bind_hover(page.hover, FeedbackKind::Card, &page.cards);
        if let Some(loader) = page.lazy_images {
            bindings.observe_lazy_images(loader)?;
        }
        if let Some(trap) = page.focus_trap {
            bindings.observe_drawer(trap)?;
        }
        if let Some(dropdown) = page.dropdown {
            bindings.bind_dropdown(dropdown);
        }
        if let Some(filter) = page.filter {
            bindings.bind_filter(filter);
        }

        Ok(bindings)
    }

    fn bind_nav(
        &mut self,
        host: &BrowserHost,
        nav: Rc<NavDrawer<PageElement>>,
        links: &[PageElement],
    ) {
        let toggle = Rc::clone(&nav);
        self.listeners.push(EventListener::new(
            nav.trigger().element(),
            "click",
            move |_| toggle.toggle(),
        ));

        for link in links {
            let nav = Rc::clone(&nav);
            self.listeners.push(EventListener::new(link.element(), "click", move |_| {
                nav.on_link_click()
            }));
        }

        let outside = Rc::clone(&nav);
        self.listeners
            .push(EventListener::new(host.document(), "click", move |event| {
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .map(PageElement::new);
                outside.on_document_click(target.as_ref());
            }));

        self.listeners
            .push(EventListener::new(host.document(), "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    nav.on_keydown(&event.key());
                }
            }));
    }

    fn observe_fade(&mut self, fade: FadeInAnimator<PageElement>) -> Result<(), JsValue> {
        let fade = Rc::new(fade);
        let scheduler = Rc::clone(&fade);
        let cancelled = Rc::clone(&self.cancelled);
        let callback = ObserverCallback::<IntersectionObserver>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for reveal in scheduler.schedule(&intersection_batch(&entries)) {
                    let cancelled = Rc::clone(&cancelled);
                    spawn_local(async move {
                        TimeoutFuture::new(reveal.delay_ms).await;
                        if !cancelled.get() {
                            FadeInAnimator::reveal(&reveal.target);
                        }
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(fade.threshold()));
        options.set_root_margin(fade.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in fade.targets() {
            observer.observe(target.element());
        }

        self.observers.push(Observer::Intersection {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    /// One task per timer, rendering every `tick_ms` until its countdown
    /// finishes or the bindings are dropped.
    fn run_countdowns(&self, countdowns: Vec<CountdownTimer<PageElement>>, tick_ms: u32) {
        for countdown in countdowns {
            let cancelled = Rc::clone(&self.cancelled);
            spawn_local(async move {
                loop {
                    TimeoutFuture::new(tick_ms).await;
                    if cancelled.get() {
                        break;
                    }
                    let now = match landing_wasm::instant_from_js(js_sys::Date::now()) {
                        Ok(now) => now,
                        Err(err) => {
                            log::error!("Countdown stopped: {err}");
                            break;
                        }
                    };
                    if countdown.tick(now) == Tick::Finished {
                        log::debug!("Countdown finished");
                        break;
                    }
                }
            });
        }
    }

    fn bind_anchors(
        &mut self,
        host: &Rc<BrowserHost>,
        anchors: &[PageElement],
        scroller: AnchorScroller,
    ) {
        for anchor in anchors {
            let host = Rc::clone(host);
            let link = anchor.clone();
            self.listeners.push(EventListener::new_with_options(
                anchor.element(),
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let href = link.attribute("href").unwrap_or_default();
                    if scroller.on_click(&*host, &href).is_prevented() {
                        event.prevent_default();
                    }
                },
            ));
        }
    }

    fn bind_hover(&mut self, hover: HoverFeedback, kind: FeedbackKind, elements: &[PageElement]) {
        for element in elements {
            for &phase in HoverFeedback::phases(kind) {
                let target = element.clone();
                self.listeners.push(EventListener::new(
                    element.element(),
                    phase.event_type(),
                    move |_| hover.on_pointer(kind, &target, phase),
                ));
            }
        }
    }

    fn observe_lazy_images(&mut self, loader: LazyImageLoader<PageElement>) -> Result<(), JsValue> {
        if loader.pending().is_empty() {
            return Ok(());
        }

        let images = loader.pending().to_vec();
        let loader = RefCell::new(loader);
        let callback = ObserverCallback::<IntersectionObserver>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in intersection_batch(&entries) {
                    if entry.is_intersecting && loader.borrow_mut().on_intersect(&entry.target) {
                        observer.unobserve(entry.target.element());
                    }
                }
            },
        );

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for image in &images {
            observer.observe(image.element());
        }

        self.observers.push(Observer::Intersection {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    /// Watch the drawer's class list. The keydown listener is attached on the
    /// first activation only; later ones refresh the focusable list.
    fn observe_drawer(&mut self, trap: FocusTrap<PageElement>) -> Result<(), JsValue> {
        let drawer = trap.container().clone();
        let trap = Rc::new(RefCell::new(trap));
        let slot = Rc::clone(&self.trap_listener);
        let keydown_target = drawer.clone();

        let callback = ObserverCallback::<MutationObserver>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                if records.length() == 0 {
                    return;
                }
                if trap.borrow_mut().on_class_mutation() != TrapActivation::Installed {
                    return;
                }

                let keydown = Rc::clone(&trap);
                let listener = EventListener::new_with_options(
                    keydown_target.element(),
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let disposition = keydown
                            .borrow()
                            .on_keydown(&key_event.key(), key_event.shift_key());
                        if disposition.is_prevented() {
                            event.prevent_default();
                        }
                    },
                );
                *slot.borrow_mut() = Some(listener);
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
        observer.observe_with_options(drawer.element(), &options)?;

        self.observers.push(Observer::Mutation {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    fn bind_dropdown(&mut self, dropdown: FooterDropdown<PageElement>) {
        let toggle = dropdown.toggle_element().clone();
        self.listeners.push(EventListener::new(toggle.element(), "click", move |_| {
            dropdown.on_click()
        }));
    }

    fn bind_filter(&mut self, filter: CategoryFilter<PageElement>) {
        let controls: Vec<PageElement> = filter.controls().cloned().collect();
        let filter = Rc::new(filter);
        for (index, control) in controls.iter().enumerate() {
            let filter = Rc::clone(&filter);
            self.listeners.push(EventListener::new_with_options(
                control.element(),
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if filter.on_click(index).is_prevented() {
                        event.prevent_default();
                    }
                },
            ));
        }
    }
}

impl Drop for PageBindings {
    fn drop(&mut self) {
        self.cancelled.set(true);
        for observer in &self.observers {
            observer.disconnect();
        }
        log::debug!(
            "Detached {} listeners and {} observers",
            self.listeners.len(),
            self.observers.len()
        );
    }
}

fn intersection_batch(entries: &js_sys::Array) -> Vec<IntersectionEntry<PageElement>> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| IntersectionEntry {
            target: PageElement::new(entry.target()),
            is_intersecting: entry.is_intersecting(),
        })
        .collect()
}
