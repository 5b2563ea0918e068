//! Landing page behaviors and the initialization pass that wires them to a page.
//!
//! Every behavior owns the element handles it acts on and exposes plain event
//! methods. Attaching those methods to real events (listeners, observers,
//! timers) is left to the host binding.

use landing_core::{Environment, LandingConfig, LandingError, PageHost, UiElement};
use serde::Serialize;

pub mod anchors;
pub mod countdown;
pub mod dropdown;
pub mod fade;
pub mod filter;
pub mod focus_trap;
pub mod hover;
pub mod lazy;
pub mod nav;
pub mod year;

pub use anchors::AnchorScroller;
pub use countdown::{CountdownTimer, Tick};
pub use dropdown::FooterDropdown;
pub use fade::{FadeInAnimator, IntersectionEntry, Reveal};
pub use filter::CategoryFilter;
pub use focus_trap::{FocusTrap, TrapActivation};
pub use hover::{FeedbackKind, HoverFeedback};
pub use lazy::LazyImageLoader;
pub use nav::NavDrawer;

/// Counts logged once the page is wired.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct InitSummary {
    pub reduced_motion: bool,
    pub navigation: bool,
    pub countdown_timers: usize,
    pub running_countdowns: usize,
    pub fade_elements: usize,
    pub anchors: usize,
    pub lazy_images: usize,
    pub filter_controls: usize,
    pub footer_dropdown: bool,
}

/// Every behavior of the page, resolved against one host.
#[derive(Debug, Clone)]
pub struct LandingPage<E> {
    pub nav: Option<NavDrawer<E>>,
    pub nav_links: Vec<E>,
    pub focus_trap: Option<FocusTrap<E>>,
    pub fade: Option<FadeInAnimator<E>>,
    /// Countdowns still running after their first render.
    pub countdowns: Vec<CountdownTimer<E>>,
    pub anchors: Vec<E>,
    pub scroller: AnchorScroller,
    pub hover: HoverFeedback,
    pub buttons: Vec<E>,
    pub cards: Vec<E>,
    pub lazy_images: Option<LazyImageLoader<E>>,
    pub dropdown: Option<FooterDropdown<E>>,
    pub filter: Option<CategoryFilter<E>>,
    summary: InitSummary,
}

impl<E: UiElement> LandingPage<E> {
    /// Resolve every element the behaviors need and apply the load-time state:
    /// fade-in tagging, first countdown render, initial filter and year stamp.
    pub fn resolve<H>(
        host: &H,
        config: &LandingConfig,
        env: &Environment,
    ) -> Result<Self, LandingError>
    where
        H: PageHost<Element = E>,
    {
        config.validate()?;

        let mut summary = InitSummary {
            reduced_motion: env.motion.is_reduced(),
            ..InitSummary::default()
        };

        let nav = match (
            require(host, &config.nav_trigger),
            require(host, &config.nav_drawer),
            host.body()
                .ok_or_else(|| LandingError::MissingElement("body".to_string())),
        ) {
            (Ok(trigger), Ok(drawer), Ok(body)) => Some(NavDrawer::new(trigger, drawer, body)),
            (trigger, drawer, body) => {
                for err in [trigger.err(), drawer.err(), body.err()].into_iter().flatten() {
                    log::warn!("Navigation drawer disabled: {err}");
                }
                None
            }
        };
        summary.navigation = nav.is_some();
        let nav_links = if nav.is_some() {
            host.query_all(&config.nav_links)
        } else {
            Vec::new()
        };
        let focus_trap = nav
            .as_ref()
            .map(|nav| FocusTrap::new(nav.drawer().clone()));

        let cards = host.query_all(&config.card);
        let fade_targets: Vec<E> = config
            .fade_selectors
            .iter()
            .flat_map(|selector| host.query_all(selector))
            .collect();
        let fade = FadeInAnimator::new(env.motion, fade_targets, &cards, config);
        summary.fade_elements = fade.as_ref().map_or(0, |fade| fade.targets().len());

        let timers = host.query_all(&config.timer);
        summary.countdown_timers = timers.len();
        let countdowns: Vec<CountdownTimer<E>> = timers
            .into_iter()
            .map(|display| {
                CountdownTimer::new(display, &config.deadline_attribute, env.local_offset)
            })
            .filter(|timer| timer.tick(env.now) == Tick::Continue)
            .collect();
        summary.running_countdowns = countdowns.len();

        let anchors = host.query_all(&config.anchor);
        summary.anchors = anchors.len();

        let lazy_images = if env.intersection_observer {
            let loader = LazyImageLoader::new(
                host.query_all(&config.lazy_image),
                &config.deferred_source_attribute,
            );
            summary.lazy_images = loader.pending().len();
            Some(loader)
        } else {
            log::debug!("IntersectionObserver unavailable, images load eagerly");
            None
        };

        let dropdown = match require(host, &config.footer_toggle) {
            Ok(toggle) => Some(FooterDropdown::new(
                toggle,
                host.query_all(&config.footer_links),
            )),
            Err(err) => {
                log::debug!("Footer dropdown disabled: {err}");
                None
            }
        };
        summary.footer_dropdown = dropdown.is_some();

        let filter = CategoryFilter::new(host.query_all(&config.filter_control), cards.clone());
        if let Some(filter) = &filter {
            filter.initialize();
            summary.filter_controls = filter.controls().count();
        }

        if let Some(year) = host.query(&config.year) {
            year::stamp_year(&year, env.now, env.local_offset);
        }

        Ok(Self {
            nav,
            nav_links,
            focus_trap,
            fade,
            countdowns,
            anchors,
            scroller: AnchorScroller::new(config.header_offset),
            hover: HoverFeedback::new(env.motion),
            buttons: host.query_all(&config.button),
            cards,
            lazy_images,
            dropdown,
            filter,
            summary,
        })
    }

    pub fn summary(&self) -> &InitSummary {
        &self.summary
    }
}

fn require<H: PageHost>(host: &H, selector: &str) -> Result<H::Element, LandingError> {
    host.query(selector)
        .ok_or_else(|| LandingError::MissingElement(selector.to_string()))
}
