use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::{window, DomRect, EventTarget, ScrollBehavior, ScrollIntoViewOptions};
use yew::Reducible;

use crate::config;

/// Page sections in document order. The order is the tie-break when more than
/// one section straddles the trigger offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    WhyUs,
    Portfolio,
    Technology,
    Process,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::WhyUs,
        Section::Portfolio,
        Section::Technology,
        Section::Process,
        Section::Contact,
    ];

    pub const FOOTER: [Section; 4] = [
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::WhyUs => "why-us",
            Section::Portfolio => "portfolio",
            Section::Technology => "technology",
            Section::Process => "process",
            Section::Contact => "contact",
        }
    }

    /// Nav label: the id with its first letter upper-cased and the first
    /// hyphen turned into a space.
    pub fn label(self) -> String {
        let id = self.id().replacen('-', " ", 1);
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Sections linked from the nav bar; the hero is reached through the logo.
    pub fn nav_items() -> impl Iterator<Item = Section> {
        Section::ALL.into_iter().filter(|section| *section != Section::Hero)
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

impl From<DomRect> for SectionBounds {
    fn from(rect: DomRect) -> Self {
        Self {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }
}

/// First section, in document order, straddling the trigger offset.
/// Sections with no bounds (element missing from the DOM) are skipped.
pub fn locate_active<F>(mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL.into_iter().find(|section| {
        bounds_of(*section).map_or(false, |bounds| bounds.straddles(config::TRIGGER_OFFSET))
    })
}

/// What one scroll signal saw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollObservation {
    pub scroll_y: f64,
    pub matched: Option<Section>,
}

impl ScrollObservation {
    pub fn capture<F>(scroll_y: f64, bounds_of: F) -> Self
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        Self {
            scroll_y,
            matched: locate_active(bounds_of),
        }
    }

    /// Reads scroll offset and section geometry from the live page.
    pub fn from_window() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let scroll_y = window.scroll_y().ok()?;
        Some(Self::capture(scroll_y, |section| {
            document
                .get_element_by_id(section.id())
                .map(|element| SectionBounds::from(element.get_bounding_client_rect()))
        }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    active: Section,
    scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            active: Section::Hero,
            scrolled: false,
        }
    }
}

impl ScrollTracker {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Applies one scroll signal. Without a match the active section stays put.
    pub fn observe(&mut self, observation: ScrollObservation) {
        self.scrolled = observation.scroll_y > config::SCROLLED_THRESHOLD;
        if let Some(section) = observation.matched {
            self.active = section;
        }
    }
}

impl Reducible for ScrollTracker {
    type Action = ScrollObservation;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.observe(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// A live `scroll` listener. Dropping it removes the listener.
pub struct ScrollSubscription {
    _listener: EventListener,
}

impl ScrollSubscription {
    pub fn new<F>(target: &EventTarget, mut on_scroll: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let listener = EventListener::new(target, "scroll", move |_| on_scroll());
        Self { _listener: listener }
    }

    pub fn on_window<F>(on_scroll: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        Some(Self::new(&window, on_scroll))
    }
}

/// Starts a smooth scroll to the section. Nothing waits on it; the scroll
/// signals it produces settle the active section.
pub fn scroll_to_section(section: Section) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    let Some(element) = element else {
        debug!("No element for section #{}", section.id());
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> Option<SectionBounds> {
        Some(SectionBounds { top, bottom })
    }

    /// Lays sections out back to back starting at `first_top`, each
    /// `height` tall.
    fn stacked(first_top: f64, height: f64) -> impl FnMut(Section) -> Option<SectionBounds> {
        move |section| {
            let index = Section::ALL.iter().position(|s| *s == section)? as f64;
            let top = first_top + index * height;
            bounds(top, top + height)
        }
    }

    #[test]
    fn selects_services_when_only_services_straddles() {
        let active = locate_active(|section| match section {
            Section::About => bounds(-600.0, 100.0),
            Section::Services => bounds(100.0, 900.0),
            Section::WhyUs => bounds(900.0, 1700.0),
            _ => None,
        });
        assert_eq!(active, Some(Section::Services));
    }

    #[test]
    fn earlier_section_wins_overlap() {
        let active = locate_active(|section| match section {
            Section::Portfolio => bounds(0.0, 200.0),
            Section::Technology => bounds(120.0, 600.0),
            _ => None,
        });
        assert_eq!(active, Some(Section::Portfolio));
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(SectionBounds { top: 150.0, bottom: 400.0 }.straddles(150.0));
        assert!(SectionBounds { top: -200.0, bottom: 150.0 }.straddles(150.0));
        assert!(!SectionBounds { top: 150.5, bottom: 400.0 }.straddles(150.0));
        assert!(!SectionBounds { top: -200.0, bottom: 149.9 }.straddles(150.0));
    }

    #[test]
    fn stops_scanning_after_first_match() {
        let mut queried = Vec::new();
        let active = locate_active(|section| {
            queried.push(section);
            stacked(-1700.0, 800.0)(section)
        });
        assert_eq!(active, Some(Section::Services));
        assert_eq!(queried, vec![Section::Hero, Section::About, Section::Services]);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let active = locate_active(|section| match section {
            Section::Hero => None,
            Section::About => bounds(0.0, 500.0),
            _ => None,
        });
        assert_eq!(active, Some(Section::About));
    }

    #[test]
    fn no_match_retains_active_section() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(ScrollObservation::capture(1200.0, stacked(-1000.0, 800.0)));
        assert_eq!(tracker.active(), Section::About);

        // Gap between sections around the trigger line.
        tracker.observe(ScrollObservation::capture(1300.0, |section| match section {
            Section::About => bounds(-700.0, 100.0),
            Section::Services => bounds(200.0, 1000.0),
            _ => None,
        }));
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn starts_on_hero_and_stays_there_above_first_section() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.active(), Section::Hero);

        tracker.observe(ScrollObservation::capture(0.0, stacked(400.0, 800.0)));
        assert_eq!(tracker.active(), Section::Hero);
        assert!(!tracker.scrolled());
    }

    #[test]
    fn scrolled_flag_follows_threshold_independently() {
        let mut tracker = ScrollTracker::default();

        tracker.observe(ScrollObservation { scroll_y: 50.0, matched: None });
        assert!(!tracker.scrolled());

        tracker.observe(ScrollObservation { scroll_y: 51.0, matched: None });
        assert!(tracker.scrolled());
        assert_eq!(tracker.active(), Section::Hero);

        tracker.observe(ScrollObservation { scroll_y: 10.0, matched: Some(Section::Contact) });
        assert!(!tracker.scrolled());
        assert_eq!(tracker.active(), Section::Contact);
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let state = Rc::new(ScrollTracker::default());
        let same = state.clone().reduce(ScrollObservation { scroll_y: 0.0, matched: None });
        assert!(Rc::ptr_eq(&state, &same));

        let moved = same.reduce(ScrollObservation {
            scroll_y: 900.0,
            matched: Some(Section::Process),
        });
        assert_eq!(moved.active(), Section::Process);
        assert!(moved.scrolled());
    }

    #[test]
    fn labels_come_from_ids() {
        assert_eq!(Section::WhyUs.label(), "Why us");
        assert_eq!(Section::Technology.label(), "Technology");
        assert_eq!(Section::Hero.label(), "Hero");
    }

    #[test]
    fn ids_are_unique_and_nav_skips_hero() {
        let ids: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());

        let nav: Vec<_> = Section::nav_items().collect();
        assert_eq!(nav.len(), 7);
        assert_eq!(nav.first(), Some(&Section::About));
        assert_eq!(nav.last(), Some(&Section::Contact));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn emit_scroll() {
        let window = window().expect("window available");
        let event = Event::new("scroll").expect("create scroll event");
        window.dispatch_event(&event).expect("dispatch scroll event");
    }

    #[wasm_bindgen_test]
    fn dropped_subscription_stops_handling_scroll() {
        let calls = Rc::new(Cell::new(0u32));
        let subscription = ScrollSubscription::on_window({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        })
        .expect("window available");

        emit_scroll();
        assert_eq!(calls.get(), 1);

        drop(subscription);
        emit_scroll();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn teardown_leaves_tracker_untouched() {
        let tracker = Rc::new(RefCell::new(ScrollTracker::default()));
        let subscription = ScrollSubscription::on_window({
            let tracker = tracker.clone();
            move || {
                tracker.borrow_mut().observe(ScrollObservation {
                    scroll_y: 500.0,
                    matched: Some(Section::Portfolio),
                })
            }
        })
        .expect("window available");
        drop(subscription);

        emit_scroll();
        assert_eq!(*tracker.borrow(), ScrollTracker::default());
    }
}
