//! DOM side of the scroll-spy tracker.
//!
//! Scans mounted heading anchors on a throttled window-scroll
//! subscription and feeds the active section id into a signal. The
//! selection rule itself lives in [`crate::scrollspy`].

use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};

use crate::scrollspy::{select_active_section, SectionRect, SectionSource, Throttle};

/// Class every heading anchor carries; the scan keys off it plus the
/// element's `data-id`.
pub const HEADING_ANCHOR_CLASS: &str = "bp-h";

/// Coalescing window for scroll bursts. Leading-edge, so a continuous
/// scroll still updates at this cadence.
const SCROLL_SPY_INTERVAL_MS: f64 = 100.0;

/// Headings currently mounted in the document, in document order.
/// Without a window/document (headless hosts) the scan is empty and the
/// tracker is a no-op.
pub struct DomSections {
    anchor_class: &'static str,
}

impl DomSections {
    pub fn new() -> Self {
        Self {
            anchor_class: HEADING_ANCHOR_CLASS,
        }
    }
}

impl Default for DomSections {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSource for DomSections {
    fn sections(&self) -> Vec<SectionRect> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };

        let elements = document.get_elements_by_class_name(self.anchor_class);
        let mut out = Vec::with_capacity(elements.length() as usize);
        for i in 0..elements.length() {
            let Some(element) = elements.item(i) else {
                continue;
            };
            let Some(id) = element.get_attribute("data-id") else {
                continue;
            };
            let rect = element.get_bounding_client_rect();
            out.push(SectionRect {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            });
        }
        out
    }
}

/// Removes the scroll listener when the owning view is disposed.
struct ListenerGuard(Option<WindowListenerHandle>);

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

/// Track the most recently scrolled-past heading in `active_section`.
///
/// Runs one scan as soon as the view is mounted, then on every throttled
/// scroll event. The subscription is idempotent (a re-run of the effect
/// never attaches a second listener); the guard held in arena-local
/// storage removes it when the view unmounts.
pub fn use_scroll_spy(enabled: bool, active_section: RwSignal<Option<String>>) {
    if !enabled {
        return;
    }

    let source = Rc::new(DomSections::new());
    let scan = move || {
        let sections = source.sections();
        let prev = active_section.get_untracked();
        let next = select_active_section(prev.as_deref(), &sections);
        if next != prev {
            active_section.set(next);
        }
    };

    let guard: StoredValue<ListenerGuard, LocalStorage> =
        StoredValue::new_local(ListenerGuard(None));

    Effect::new(move |_| {
        if guard.with_value(|g| g.0.is_some()) {
            return;
        }

        // First pass right away; the anchors exist once this effect runs.
        scan();

        let scan = scan.clone();
        let throttle = Throttle::new(SCROLL_SPY_INTERVAL_MS);
        let handle = window_event_listener(ev::scroll, move |_| {
            if throttle.ready(js_sys::Date::now()) {
                scan();
            }
        });
        guard.update_value(|g| g.0 = Some(handle));
    });
}
