//! Active-section tracking for the outline sidebar.
//!
//! The selection rule and throttling live here as plain data-in/data-out
//! logic so the tracker can be exercised without a live layout; the DOM
//! side (element scan, scroll subscription) is in
//! `components::hooks::use_scroll_spy`.

use std::cell::Cell;

/// Viewport-relative bounds of one mounted heading anchor, in document
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Capability that yields the currently mounted headings. Environments
/// without a layout return an empty scan, which makes the tracker a
/// no-op.
pub trait SectionSource {
    fn sections(&self) -> Vec<SectionRect>;
}

/// The most recently scrolled-past heading.
///
/// A heading counts as passed once its top crosses above a dynamic
/// threshold of `max(150, gap/4)`, where `gap` is the distance to the
/// previous heading's bottom, so short sections between widely spaced
/// siblings still get their moment. With no previous selection the first
/// heading is the fallback.
pub fn select_active_section(prev: Option<&str>, sections: &[SectionRect]) -> Option<String> {
    let mut current = prev.map(str::to_string);
    let mut prev_rect: Option<&SectionRect> = None;

    for section in sections {
        if current.is_none() {
            current = Some(section.id.clone());
        }

        let gap = prev_rect.map(|p| section.top - p.bottom).unwrap_or(0.0);
        let offset = f64::max(150.0, gap / 4.0);

        if section.top - offset < 0.0 {
            current = Some(section.id.clone());
            prev_rect = Some(section);
            continue;
        }
        break;
    }

    current
}

/// Leading-edge throttle. Fires immediately when the interval has
/// elapsed, so a long continuous scroll keeps producing updates instead
/// of waiting for the scroll to stop.
pub struct Throttle {
    interval_ms: f64,
    last: Cell<Option<f64>>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: Cell::new(None),
        }
    }

    /// Whether an event at `now_ms` should run; records the run if so.
    pub fn ready(&self, now_ms: f64) -> bool {
        match self.last.get() {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last.set(Some(now_ms));
                true
            }
        }
    }
}
