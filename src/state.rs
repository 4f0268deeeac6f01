//! Interaction state behind the page's scroll-driven UI.
//!
//! Every section shares the same two patterns: a monotonic "has been
//! revealed" record fed by viewport intersection, and a single-slot
//! selection for hover, expansion, and the image modal. The machines here
//! are plain data so they compile and test on any target; the wasm side
//! only forwards browser events into them.

use std::collections::HashSet;

/// Fraction of a card that must be visible before it reveals.
pub const CARD_REVEAL_THRESHOLD: f64 = 0.2;
/// Inset applied to the observer root so cards reveal slightly late.
pub const CARD_REVEAL_ROOT_MARGIN: &str = "-50px";
/// Fraction of a whole section that must be visible before it reveals.
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.2;
/// Fraction of a section that must be visible to become the active nav target.
pub const ACTIVE_SECTION_THRESHOLD: f64 = 0.3;
/// Scroll offset past which the header condenses into the floating pill.
pub const NAV_CONDENSE_OFFSET_PX: f64 = 100.0;
/// Milliseconds between typewriter ticks in the hero headline.
pub const TYPEWRITER_TICK_MS: i32 = 100;

/// Append-only record of which card indices have entered the viewport.
///
/// Once an index is marked it stays marked for the tracker's lifetime,
/// so a card that scrolls back out of view keeps its settled position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_revealed(&mut self, index: usize) {
        self.revealed.insert(index);
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// True once every index in `0..len` has been revealed.
    pub fn all_revealed(&self, len: usize) -> bool {
        (0..len).all(|index| self.revealed.contains(&index))
    }
}

/// Reads a card ordinal from its `data-index` attribute.
///
/// A missing or unparseable attribute falls back to index 0.
pub fn card_index(attr: Option<&str>) -> usize {
    attr.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

/// At most one active value per component instance.
///
/// Selecting overwrites the previous value; clearing returns to none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleSelection<T> {
    active: Option<T>,
}

impl<T> Default for SingleSelection<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: PartialEq> SingleSelection<T> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn select(&mut self, value: T) {
        self.active = Some(value);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }

    pub fn is(&self, value: &T) -> bool {
        self.active.as_ref() == Some(value)
    }
}

/// Reference-counted suspension of page scrolling.
///
/// The body overflow side effect is applied by whoever owns the lock;
/// releasing saturates at zero so a stray release cannot unlock a hold
/// somebody else still needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holds: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holds += 1;
    }

    pub fn release(&mut self) {
        self.holds = self.holds.saturating_sub(1);
    }

    pub fn is_locked(&self) -> bool {
        self.holds > 0
    }
}

/// Holds the currently enlarged item, if any, together with the scroll-lock.
///
/// The lock is acquired only on the closed-to-open edge, so replacing the
/// held item keeps scrolling suspended without a release/re-acquire gap.
/// Closing an already-closed overlay is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayController<T> {
    selection: SingleSelection<T>,
    lock: ScrollLock,
}

impl<T: PartialEq> OverlayController<T> {
    pub fn closed() -> Self {
        Self {
            selection: SingleSelection::none(),
            lock: ScrollLock::default(),
        }
    }

    pub fn open(&mut self, item: T) {
        if self.selection.active().is_none() {
            self.lock.acquire();
        }
        self.selection.select(item);
    }

    pub fn close(&mut self) {
        if self.selection.active().is_some() {
            self.selection.clear();
            self.lock.release();
        }
    }

    pub fn item(&self) -> Option<&T> {
        self.selection.active()
    }

    pub fn is_open(&self) -> bool {
        self.selection.active().is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

/// One-character-per-tick headline reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    full: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(full: &'static str) -> Self {
        Self { full, shown: 0 }
    }

    /// Advances one character. Returns false once the full text is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.full.chars().count()
    }

    /// The currently visible prefix, always on a character boundary.
    pub fn text(&self) -> &str {
        match self.full.char_indices().nth(self.shown) {
            Some((byte_offset, _)) => &self.full[..byte_offset],
            None => self.full,
        }
    }
}

/// Page scroll fraction as a percentage of the scrollable range.
///
/// A document no taller than the viewport has nothing to scroll, so the
/// degenerate divisor maps to 0 and the output is clamped to [0, 100].
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether the header has scrolled far enough to condense into the pill nav.
///
/// Strictly greater-than: an offset of exactly the threshold keeps the
/// static header. No hysteresis is applied.
pub fn nav_is_condensed(offset: f64) -> bool {
    offset > NAV_CONDENSE_OFFSET_PX
}

/// One intersection entry for a navigable section, by list position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionObservation {
    pub section: usize,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Tracks which navigable section is current.
///
/// Within one observer batch the intersecting entry with the highest
/// intersection ratio wins, ties going to the lowest section index, which
/// keeps the outcome independent of callback delivery order. A batch with
/// no intersecting entry leaves the active section unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: Option<usize>,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, batch: &[SectionObservation]) {
        let mut best: Option<(usize, f64)> = None;

        for entry in batch {
            if !entry.is_intersecting {
                continue;
            }
            let better = match best {
                None => true,
                Some((section, ratio)) => {
                    entry.ratio > ratio || (entry.ratio == ratio && entry.section < section)
                }
            };
            if better {
                best = Some((entry.section, entry.ratio));
            }
        }

        if let Some((section, _)) = best {
            self.active = Some(section);
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, section: usize) -> bool {
        self.active == Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        card_index, nav_is_condensed, scroll_progress, ActiveSectionTracker, OverlayController,
        RevealTracker, ScrollLock, SectionObservation, SingleSelection, Typewriter,
    };

    #[test]
    fn reveal_is_monotonic_across_exit() {
        let mut tracker = RevealTracker::new();
        tracker.mark_revealed(2);
        assert!(tracker.is_revealed(2));

        // A card leaving the viewport produces no call at all; re-marking
        // the others must not disturb what was already revealed.
        tracker.mark_revealed(0);
        tracker.mark_revealed(2);
        assert!(tracker.is_revealed(2));
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn all_revealed_requires_every_index() {
        let mut tracker = RevealTracker::new();
        tracker.mark_revealed(0);
        tracker.mark_revealed(2);
        assert!(!tracker.all_revealed(3));

        tracker.mark_revealed(1);
        assert!(tracker.all_revealed(3));
        assert!(tracker.all_revealed(0));
    }

    #[test]
    fn card_index_defaults_to_zero() {
        assert_eq!(card_index(Some("4")), 4);
        assert_eq!(card_index(Some(" 7 ")), 7);
        assert_eq!(card_index(Some("not-a-number")), 0);
        assert_eq!(card_index(Some("")), 0);
        assert_eq!(card_index(None), 0);
    }

    #[test]
    fn selection_overwrites_and_clears() {
        let mut hover = SingleSelection::none();
        assert!(hover.active().is_none());

        hover.select(3u32);
        assert!(hover.is(&3));

        hover.select(5);
        assert!(hover.is(&5));
        assert!(!hover.is(&3));

        hover.clear();
        assert!(hover.active().is_none());
    }

    #[test]
    fn overlay_replacement_keeps_lock_engaged() {
        let mut overlay = OverlayController::closed();
        overlay.open("fortinet");
        assert!(overlay.scroll_locked());

        overlay.open("aws");
        assert_eq!(overlay.item(), Some(&"aws"));
        assert!(overlay.scroll_locked());

        overlay.close();
        assert!(overlay.item().is_none());
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn overlay_close_when_closed_is_a_no_op() {
        let mut overlay = OverlayController::<u32>::closed();
        overlay.close();
        assert!(overlay.item().is_none());
        assert!(!overlay.scroll_locked());

        overlay.open(1);
        overlay.close();
        overlay.close();
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn scroll_lock_is_reference_counted() {
        let mut lock = ScrollLock::default();
        lock.acquire();
        lock.acquire();
        lock.release();
        assert!(lock.is_locked());

        lock.release();
        assert!(!lock.is_locked());

        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn typewriter_advances_one_character_per_tick() {
        let mut headline = Typewriter::new("> MSK");
        assert_eq!(headline.text(), "");

        assert!(headline.tick());
        assert!(headline.tick());
        assert_eq!(headline.text(), "> ");
        assert!(!headline.is_done());

        while headline.tick() {}
        assert_eq!(headline.text(), "> MSK");
        assert!(headline.is_done());
        assert!(!headline.tick());
        assert_eq!(headline.text(), "> MSK");
    }

    #[test]
    fn progress_matches_scrollable_range() {
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 50.0);
        assert_eq!(scroll_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn progress_is_zero_when_content_fits_the_viewport() {
        assert_eq!(scroll_progress(0.0, 700.0, 800.0), 0.0);
        assert_eq!(scroll_progress(50.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(1500.0, 2000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn nav_condenses_strictly_past_the_threshold() {
        let observed: Vec<bool> = [0.0, 50.0, 99.0, 100.0, 101.0]
            .iter()
            .map(|offset| nav_is_condensed(*offset))
            .collect();
        assert_eq!(observed, vec![false, false, false, false, true]);
    }

    #[test]
    fn latest_intersecting_batch_wins() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.observe(&[SectionObservation {
            section: 1,
            ratio: 0.4,
            is_intersecting: true,
        }]);
        tracker.observe(&[SectionObservation {
            section: 2,
            ratio: 0.35,
            is_intersecting: true,
        }]);
        assert_eq!(tracker.active(), Some(2));
        assert!(tracker.is_active(2));
    }

    #[test]
    fn batch_winner_is_highest_ratio_then_lowest_index() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.observe(&[
            SectionObservation {
                section: 2,
                ratio: 0.3,
                is_intersecting: true,
            },
            SectionObservation {
                section: 0,
                ratio: 0.8,
                is_intersecting: true,
            },
        ]);
        assert_eq!(tracker.active(), Some(0));

        tracker.observe(&[
            SectionObservation {
                section: 2,
                ratio: 0.5,
                is_intersecting: true,
            },
            SectionObservation {
                section: 1,
                ratio: 0.5,
                is_intersecting: true,
            },
        ]);
        assert_eq!(tracker.active(), Some(1));
    }

    #[test]
    fn non_intersecting_batch_changes_nothing() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.observe(&[SectionObservation {
            section: 0,
            ratio: 0.6,
            is_intersecting: true,
        }]);
        tracker.observe(&[SectionObservation {
            section: 0,
            ratio: 0.0,
            is_intersecting: false,
        }]);
        assert_eq!(tracker.active(), Some(0));
    }
}
