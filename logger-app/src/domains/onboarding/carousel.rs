//! Cursor and scroll bookkeeping for the onboarding slide strip.
//!
//! The carousel has two authorities over its index: the auto-advance timer,
//! whose computed index is only a request, and the viewport, whose majority
//! reports are final. `CarouselState` keeps both reconciled.

use std::time::Duration;

use iced::widget::scrollable;

use crate::domains::ui::transitions::{EasingFunction, Transition};

/// Duration of the eased scroll used by auto-advance and settling.
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(320);

#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Scrollable widget ID for programmatic scrolling.
    pub scrollable_id: scrollable::Id,
    /// Index of the slide the indicator highlights.
    pub active_index: usize,
    /// True while the user is pressing or dragging the strip; advances are
    /// dropped, never queued, while set.
    pub suspended: bool,
    /// Last offset the viewport reported.
    pub scroll_offset: f32,
    /// In-flight programmatic scroll, if any.
    pub scroll_transition: Option<Transition>,
    /// Last index the viewport reported as majority-visible.
    last_majority: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            scrollable_id: scrollable::Id::new("onboarding-slides"),
            active_index: 0,
            suspended: false,
            scroll_offset: 0.0,
            scroll_transition: None,
            last_majority: 0,
        }
    }

    /// Restore the freshly-mounted configuration: first slide, no
    /// suppression, no pending scroll.
    pub fn reset(&mut self) {
        self.active_index = 0;
        self.suspended = false;
        self.scroll_offset = 0.0;
        self.scroll_transition = None;
        self.last_majority = 0;
    }

    /// The slide an advance would move to (circular).
    pub fn next_index(&self, slide_count: usize) -> usize {
        (self.active_index + 1) % slide_count
    }

    /// Start an eased scroll towards `index`.
    pub fn begin_animated_scroll(&mut self, index: usize, page_width: f32) {
        self.scroll_transition = Some(Transition::new(
            self.scroll_offset,
            index as f32 * page_width,
            SCROLL_ANIMATION,
            EasingFunction::EaseOutCubic,
        ));
    }

    /// Drop any in-flight programmatic scroll. Returns whether one existed.
    pub fn cancel_scroll(&mut self) -> bool {
        self.scroll_transition.take().is_some()
    }

    /// True when the strip rests on a page boundary for `active_index`.
    pub fn is_aligned(&self, page_width: f32) -> bool {
        (self.scroll_offset - self.active_index as f32 * page_width).abs()
            < 0.5
    }

    /// Record a viewport report. Returns the newly majority-visible index
    /// the first time it changes, mirroring a "slide revealed" event.
    pub fn observe_scroll(
        &mut self,
        offset: f32,
        page_width: f32,
        slide_count: usize,
    ) -> Option<usize> {
        self.scroll_offset = offset;

        let majority = majority_index(offset, page_width, slide_count);
        if majority == self.last_majority {
            return None;
        }

        self.last_majority = majority;
        Some(majority)
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the slide covering at least half of the viewport.
pub fn majority_index(
    offset: f32,
    page_width: f32,
    slide_count: usize,
) -> usize {
    if page_width <= 0.0 || slide_count == 0 {
        return 0;
    }

    let nearest = (offset / page_width).round().max(0.0) as usize;
    nearest.min(slide_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: f32 = 430.0;

    #[test]
    fn majority_flips_at_half_a_page() {
        assert_eq!(majority_index(0.0, PAGE, 4), 0);
        assert_eq!(majority_index(PAGE * 0.49, PAGE, 4), 0);
        assert_eq!(majority_index(PAGE * 0.51, PAGE, 4), 1);
        assert_eq!(majority_index(PAGE, PAGE, 4), 1);
        assert_eq!(majority_index(PAGE * 3.0, PAGE, 4), 3);
    }

    #[test]
    fn majority_is_clamped_to_the_deck() {
        assert_eq!(majority_index(PAGE * 10.0, PAGE, 4), 3);
        assert_eq!(majority_index(-50.0, PAGE, 4), 0);
        assert_eq!(majority_index(100.0, 0.0, 4), 0);
    }

    #[test]
    fn next_index_wraps_around() {
        let mut carousel = CarouselState::new();
        assert_eq!(carousel.next_index(4), 1);

        carousel.active_index = 3;
        assert_eq!(carousel.next_index(4), 0);

        carousel.active_index = 0;
        assert_eq!(carousel.next_index(1), 0);
    }

    #[test]
    fn observe_scroll_reports_each_crossing_once() {
        let mut carousel = CarouselState::new();

        assert_eq!(carousel.observe_scroll(10.0, PAGE, 4), None);
        assert_eq!(carousel.observe_scroll(PAGE * 0.6, PAGE, 4), Some(1));
        assert_eq!(carousel.observe_scroll(PAGE * 0.7, PAGE, 4), None);
        assert_eq!(carousel.observe_scroll(PAGE * 2.1, PAGE, 4), Some(2));
        assert_eq!(carousel.observe_scroll(PAGE * 0.2, PAGE, 4), Some(0));
    }

    #[test]
    fn reset_restores_the_mounted_configuration() {
        let mut carousel = CarouselState::new();
        carousel.active_index = 2;
        carousel.suspended = true;
        carousel.begin_animated_scroll(3, PAGE);
        carousel.observe_scroll(PAGE * 2.0, PAGE, 4);

        carousel.reset();

        assert_eq!(carousel.active_index, 0);
        assert!(!carousel.suspended);
        assert_eq!(carousel.scroll_offset, 0.0);
        assert!(carousel.scroll_transition.is_none());
        assert_eq!(carousel.observe_scroll(PAGE * 0.8, PAGE, 4), Some(1));
    }

    #[test]
    fn alignment_tracks_the_active_page() {
        let mut carousel = CarouselState::new();
        assert!(carousel.is_aligned(PAGE));

        carousel.scroll_offset = 200.0;
        assert!(!carousel.is_aligned(PAGE));

        carousel.active_index = 1;
        carousel.scroll_offset = PAGE;
        assert!(carousel.is_aligned(PAGE));
    }
}
