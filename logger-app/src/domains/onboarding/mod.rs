//! Onboarding domain
//!
//! The landing screen's auto-advancing slide carousel: its cursor state,
//! reducer, timer subscriptions, and views.

pub mod carousel;
pub mod messages;
pub mod subscriptions;
pub mod update;
pub mod views;

use std::time::Duration;

use logger_model::SlideDeck;

use self::carousel::CarouselState;

/// Onboarding domain state.
#[derive(Debug)]
pub struct OnboardingDomainState {
    /// Immutable slide content, injected at boot.
    pub deck: SlideDeck,
    /// Cursor and scroll bookkeeping for the slide strip.
    pub carousel: CarouselState,
    /// Auto-advance period.
    pub tick_interval: Duration,
}

impl OnboardingDomainState {
    pub fn new(deck: SlideDeck, tick_interval: Duration) -> Self {
        Self {
            deck,
            carousel: CarouselState::new(),
            tick_interval,
        }
    }
}
