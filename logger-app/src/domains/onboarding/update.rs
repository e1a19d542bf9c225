use std::time::Instant;

use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};
use log::debug;

use crate::common::messages::DomainMessage;
use crate::domains::onboarding::messages::Message;
use crate::state::State;

/// Handle onboarding domain messages.
///
/// The viewport is authoritative over `active_index`: a majority report
/// always lands, while timer advances are requests that can be dropped.
pub fn update_onboarding(
    state: &mut State,
    message: Message,
) -> Task<DomainMessage> {
    match message {
        Message::AutoAdvanceTick => handle_tick(state),
        Message::InteractionStarted => {
            let carousel = &mut state.domains.onboarding.carousel;
            carousel.suspended = true;
            if carousel.cancel_scroll() {
                debug!("user took over mid-scroll; dropping the animation");
            }
            Task::none()
        }
        Message::InteractionEnded => handle_interaction_ended(state),
        Message::Scrolled { offset, page_width } => {
            let slide_count = state.domains.onboarding.deck.len();
            let carousel = &mut state.domains.onboarding.carousel;

            if let Some(index) =
                carousel.observe_scroll(offset, page_width, slide_count)
            {
                debug!("slide {index} is now majority-visible");
                carousel.active_index = index;
            }

            Task::none()
        }
        Message::ScrollFrame(now) => handle_scroll_frame(state, now),
    }
}

/// Realign the strip with `active_index` immediately, dropping any
/// animation in flight. Used on screen entry and window resizes.
pub fn snap_to_active(state: &mut State) -> Task<DomainMessage> {
    let page_width = state.domains.ui.window_size.width;
    let carousel = &mut state.domains.onboarding.carousel;

    carousel.cancel_scroll();
    carousel.scroll_offset = carousel.active_index as f32 * page_width;

    scrollable::scroll_to(
        carousel.scrollable_id.clone(),
        AbsoluteOffset {
            x: carousel.scroll_offset,
            y: 0.0,
        },
    )
}

fn handle_tick(state: &mut State) -> Task<DomainMessage> {
    if !state.domains.ui.screen.hosts_carousel() {
        debug!("auto-advance tick arrived after leaving onboarding; ignoring");
        return Task::none();
    }

    let slide_count = state.domains.onboarding.deck.len();
    let page_width = state.domains.ui.window_size.width;
    let carousel = &mut state.domains.onboarding.carousel;

    if carousel.suspended {
        debug!("auto-advance tick dropped while the user is interacting");
        return Task::none();
    }

    let next = carousel.next_index(slide_count);
    carousel.active_index = next;
    carousel.begin_animated_scroll(next, page_width);

    Task::none()
}

fn handle_interaction_ended(state: &mut State) -> Task<DomainMessage> {
    let page_width = state.domains.ui.window_size.width;
    let carousel = &mut state.domains.onboarding.carousel;

    carousel.suspended = false;

    // Settle on the majority-visible page when a drag released the strip
    // between boundaries.
    if !carousel.is_aligned(page_width) && carousel.scroll_transition.is_none()
    {
        carousel.begin_animated_scroll(carousel.active_index, page_width);
    }

    Task::none()
}

fn handle_scroll_frame(
    state: &mut State,
    now: Instant,
) -> Task<DomainMessage> {
    let carousel = &mut state.domains.onboarding.carousel;

    let Some(transition) = carousel.scroll_transition.clone() else {
        return Task::none();
    };

    carousel.scroll_offset = transition.value_at(now);
    if transition.is_complete(now) {
        carousel.scroll_transition = None;
    }

    scrollable::scroll_to(
        carousel.scrollable_id.clone(),
        AbsoluteOffset {
            x: carousel.scroll_offset,
            y: 0.0,
        },
    )
}
