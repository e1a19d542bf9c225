use std::time::Duration;

use iced::Subscription;

use crate::common::messages::DomainMessage;
use crate::domains::onboarding::messages::Message;
use crate::state::State;

/// Cadence of scroll-animation frames (~120 fps).
const FRAME_INTERVAL: Duration = Duration::from_nanos(8_333_333);

pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = Vec::new();

    if auto_advance_armed(state) {
        subscriptions.push(
            iced::time::every(state.domains.onboarding.tick_interval)
                .map(|_| DomainMessage::Onboarding(Message::AutoAdvanceTick)),
        );
    }

    if scroll_animation_live(state) {
        subscriptions.push(
            iced::time::every(FRAME_INTERVAL)
                .map(|now| DomainMessage::Onboarding(Message::ScrollFrame(now))),
        );
    }

    Subscription::batch(subscriptions)
}

/// The advance timer exists exactly while the onboarding screen is shown.
/// Suspension does not disarm it; suppressed ticks are dropped in the
/// reducer instead of queueing.
pub fn auto_advance_armed(state: &State) -> bool {
    state.domains.ui.screen.hosts_carousel()
}

/// Frame pulses run only while a programmatic scroll is easing.
pub fn scroll_animation_live(state: &State) -> bool {
    state.domains.ui.screen.hosts_carousel()
        && state.domains.onboarding.carousel.scroll_transition.is_some()
}
