//! Root-level subscription composition

use iced::Subscription;

use crate::common::messages::DomainMessage;
use crate::domains::{onboarding, ui};
use crate::state::State;

/// Composes all domain subscriptions into a single batch.
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    Subscription::batch([
        onboarding::subscriptions::subscription(state),
        ui::subscriptions::subscription(state),
    ])
}
