//! Root-level update dispatch

use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::{auth, onboarding, ui};
use crate::state::State;

/// Routes each message to the domain that owns it.
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    match message {
        DomainMessage::Onboarding(message) => {
            onboarding::update::update_onboarding(state, message)
        }
        DomainMessage::Auth(message) => auth::update::update_auth(state, message),
        DomainMessage::Ui(message) => ui::update::update_ui(state, message),
    }
}
