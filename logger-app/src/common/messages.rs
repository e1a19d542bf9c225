//! Root message type composed from the per-domain message enums.

use crate::domains::auth;
use crate::domains::onboarding;
use crate::domains::ui;

/// Every message the application can process.
#[derive(Debug, Clone)]
pub enum DomainMessage {
    Onboarding(onboarding::messages::Message),
    Auth(auth::messages::Message),
    Ui(ui::messages::Message),
}

impl From<onboarding::messages::Message> for DomainMessage {
    fn from(message: onboarding::messages::Message) -> Self {
        Self::Onboarding(message)
    }
}

impl From<auth::messages::Message> for DomainMessage {
    fn from(message: auth::messages::Message) -> Self {
        Self::Auth(message)
    }
}

impl From<ui::messages::Message> for DomainMessage {
    fn from(message: ui::messages::Message) -> Self {
        Self::Ui(message)
    }
}
