//! Root-level view composition

use iced::Element;

use crate::common::messages::DomainMessage;
use crate::domains::auth::views::{login, signup};
use crate::domains::onboarding;
use crate::domains::ui::types::Screen;
use crate::state::State;

/// Renders whichever top-level screen is selected.
pub fn view(state: &State) -> Element<'_, DomainMessage> {
    match state.domains.ui.screen {
        Screen::Onboarding => onboarding::views::view_onboarding(state),
        Screen::Login => login::view_login(state),
        Screen::SignUp => signup::view_sign_up(state),
    }
}
