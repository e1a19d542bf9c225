use iced::Task;
use log::info;

use crate::common::messages::DomainMessage;
use crate::domains::onboarding;
use crate::domains::ui::messages::Message;
use crate::state::State;

/// Handle UI domain messages: navigation and window geometry.
pub fn update_ui(state: &mut State, message: Message) -> Task<DomainMessage> {
    match message {
        Message::Navigate(screen) => {
            if state.domains.ui.screen == screen {
                return Task::none();
            }

            info!("navigating to {screen:?}");
            state.domains.ui.screen = screen;

            if screen.hosts_carousel() {
                // Remount semantics: the carousel restarts from the first
                // slide whenever the screen is entered.
                state.domains.onboarding.carousel.reset();
                return onboarding::update::snap_to_active(state);
            }

            Task::none()
        }
        Message::WindowResized(size) => {
            state.domains.ui.window_size = size;

            if state.domains.ui.screen.hosts_carousel() {
                // Page width changed; realign the strip with the cursor.
                return onboarding::update::snap_to_active(state);
            }

            Task::none()
        }
    }
}
