use iced::Task;
use log::info;

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages::Message;
use crate::state::State;

/// Handle auth domain messages.
///
/// Field edits are stored verbatim; the submit-shaped messages only log,
/// since no authentication backend exists.
pub fn update_auth(state: &mut State, message: Message) -> Task<DomainMessage> {
    let auth = &mut state.domains.auth;

    match message {
        Message::LoginEmailChanged(value) => auth.login.email = value,
        Message::LoginPasswordChanged(value) => auth.login.password = value,
        Message::LoginSubmitted => {
            info!("login pressed; authentication is not wired up");
        }
        Message::ForgotPasswordPressed => {
            info!("forgot-password pressed; recovery is not wired up");
        }

        Message::SignUpEmailChanged(value) => auth.signup.email = value,
        Message::SignUpPasswordChanged(value) => auth.signup.password = value,
        Message::SignUpConfirmPasswordChanged(value) => {
            auth.signup.confirm_password = value;
        }
        Message::TogglePasswordVisibility => {
            auth.signup.show_password = !auth.signup.show_password;
        }
        Message::ToggleConfirmPasswordVisibility => {
            auth.signup.show_confirm_password =
                !auth.signup.show_confirm_password;
        }
        Message::SignUpSubmitted => {
            info!("sign-up pressed; registration is not wired up");
        }

        Message::GooglePressed => {
            info!("google sign-in pressed; social login is not wired up");
        }
    }

    Task::none()
}
