//! Sign-up screen

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages::Message;
use crate::domains::auth::views::{
    divider, footer_link, form_input, form_page, google_button,
    password_input, primary_button,
};
use crate::domains::ui::icons::{self, Icon};
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, LoggerTheme};
use crate::domains::ui::types::Screen;
use crate::state::State;

pub fn view_sign_up(state: &State) -> Element<'_, DomainMessage> {
    let form = &state.domains.auth.signup;

    let back = container(
        button(icons::icon(Icon::ChevronLeft, 28.0, LoggerTheme::BLACK))
            .on_press(DomainMessage::Ui(UiMessage::Navigate(
                Screen::Onboarding,
            )))
            .padding(4.0)
            .style(theme::Button::Icon.style()),
    )
    .width(Length::Fill)
    .align_x(Alignment::Start);

    let title = text("Create an account")
        .size(28)
        .font(theme::bold())
        .color(LoggerTheme::TEXT_PRIMARY);

    let content = column![
        back,
        Space::with_height(Length::Fixed(20.0)),
        title,
        Space::with_height(Length::Fixed(40.0)),
        form_input("Email", &form.email, |value| {
            DomainMessage::Auth(Message::SignUpEmailChanged(value))
        }),
        Space::with_height(Length::Fixed(16.0)),
        password_input(
            "Password",
            &form.password,
            form.show_password,
            |value| DomainMessage::Auth(Message::SignUpPasswordChanged(value)),
            DomainMessage::Auth(Message::TogglePasswordVisibility),
        ),
        Space::with_height(Length::Fixed(16.0)),
        password_input(
            "Confirm Password",
            &form.confirm_password,
            form.show_confirm_password,
            |value| {
                DomainMessage::Auth(Message::SignUpConfirmPasswordChanged(
                    value,
                ))
            },
            DomainMessage::Auth(Message::ToggleConfirmPasswordVisibility),
        ),
        Space::with_height(Length::Fixed(30.0)),
        primary_button(
            "Sign Up",
            DomainMessage::Auth(Message::SignUpSubmitted),
        ),
        Space::with_height(Length::Fixed(30.0)),
        divider("OR"),
        Space::with_height(Length::Fixed(30.0)),
        google_button(),
        Space::with_height(Length::Fixed(30.0)),
        footer_link(
            "Already have an account? ",
            "Log In",
            DomainMessage::Ui(UiMessage::Navigate(Screen::Login)),
        ),
    ]
    .width(Length::Fill);

    form_page(content).into()
}
