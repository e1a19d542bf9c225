//! Login screen

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages::Message;
use crate::domains::auth::views::{
    divider, footer_link, form_input, form_page, google_button, primary_button,
};
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, LoggerTheme};
use crate::domains::ui::types::Screen;
use crate::state::State;

pub fn view_login(state: &State) -> Element<'_, DomainMessage> {
    let form = &state.domains.auth.login;

    let title = container(
        text("Welcome Back")
            .size(28)
            .font(theme::bold())
            .color(LoggerTheme::TEXT_PRIMARY),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center);

    let email = column![
        text("Email").size(16).font(theme::bold()),
        Space::with_height(Length::Fixed(8.0)),
        form_input("Enter your email", &form.email, |value| {
            DomainMessage::Auth(Message::LoginEmailChanged(value))
        }),
    ];

    let password = column![
        text("Password").size(16).font(theme::bold()),
        Space::with_height(Length::Fixed(8.0)),
        form_input("Enter your password", &form.password, |value| {
            DomainMessage::Auth(Message::LoginPasswordChanged(value))
        })
        .secure(true)
        .on_submit(DomainMessage::Auth(Message::LoginSubmitted)),
    ];

    let forgot = container(
        button(text("Forgot Password?").size(14))
            .on_press(DomainMessage::Auth(Message::ForgotPasswordPressed))
            .padding(0.0)
            .style(theme::Button::Text.style()),
    )
    .width(Length::Fill)
    .align_x(Alignment::End);

    let content = column![
        title,
        Space::with_height(Length::Fixed(40.0)),
        email,
        Space::with_height(Length::Fixed(20.0)),
        password,
        Space::with_height(Length::Fixed(12.0)),
        forgot,
        Space::with_height(Length::Fixed(30.0)),
        primary_button("Login", DomainMessage::Auth(Message::LoginSubmitted)),
        Space::with_height(Length::Fixed(30.0)),
        divider("or"),
        Space::with_height(Length::Fixed(30.0)),
        google_button(),
        Space::with_height(Length::Fixed(30.0)),
        footer_link(
            "Don't have an account? ",
            "Sign Up",
            DomainMessage::Ui(UiMessage::Navigate(Screen::SignUp)),
        ),
    ]
    .width(Length::Fill);

    form_page(content).into()
}
