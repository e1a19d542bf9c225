//! Shared components for the account screens

pub mod login;
pub mod signup;

use iced::widget::{
    button, container, text, text_input, Button, Container, Row, Space,
};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::icons::{self, Icon};
use crate::domains::ui::theme::{self, LoggerTheme};

/// Full-screen wrapper keeping the form column phone-shaped on wide
/// windows.
pub fn form_page<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(
        container(content)
            .max_width(480.0)
            .width(Length::Fill)
            .padding([40.0, 20.0]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
}

/// Filled call-to-action spanning the form width.
pub fn primary_button<'a>(
    label: &'a str,
    on_press: DomainMessage,
) -> Button<'a, DomainMessage> {
    button(
        container(text(label).size(16).font(theme::bold()))
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(on_press)
    .width(Length::Fill)
    .padding([18.0, 0.0])
    .style(theme::Button::Primary.style())
}

/// Text input in the brand's bordered style.
pub fn form_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> DomainMessage + 'a,
) -> iced::widget::TextInput<'a, DomainMessage> {
    text_input(placeholder, value)
        .on_input(on_input)
        .padding(16.0)
        .size(16)
        .style(theme::TextInput::style())
}

/// Password input with a trailing eye / eye-off visibility toggle.
pub fn password_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    visible: bool,
    on_input: impl Fn(String) -> DomainMessage + 'a,
    on_toggle: DomainMessage,
) -> Element<'a, DomainMessage> {
    let toggle = button(icons::icon(
        if visible { Icon::EyeOff } else { Icon::Eye },
        24.0,
        LoggerTheme::TEXT_PLACEHOLDER,
    ))
    .on_press(on_toggle)
    .padding(8.0)
    .style(theme::Button::Icon.style());

    Row::new()
        .push(form_input(placeholder, value, on_input).secure(!visible))
        .push(toggle)
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

/// Hairline divider with a small label between the halves.
pub fn divider(label: &str) -> Element<'_, DomainMessage> {
    Row::new()
        .push(hairline())
        .push(text(label).size(14).color(LoggerTheme::TEXT_PLACEHOLDER))
        .push(hairline())
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
}

fn hairline<'a>() -> Element<'a, DomainMessage> {
    container(Space::new(Length::Fill, Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(theme::Container::Hairline.style())
        .into()
}

/// Outlined "Continue with Google" affordance.
pub fn google_button<'a>() -> Element<'a, DomainMessage> {
    button(
        container(
            Row::new()
                .push(icons::icon(Icon::Google, 20.0, LoggerTheme::BLACK))
                .push(text("Continue with Google").size(16))
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .align_x(Alignment::Center),
    )
    .on_press(DomainMessage::Auth(
        crate::domains::auth::messages::Message::GooglePressed,
    ))
    .width(Length::Fill)
    .padding([18.0, 0.0])
    .style(theme::Button::Secondary.style())
    .into()
}

/// Footer row of the "Have an account?" variety: muted prompt plus a bold
/// link.
pub fn footer_link<'a>(
    prompt: &'a str,
    link: &'a str,
    on_press: DomainMessage,
) -> Element<'a, DomainMessage> {
    container(
        Row::new()
            .push(
                text(prompt)
                    .size(14)
                    .color(LoggerTheme::TEXT_PLACEHOLDER),
            )
            .push(
                button(text(link).size(14).font(theme::bold()))
                    .on_press(on_press)
                    .padding(0.0)
                    .style(theme::Button::Text.style()),
            )
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}
