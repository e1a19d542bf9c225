//! Landing screen: wordmark, slide strip, page dots, and the two
//! navigation actions.

use iced::widget::{
    button, column, container, mouse_area, scrollable, text, Row, Space,
};
use iced::{Alignment, Element, Length};

use logger_model::Slide;

use crate::common::messages::DomainMessage;
use crate::domains::onboarding::messages::Message;
use crate::domains::ui::icons::{self, Icon};
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, LoggerTheme};
use crate::domains::ui::types::Screen;
use crate::state::State;

pub fn view_onboarding(state: &State) -> Element<'_, DomainMessage> {
    let page_width = state.domains.ui.window_size.width;
    let deck = &state.domains.onboarding.deck;
    let carousel = &state.domains.onboarding.carousel;

    let header = container(text("LOGGER").size(24).font(theme::black()))
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .padding([20.0, 0.0]);

    let slides = Row::with_children(
        deck.iter().map(|slide| view_slide(slide, page_width)),
    );

    let strip = scrollable(slides)
        .id(carousel.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(|viewport| {
            DomainMessage::Onboarding(Message::Scrolled {
                offset: viewport.absolute_offset().x,
                page_width: viewport.bounds().width,
            })
        })
        .width(Length::Fill);

    let strip = mouse_area(strip)
        .on_press(DomainMessage::Onboarding(Message::InteractionStarted))
        .on_release(DomainMessage::Onboarding(Message::InteractionEnded));

    let dots = Row::with_children(
        (0..deck.len()).map(|index| page_dot(index == carousel.active_index)),
    )
    .spacing(8);

    let actions = column![
        action_button("Sign Up", theme::Button::Primary, Screen::SignUp),
        action_button("Login", theme::Button::Secondary, Screen::Login),
    ]
    .spacing(16)
    .padding([0.0, 20.0]);

    column![
        header,
        strip,
        Space::with_height(Length::Fixed(24.0)),
        container(dots).width(Length::Fill).align_x(Alignment::Center),
        Space::with_height(Length::Fill),
        actions,
        Space::with_height(Length::Fixed(20.0)),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_slide(slide: &Slide, page_width: f32) -> Element<'_, DomainMessage> {
    let disc_size = (page_width * 0.6).min(320.0);

    let hero = container(icons::icon(
        Icon::from(slide.icon),
        disc_size * 0.4,
        LoggerTheme::BLACK,
    ))
    .width(Length::Fixed(disc_size))
    .height(Length::Fixed(disc_size))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::Container::IconDisc.style());

    let title = text(slide.title.as_str())
        .size(24)
        .font(theme::bold())
        .color(LoggerTheme::TEXT_PRIMARY);

    let subtitle = text(slide.subtitle.as_str())
        .size(16)
        .color(LoggerTheme::TEXT_SECONDARY);

    container(
        column![
            hero,
            Space::with_height(Length::Fixed(40.0)),
            title,
            Space::with_height(Length::Fixed(10.0)),
            subtitle,
        ]
        .align_x(Alignment::Center)
        .padding([40.0, 40.0]),
    )
    .width(Length::Fixed(page_width))
    .align_x(Alignment::Center)
    .into()
}

fn page_dot(active: bool) -> Element<'static, DomainMessage> {
    container(Space::new(Length::Fixed(8.0), Length::Fixed(8.0)))
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(if active {
                LoggerTheme::BLACK
            } else {
                LoggerTheme::DOT_INACTIVE
            })),
            border: iced::Border {
                radius: 4.0.into(),
                ..iced::Border::default()
            },
            ..iced::widget::container::Style::default()
        })
        .into()
}

fn action_button(
    label: &str,
    kind: theme::Button,
    target: Screen,
) -> Element<'_, DomainMessage> {
    button(
        container(text(label).size(16).font(theme::bold()))
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(DomainMessage::Ui(UiMessage::Navigate(target)))
    .style(kind.style())
    .width(Length::Fill)
    .padding([18.0, 0.0])
    .into()
}
