use iced::event::{self, Event};
use iced::{window, Subscription};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message;
use crate::state::State;

pub fn subscription(_state: &State) -> Subscription<DomainMessage> {
    event::listen_with(window_event_filter)
}

fn window_event_filter(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<DomainMessage> {
    match event {
        Event::Window(window::Event::Resized(size)) => {
            Some(DomainMessage::Ui(Message::WindowResized(size)))
        }
        _ => None,
    }
}
