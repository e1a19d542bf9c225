use iced::Size;

use crate::domains::ui::types::Screen;

#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the top-level screen.
    Navigate(Screen),
    /// The host window changed size.
    WindowResized(Size),
}
