//! UI domain
//!
//! Shared UI chrome: the top-level screen selector, window geometry, theme
//! palette, icon assets, and scroll transitions.

pub mod icons;
pub mod messages;
pub mod subscriptions;
pub mod theme;
pub mod transitions;
pub mod types;
pub mod update;

use iced::Size;

use crate::domains::ui::types::Screen;

/// UI domain state.
#[derive(Debug)]
pub struct UiDomainState {
    /// Which top-level screen is rendered.
    pub screen: Screen,
    /// Last known window size; slides are laid out one page per width.
    pub window_size: Size,
}

impl UiDomainState {
    pub fn new(window_size: Size) -> Self {
        Self {
            screen: Screen::default(),
            window_size,
        }
    }
}
