use iced::{Settings, Theme};

use crate::domains::ui::theme::LoggerTheme;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the Logger application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let window = window_settings(&config);

    iced::application("Logger", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(window)
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("logger-app".to_string());
    settings.antialiasing = true;
    settings
}

fn window_settings(config: &AppConfig) -> iced::window::Settings {
    iced::window::Settings {
        size: config.window_size,
        min_size: Some(iced::Size::new(360.0, 640.0)),
        resizable: true,
        decorations: true,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    LoggerTheme::theme()
}
