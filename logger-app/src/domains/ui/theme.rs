use iced::widget::{button, container, text_input};
use iced::{theme, Background, Border, Color, Font, Shadow, Theme, font};

/// Light monochrome theme for the Logger brand
#[derive(Debug, Clone, Copy)]
pub struct LoggerTheme;

impl LoggerTheme {
    // Core colors
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0); // #000000
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const BLACK_HOVER: Color = Color::from_rgb(0.13, 0.13, 0.13); // #212121

    // Greys
    pub const SURFACE: Color = Color::from_rgb(0.953, 0.957, 0.965); // #F3F4F6
    pub const BORDER: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB
    pub const DOT_INACTIVE: Color = Color::from_rgb(0.820, 0.835, 0.859); // #D1D5DB

    // Text colors
    pub const TEXT_PRIMARY: Color = Self::BLACK;
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6B7280
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.611, 0.639, 0.686); // #9CA3AF

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::WHITE;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::BLACK;

        Theme::custom("Logger Light".to_string(), palette)
    }
}

/// Bold variant of the default font.
pub fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Heavy weight used by the wordmark.
pub fn black() -> Font {
    Font {
        weight: font::Weight::Black,
        ..Font::DEFAULT
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    /// Filled black call-to-action.
    Primary,
    /// White outline on the brand border grey.
    Secondary,
    /// Bare text link.
    Text,
    /// Bare icon hit target.
    Icon,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        LoggerTheme::BLACK_HOVER
                    }
                    _ => LoggerTheme::BLACK,
                };

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: LoggerTheme::WHITE,
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Secondary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        LoggerTheme::SURFACE
                    }
                    _ => LoggerTheme::WHITE,
                };

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: LoggerTheme::TEXT_PRIMARY,
                    border: Border {
                        color: LoggerTheme::BORDER,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Text => |_, status| {
                let text_color = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        LoggerTheme::TEXT_SECONDARY
                    }
                    _ => LoggerTheme::TEXT_PRIMARY,
                };

                button::Style {
                    background: None,
                    text_color,
                    border: Border::default(),
                    shadow: Shadow::default(),
                }
            },
            Button::Icon => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(Background::Color(LoggerTheme::SURFACE))
                    }
                    _ => None,
                };

                button::Style {
                    background,
                    text_color: LoggerTheme::TEXT_PRIMARY,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    /// Large circular disc behind each slide's hero icon.
    IconDisc,
    /// One-pixel divider line.
    Hairline,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::IconDisc => |_| container::Style {
                background: Some(Background::Color(LoggerTheme::SURFACE)),
                border: Border {
                    // Larger than any disc we render, so always a circle.
                    radius: 9999.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            },
            Container::Hairline => |_| container::Style {
                background: Some(Background::Color(LoggerTheme::BORDER)),
                ..container::Style::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextInput;

impl TextInput {
    pub fn style() -> fn(&Theme, text_input::Status) -> text_input::Style {
        |_, status| {
            let border_color = match status {
                text_input::Status::Focused => LoggerTheme::BLACK,
                text_input::Status::Hovered => LoggerTheme::TEXT_PLACEHOLDER,
                _ => LoggerTheme::BORDER,
            };

            text_input::Style {
                background: Background::Color(LoggerTheme::WHITE),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                icon: LoggerTheme::TEXT_PLACEHOLDER,
                placeholder: LoggerTheme::TEXT_PLACEHOLDER,
                value: LoggerTheme::TEXT_PRIMARY,
                selection: LoggerTheme::DOT_INACTIVE,
            }
        }
    }
}
