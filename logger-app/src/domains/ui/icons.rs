//! Embedded monochrome icon assets.
//!
//! Icons are bundled SVGs (lucide-style strokes on `currentColor`) tinted
//! at render time through the svg style.

use iced::widget::svg::{self, Svg};
use iced::{Color, Length};

use logger_model::SlideIcon;

static DUMBBELL: &[u8] = include_bytes!("../../../assets/icons/dumbbell.svg");
static TRENDING_UP: &[u8] =
    include_bytes!("../../../assets/icons/trending-up.svg");
static BAR_CHART: &[u8] = include_bytes!("../../../assets/icons/bar-chart.svg");
static FLAME: &[u8] = include_bytes!("../../../assets/icons/flame.svg");
static EYE: &[u8] = include_bytes!("../../../assets/icons/eye.svg");
static EYE_OFF: &[u8] = include_bytes!("../../../assets/icons/eye-off.svg");
static CHEVRON_LEFT: &[u8] =
    include_bytes!("../../../assets/icons/chevron-left.svg");
static GOOGLE: &[u8] = include_bytes!("../../../assets/icons/google.svg");

/// Icons bundled with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Dumbbell,
    TrendingUp,
    BarChart,
    Flame,
    Eye,
    EyeOff,
    ChevronLeft,
    Google,
}

impl Icon {
    fn bytes(self) -> &'static [u8] {
        match self {
            Icon::Dumbbell => DUMBBELL,
            Icon::TrendingUp => TRENDING_UP,
            Icon::BarChart => BAR_CHART,
            Icon::Flame => FLAME,
            Icon::Eye => EYE,
            Icon::EyeOff => EYE_OFF,
            Icon::ChevronLeft => CHEVRON_LEFT,
            Icon::Google => GOOGLE,
        }
    }

    pub fn handle(self) -> svg::Handle {
        svg::Handle::from_memory(self.bytes())
    }
}

impl From<SlideIcon> for Icon {
    fn from(icon: SlideIcon) -> Self {
        match icon {
            SlideIcon::Dumbbell => Icon::Dumbbell,
            SlideIcon::TrendingUp => Icon::TrendingUp,
            SlideIcon::BarChart => Icon::BarChart,
            SlideIcon::Flame => Icon::Flame,
        }
    }
}

/// Square icon widget tinted with the given color.
pub fn icon<'a>(icon: Icon, size: f32, color: Color) -> Svg<'a> {
    Svg::new(icon.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
