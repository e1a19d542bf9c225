//! Static onboarding slide content.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One onboarding page: a hero icon, a title, and a supporting line.
///
/// Slides are created once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: SlideIcon,
}

/// Presentational reference to an icon bundled with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SlideIcon {
    Dumbbell,
    TrendingUp,
    BarChart,
    Flame,
}
