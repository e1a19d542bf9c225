//! Ordered slide collections.

use crate::error::{DeckError, Result};
use crate::slide::{Slide, SlideIcon};

/// An ordered, non-empty list of onboarding slides.
///
/// Non-emptiness is enforced at construction so consumers can index and
/// wrap without runtime checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Builds a deck from a slide list, rejecting an empty one.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Self { slides })
    }

    /// The deck shipped with the app.
    pub fn builtin() -> Self {
        Self {
            slides: vec![
                Slide {
                    id: "1".to_owned(),
                    title: "Track Your Workouts".to_owned(),
                    subtitle: "Log every set and rep with ease.".to_owned(),
                    icon: SlideIcon::Dumbbell,
                },
                Slide {
                    id: "2".to_owned(),
                    title: "See Your Progress".to_owned(),
                    subtitle: "Visualize your journey and smash your goals."
                        .to_owned(),
                    icon: SlideIcon::TrendingUp,
                },
                Slide {
                    id: "3".to_owned(),
                    title: "Compete & Climb".to_owned(),
                    subtitle: "See how you stack up against others.".to_owned(),
                    icon: SlideIcon::BarChart,
                },
                Slide {
                    id: "4".to_owned(),
                    title: "Build Your Streaks".to_owned(),
                    subtitle: "Stay consistent and watch your progress soar."
                        .to_owned(),
                    icon: SlideIcon::Flame,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(SlideDeck::new(Vec::new()), Err(DeckError::Empty));
    }

    #[test]
    fn builtin_deck_has_four_slides_in_order() {
        let deck = SlideDeck::builtin();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.get(0).map(|s| s.icon), Some(SlideIcon::Dumbbell));
        assert_eq!(deck.get(3).map(|s| s.icon), Some(SlideIcon::Flame));
        assert_eq!(
            deck.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3", "4"]
        );
    }

    #[test]
    fn single_slide_deck_is_valid() {
        let slides = vec![Slide {
            id: "only".to_owned(),
            title: "Welcome".to_owned(),
            subtitle: "One page.".to_owned(),
            icon: SlideIcon::Flame,
        }];

        let deck = SlideDeck::new(slides).expect("non-empty deck");
        assert_eq!(deck.len(), 1);
        assert!(!deck.is_empty());
    }
}
