use logger_model::SlideDeck;

use crate::app::AppConfig;
use crate::domains::auth::AuthDomainState;
use crate::domains::onboarding::OnboardingDomainState;
use crate::domains::ui::UiDomainState;

/// Top-level application state.
///
/// All mutation happens through the root `update` function; views and
/// subscriptions only ever borrow this immutably.
#[derive(Debug)]
pub struct State {
    pub domains: Domains,
}

/// Per-domain state registry.
#[derive(Debug)]
pub struct Domains {
    pub onboarding: OnboardingDomainState,
    pub auth: AuthDomainState,
    pub ui: UiDomainState,
}

impl State {
    pub fn new(deck: SlideDeck, config: &AppConfig) -> Self {
        Self {
            domains: Domains {
                onboarding: OnboardingDomainState::new(
                    deck,
                    config.tick_interval,
                ),
                auth: AuthDomainState::default(),
                ui: UiDomainState::new(config.window_size),
            },
        }
    }
}
