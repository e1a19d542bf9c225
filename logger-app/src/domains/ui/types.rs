//! Common UI types

/// Top-level screen selector.
///
/// Mutated only by explicit navigation messages; there is no history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Onboarding,
    Login,
    SignUp,
}

impl Screen {
    /// Only the onboarding screen hosts the auto-advancing carousel.
    pub fn hosts_carousel(self) -> bool {
        matches!(self, Screen::Onboarding)
    }
}
