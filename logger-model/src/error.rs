use thiserror::Error;

/// Errors raised while constructing model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// A deck must always have a slide to display.
    #[error("slide deck must contain at least one slide")]
    Empty,
}

/// Convenience alias for model construction results.
pub type Result<T> = std::result::Result<T, DeckError>;
