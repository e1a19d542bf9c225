use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::{Size, Task};
use serde::Deserialize;

use logger_model::{DeckError, Slide, SlideDeck};

use crate::common::messages::DomainMessage;
use crate::state::State;

/// Default auto-advance period for the onboarding carousel.
pub const DEFAULT_TICK: Duration = Duration::from_millis(2000);

// Periods below this would make the carousel unusable and the timer hot.
const MIN_TICK: Duration = Duration::from_millis(250);

const DEFAULT_WINDOW: Size = Size {
    width: 430.0,
    height: 780.0,
};

/// Runtime configuration for the app, resolved once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Carousel auto-advance period.
    pub tick_interval: Duration,
    /// Initial window size.
    pub window_size: Size,
    /// Optional TOML file overriding the built-in slide deck.
    pub slides_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK,
            window_size: DEFAULT_WINDOW,
            slides_path: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from `LOGGER_*` environment variables, keeping
    /// defaults for anything unset or malformed.
    pub fn from_environment() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("LOGGER_TICK_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => {
                    config.tick_interval =
                        Duration::from_millis(ms).max(MIN_TICK);
                }
                Err(_) => {
                    log::warn!("ignoring malformed LOGGER_TICK_MS: {raw:?}");
                }
            }
        }

        if let Ok(raw) = std::env::var("LOGGER_WINDOW") {
            match parse_window(&raw) {
                Some(size) => config.window_size = size,
                None => log::warn!("ignoring malformed LOGGER_WINDOW: {raw:?}"),
            }
        }

        if let Ok(path) = std::env::var("LOGGER_SLIDES") {
            config.slides_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn parse_window(raw: &str) -> Option<Size> {
    let (width, height) = raw.split_once('x')?;
    let width = width.trim().parse::<f32>().ok()?;
    let height = height.trim().parse::<f32>().ok()?;

    (width >= 240.0 && height >= 320.0).then(|| Size::new(width, height))
}

/// On-disk layout of a custom slide deck.
#[derive(Debug, Deserialize)]
struct DeckFile {
    slides: Vec<Slide>,
}

/// Failure to load a custom slide deck from disk.
#[derive(Debug, thiserror::Error)]
pub enum DeckLoadError {
    #[error("failed to read slide deck: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse slide deck: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Resolves the slide deck for this run: the configured TOML file when one
/// is set and loadable, otherwise the built-in deck.
pub fn load_deck(config: &AppConfig) -> SlideDeck {
    let Some(path) = config.slides_path.as_deref() else {
        return SlideDeck::builtin();
    };

    match read_deck(path) {
        Ok(deck) => {
            log::info!("loaded {} slides from {}", deck.len(), path.display());
            deck
        }
        Err(err) => {
            log::warn!("falling back to built-in slides: {err}");
            SlideDeck::builtin()
        }
    }
}

fn read_deck(path: &Path) -> Result<SlideDeck, DeckLoadError> {
    let raw = std::fs::read_to_string(path)?;
    let file: DeckFile = toml::from_str(&raw)?;

    Ok(SlideDeck::new(file.slides)?)
}

/// Boot logic shared by the runtime application and tests.
pub fn base_state(config: &AppConfig) -> State {
    State::new(load_deck(config), config)
}

/// Boot logic for the running application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    (base_state(config), Task::none())
}
