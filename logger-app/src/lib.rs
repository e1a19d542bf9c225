//! Logger desktop application library.
//!
//! This crate contains the desktop app's library surfaces used by the
//! executable in `src/main.rs`. Modules here are application glue (state,
//! update, view, subscriptions) and the UI domains: the onboarding slide
//! carousel and the static account forms.
//!
//! Notes
//! - Most consumers should use the `logger-app` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod common;
pub mod domains;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
