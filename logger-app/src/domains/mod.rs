//! Domain modules for the Logger app
//!
//! This module organizes the application into focused, testable domains:
//! the onboarding slide carousel, the static account forms, and the shared
//! UI chrome (screen selector, theme, icons).

pub mod auth;
pub mod onboarding;
pub mod ui;
