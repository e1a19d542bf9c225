//! Carousel controller behavior driven through the public reducer API.

use std::time::{Duration, Instant};

use logger_app::app::bootstrap::{base_state, AppConfig};
use logger_app::domains::onboarding::messages::Message as Onboarding;
use logger_app::domains::onboarding::subscriptions::{
    auto_advance_armed, scroll_animation_live,
};
use logger_app::domains::onboarding::update::update_onboarding;
use logger_app::domains::ui::messages::Message as Ui;
use logger_app::domains::ui::types::Screen;
use logger_app::domains::ui::update::update_ui;
use logger_app::state::State;

// Matches the default window width configured in bootstrap.
const PAGE: f32 = 430.0;

fn fresh_state() -> State {
    base_state(&AppConfig::default())
}

fn tick(state: &mut State) {
    let _ = update_onboarding(state, Onboarding::AutoAdvanceTick);
}

fn scrolled(state: &mut State, offset: f32) {
    let _ = update_onboarding(
        state,
        Onboarding::Scrolled {
            offset,
            page_width: PAGE,
        },
    );
}

fn active_index(state: &State) -> usize {
    state.domains.onboarding.carousel.active_index
}

#[test]
fn ticks_advance_modulo_slide_count() {
    let mut state = fresh_state();
    let slide_count = state.domains.onboarding.deck.len();
    assert_eq!(slide_count, 4);

    for n in 1..=2 * slide_count {
        tick(&mut state);
        assert_eq!(active_index(&state), n % slide_count);
    }
}

#[test]
fn first_tick_requests_an_animated_scroll_to_slide_one() {
    let mut state = fresh_state();
    assert_eq!(active_index(&state), 0);

    tick(&mut state);

    assert_eq!(active_index(&state), 1);
    assert!(scroll_animation_live(&state));

    let transition = state
        .domains
        .onboarding
        .carousel
        .scroll_transition
        .as_ref()
        .expect("animated scroll request");
    assert_eq!(transition.target(), PAGE);
}

#[test]
fn four_ticks_wrap_back_to_the_first_slide() {
    let mut state = fresh_state();

    for _ in 0..4 {
        tick(&mut state);
    }

    assert_eq!(active_index(&state), 0);
}

#[test]
fn gestures_suppress_ticks_until_released() {
    let mut state = fresh_state();

    let _ = update_onboarding(&mut state, Onboarding::InteractionStarted);
    tick(&mut state);
    tick(&mut state);
    assert_eq!(active_index(&state), 0);

    let _ = update_onboarding(&mut state, Onboarding::InteractionEnded);
    tick(&mut state);
    assert_eq!(active_index(&state), 1);
}

#[test]
fn release_without_press_changes_nothing() {
    let mut state = fresh_state();

    let _ = update_onboarding(&mut state, Onboarding::InteractionEnded);

    let carousel = &state.domains.onboarding.carousel;
    assert_eq!(carousel.active_index, 0);
    assert!(!carousel.suspended);
    assert_eq!(carousel.scroll_offset, 0.0);
    assert!(carousel.scroll_transition.is_none());
}

#[test]
fn viewport_report_overrides_the_timer_bookkeeping() {
    let mut state = fresh_state();

    tick(&mut state);
    assert_eq!(active_index(&state), 1);

    // User drags straight to the last slide; the report wins even while
    // suspended.
    let _ = update_onboarding(&mut state, Onboarding::InteractionStarted);
    scrolled(&mut state, PAGE * 3.0);
    assert_eq!(active_index(&state), 3);
}

#[test]
fn manual_scroll_updates_the_indicator_at_the_halfway_mark() {
    let mut state = fresh_state();

    scrolled(&mut state, PAGE * 0.4);
    assert_eq!(active_index(&state), 0);

    scrolled(&mut state, PAGE * 0.6);
    assert_eq!(active_index(&state), 1);
}

#[test]
fn index_stays_in_bounds_under_arbitrary_event_mixes() {
    let mut state = fresh_state();
    let slide_count = state.domains.onboarding.deck.len();

    let events = [
        Onboarding::AutoAdvanceTick,
        Onboarding::InteractionStarted,
        Onboarding::Scrolled {
            offset: PAGE * 9.0,
            page_width: PAGE,
        },
        Onboarding::InteractionEnded,
        Onboarding::AutoAdvanceTick,
        Onboarding::AutoAdvanceTick,
        Onboarding::Scrolled {
            offset: -200.0,
            page_width: PAGE,
        },
        Onboarding::InteractionEnded,
        Onboarding::AutoAdvanceTick,
    ];

    for event in events {
        let _ = update_onboarding(&mut state, event);
        assert!(active_index(&state) < slide_count);
    }
}

#[test]
fn stale_tick_after_leaving_the_screen_is_dropped() {
    let mut state = fresh_state();

    tick(&mut state);
    let _ = update_ui(&mut state, Ui::Navigate(Screen::Login));
    assert!(!auto_advance_armed(&state));
    assert!(!scroll_animation_live(&state));

    // A tick already in flight when the subscription died must not mutate
    // anything.
    tick(&mut state);
    assert_eq!(active_index(&state), 1);
}

#[test]
fn reentering_onboarding_resets_the_carousel() {
    let mut state = fresh_state();

    tick(&mut state);
    tick(&mut state);
    let _ = update_onboarding(&mut state, Onboarding::InteractionStarted);

    let _ = update_ui(&mut state, Ui::Navigate(Screen::SignUp));
    let _ = update_ui(&mut state, Ui::Navigate(Screen::Onboarding));

    let carousel = &state.domains.onboarding.carousel;
    assert_eq!(carousel.active_index, 0);
    assert!(!carousel.suspended);
    assert_eq!(carousel.scroll_offset, 0.0);
    assert!(auto_advance_armed(&state));
}

#[test]
fn scroll_frames_ease_towards_the_target_and_finish() {
    let mut state = fresh_state();

    tick(&mut state);
    assert!(scroll_animation_live(&state));

    let _ = update_onboarding(
        &mut state,
        Onboarding::ScrollFrame(Instant::now() + Duration::from_millis(400)),
    );

    let carousel = &state.domains.onboarding.carousel;
    assert!(carousel.scroll_transition.is_none());
    assert!((carousel.scroll_offset - PAGE).abs() < 0.5);
    assert!(!scroll_animation_live(&state));
}

#[test]
fn press_cancels_an_in_flight_animation() {
    let mut state = fresh_state();

    tick(&mut state);
    assert!(scroll_animation_live(&state));

    let _ = update_onboarding(&mut state, Onboarding::InteractionStarted);
    assert!(!scroll_animation_live(&state));
}

#[test]
fn release_between_pages_settles_on_the_majority_slide() {
    let mut state = fresh_state();

    let _ = update_onboarding(&mut state, Onboarding::InteractionStarted);
    scrolled(&mut state, PAGE * 0.3);
    assert_eq!(active_index(&state), 0);

    let _ = update_onboarding(&mut state, Onboarding::InteractionEnded);

    let transition = state
        .domains
        .onboarding
        .carousel
        .scroll_transition
        .as_ref()
        .expect("settling scroll");
    assert_eq!(transition.target(), 0.0);
}
