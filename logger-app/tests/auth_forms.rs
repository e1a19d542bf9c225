//! Account form state: edits stick, toggles flip, submits stay inert.

use logger_app::app::bootstrap::{base_state, AppConfig};
use logger_app::domains::auth::messages::Message as Auth;
use logger_app::domains::auth::update::update_auth;
use logger_app::state::State;

fn fresh_state() -> State {
    base_state(&AppConfig::default())
}

fn send(state: &mut State, message: Auth) {
    let _ = update_auth(state, message);
}

#[test]
fn login_fields_store_edits_verbatim() {
    let mut state = fresh_state();

    send(
        &mut state,
        Auth::LoginEmailChanged("coach@example.com".to_owned()),
    );
    send(&mut state, Auth::LoginPasswordChanged("hunter2".to_owned()));

    assert_eq!(state.domains.auth.login.email, "coach@example.com");
    assert_eq!(state.domains.auth.login.password, "hunter2");
}

#[test]
fn sign_up_fields_store_edits_verbatim() {
    let mut state = fresh_state();

    send(
        &mut state,
        Auth::SignUpEmailChanged("new@example.com".to_owned()),
    );
    send(&mut state, Auth::SignUpPasswordChanged("abc".to_owned()));
    send(
        &mut state,
        Auth::SignUpConfirmPasswordChanged("abcd".to_owned()),
    );

    let signup = &state.domains.auth.signup;
    assert_eq!(signup.email, "new@example.com");
    assert_eq!(signup.password, "abc");
    // No validation: a mismatched confirmation is stored as-is.
    assert_eq!(signup.confirm_password, "abcd");
}

#[test]
fn password_visibility_toggles_are_independent() {
    let mut state = fresh_state();

    assert!(!state.domains.auth.signup.show_password);
    assert!(!state.domains.auth.signup.show_confirm_password);

    send(&mut state, Auth::TogglePasswordVisibility);
    assert!(state.domains.auth.signup.show_password);
    assert!(!state.domains.auth.signup.show_confirm_password);

    send(&mut state, Auth::ToggleConfirmPasswordVisibility);
    send(&mut state, Auth::TogglePasswordVisibility);
    assert!(!state.domains.auth.signup.show_password);
    assert!(state.domains.auth.signup.show_confirm_password);
}

#[test]
fn submit_shaped_messages_leave_all_state_untouched() {
    let mut state = fresh_state();

    send(
        &mut state,
        Auth::LoginEmailChanged("coach@example.com".to_owned()),
    );

    send(&mut state, Auth::LoginSubmitted);
    send(&mut state, Auth::SignUpSubmitted);
    send(&mut state, Auth::ForgotPasswordPressed);
    send(&mut state, Auth::GooglePressed);

    assert_eq!(state.domains.auth.login.email, "coach@example.com");
    assert_eq!(state.domains.auth.login.password, "");
    assert_eq!(state.domains.auth.signup.email, "");
    assert_eq!(
        state.domains.ui.screen,
        logger_app::domains::ui::types::Screen::Onboarding
    );
}
