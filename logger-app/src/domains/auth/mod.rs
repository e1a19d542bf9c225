//! Auth domain
//!
//! The static login and sign-up screens. Inputs hold only their displayed
//! text; nothing here validates or submits anything.

pub mod messages;
pub mod update;
pub mod views;

/// Auth domain state: one record per form.
#[derive(Debug, Default)]
pub struct AuthDomainState {
    pub login: LoginForm,
    pub signup: SignUpForm,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
}
