#[derive(Debug, Clone)]
pub enum Message {
    // Login form
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginSubmitted,
    ForgotPasswordPressed,

    // Sign-up form
    SignUpEmailChanged(String),
    SignUpPasswordChanged(String),
    SignUpConfirmPasswordChanged(String),
    TogglePasswordVisibility,
    ToggleConfirmPasswordVisibility,
    SignUpSubmitted,

    // Social affordance shared by both screens
    GooglePressed,
}
