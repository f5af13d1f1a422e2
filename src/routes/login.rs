use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use validator::ValidateEmail;

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: SecretString,
}

/// Stand-in for a real sign in: any well-formed email with a non-empty
/// password is let through to the dashboard. Nothing is checked or stored.
#[tracing::instrument(
    name = "Logging in",
    skip(form),
    fields(user_email = %form.email)
)]
pub async fn login(Form(form): Form<LoginForm>) -> Result<Redirect, LoginError> {
    if !form.email.validate_email() {
        return Err(LoginError::InvalidEmail(form.email));
    }
    if form.password.expose_secret().is_empty() {
        return Err(LoginError::MissingPassword);
    }

    tracing::info!("Login accepted");
    Ok(Redirect::to("/dashboard"))
}

#[derive(thiserror::Error, Debug)]
pub enum LoginError {
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
    #[error("password is missing")]
    MissingPassword,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        StatusCode::BAD_REQUEST.into_response()
    }
}
