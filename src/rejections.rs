use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::{names, views};

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    NotFound,
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "INPUT_ERROR"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        };

        (code, error_page(message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p {
                a href=(names::LOGIN_URL) { "Log in" }
                " or go "
                a href="/" { "back home" }
                "."
            }
        },
    )
}

/// Map layer errors into an `AppError`, logging the cause. Keeps handlers to
/// one line per fallible step.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}
