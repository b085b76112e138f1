use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    services::auth::{LoginOutcome, RegisterOutcome},
    utils, views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/login", get(login_page).post(login_post))
        .route("/register", get(register_page).post(register_post))
        .route("/logout", post(logout_post))
}

async fn homepage(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<axum::response::Response, AppError> {
    if let Some(session_id) = jar
        .get(names::USER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        if let Ok(Some(user)) = state.db.get_user_by_session(&session_id).await {
            return Ok(views::page_with_user(
                "Home",
                &user.display_name,
                homepage_views::home(&user.display_name),
            )
            .into_response());
        }
    }

    // Not logged in: everything interesting requires an account.
    Ok(Redirect::to(names::LOGIN_URL).into_response())
}

async fn login_page() -> maud::Markup {
    views::page("Log In", homepage_views::login(homepage_views::LoginState::NoError))
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    Form(body): Form<LoginBody>,
) -> Result<axum::response::Response, AppError> {
    let outcome = state
        .auth
        .login(&body.email, &body.password)
        .await
        .reject("could not log in")?;

    match outcome {
        LoginOutcome::Success(token) => {
            let cookie = utils::cookie(
                names::USER_SESSION_COOKIE_NAME,
                &token,
                state.secure_cookies,
            );
            let mut headers = HeaderMap::new();
            headers.insert(SET_COOKIE, cookie.parse().unwrap());

            Ok((headers, Redirect::to("/")).into_response())
        }
        LoginOutcome::InvalidCredentials => Ok(views::page(
            "Log In",
            homepage_views::login(homepage_views::LoginState::InvalidCredentials),
        )
        .into_response()),
    }
}

async fn register_page() -> maud::Markup {
    views::page(
        "Register",
        homepage_views::register(homepage_views::RegisterState::NoError),
    )
}

#[derive(Deserialize)]
struct RegisterBody {
    email: String,
    display_name: String,
    password: String,
}

async fn register_post(
    State(state): State<AppState>,
    Form(body): Form<RegisterBody>,
) -> Result<axum::response::Response, AppError> {
    let outcome = state
        .auth
        .register(
            body.email.trim(),
            &body.password,
            body.display_name.trim(),
        )
        .await
        .reject("could not register user")?;

    let error_state = match outcome {
        RegisterOutcome::Success => {
            return Ok(Redirect::to(names::LOGIN_URL).into_response());
        }
        RegisterOutcome::EmptyFields => homepage_views::RegisterState::EmptyFields,
        RegisterOutcome::EmailTaken => homepage_views::RegisterState::EmailTaken,
        RegisterOutcome::WeakPassword => homepage_views::RegisterState::WeakPassword,
    };

    Ok(views::page("Register", homepage_views::register(error_state)).into_response())
}

async fn logout_post(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<axum::response::Response, AppError> {
    if let Some(session_id) = jar
        .get(names::USER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        state
            .auth
            .logout(&session_id)
            .await
            .reject("could not log out")?;
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        utils::expired_cookie(names::USER_SESSION_COOKIE_NAME)
            .parse()
            .unwrap(),
    );

    Ok((headers, Redirect::to(names::LOGIN_URL)).into_response())
}
