use maud::{html, Markup};

use crate::names;

pub fn home(display_name: &str) -> Markup {
    html! {
        section {
            h1 { "Welcome back, " (display_name) "." }
            p {
                "Upload a document and Quizforge turns it into a multiple-choice quiz, "
                "grades your answers, and exports everything as a PDF."
            }
            div.cta {
                a role="button" href=(names::UPLOAD_URL) { "Upload a document" }
                a role="button" class="outline" href=(names::HISTORY_URL) { "View your history" }
            }
        }
    }
}

pub enum LoginState {
    NoError,
    InvalidCredentials,
}

pub fn login(state: LoginState) -> Markup {
    let error_msg = match state {
        LoginState::NoError => None,
        LoginState::InvalidCredentials => Some("Invalid credentials"),
    };

    html! {
        h1 { "Log in" }
        article style="width: fit-content;" {
            form action=(names::LOGIN_URL) method="post" {
                label {
                    "Email"
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          placeholder="Email";
                }
                label {
                    "Password"
                    input name="password"
                          type="password"
                          autocomplete="current-password"
                          required="true"
                          placeholder="Password";
                }
                @if let Some(msg) = error_msg {
                    p.error { (msg) }
                }
                button type="submit" { "Log in" }
            }
            p {
                "No account yet? "
                a href=(names::REGISTER_URL) { "Register" }
            }
        }
    }
}

pub enum RegisterState {
    NoError,
    EmptyFields,
    EmailTaken,
    WeakPassword,
}

pub fn register(state: RegisterState) -> Markup {
    let error_msg = match state {
        RegisterState::NoError => None,
        RegisterState::EmptyFields => Some("Please fill in all fields"),
        RegisterState::EmailTaken => Some("That email is already registered"),
        RegisterState::WeakPassword => Some("Password must be at least 8 characters"),
    };

    html! {
        h1 { "Register" }
        article style="width: fit-content;" {
            form action=(names::REGISTER_URL) method="post" {
                label {
                    "Email"
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          placeholder="Email";
                }
                label {
                    "Display name"
                    input name="display_name"
                          type="text"
                          autocomplete="name"
                          required="true"
                          placeholder="Display name";
                }
                label {
                    "Password"
                    input name="password"
                          type="password"
                          autocomplete="new-password"
                          required="true"
                          placeholder="Password";
                }
                @if let Some(msg) = error_msg {
                    p.error { (msg) }
                }
                button type="submit" { "Register" }
            }
            p {
                "Already have an account? "
                a href=(names::LOGIN_URL) { "Log in" }
            }
        }
    }
}
