use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn header(user: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li {
                        a href="/" {
                            strong { "Quizforge" }
                        }
                    }
                    li.secondary { (utils::VERSION) }
                }
                @if let Some(name) = user {
                    ul {
                        li { a href=(names::UPLOAD_URL) { "Upload" } }
                        li { a href=(names::HISTORY_URL) { "History" } }
                        li.secondary { (name) }
                        li {
                            form action=(names::LOGOUT_URL) method="post" {
                                button.secondary type="submit" { "Log out" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn shell(title: &str, user: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())

            title { (format!("{title} - Quizforge")) }
        }

        body.container {
            (header(user))
            main { (body) }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    shell(title, None, body)
}

pub fn page_with_user(title: &str, display_name: &str, body: Markup) -> Markup {
    shell(title, Some(display_name), body)
}
