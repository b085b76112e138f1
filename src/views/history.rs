use maud::{html, Markup};

use crate::db::ResultEntry;
use crate::names;

pub fn history_page(results: &[ResultEntry]) -> Markup {
    html! {
        h1 { "Your quiz history" }
        @if results.is_empty() {
            p { "No graded quizzes yet." }
            p {
                a role="button" href=(names::UPLOAD_URL) { "Upload a document" }
            }
        } @else {
            table {
                thead {
                    tr {
                        th { "Quiz" }
                        th { "Name" }
                        th { "Score" }
                        th { "Taken" }
                    }
                }
                tbody {
                    @for r in results {
                        tr {
                            td { (r.quiz_title) }
                            td { (r.user_name) }
                            td { (r.score) " / " (r.total) }
                            td { (r.created_at) }
                        }
                    }
                }
            }
        }
    }
}
