use maud::{html, Markup};

use crate::db::StoredQuiz;
use crate::grader::GradedDetail;
use crate::names;

pub fn upload_form() -> Markup {
    html! {
        h1 { "Upload a document" }
        p {
            "Supported: PDF documents. Image and video files are accepted but "
            "text extraction for them is not implemented yet."
        }
        article style="width: fit-content;" {
            form action=(names::UPLOAD_URL) method="post" enctype="multipart/form-data" {
                label {
                    "File"
                    input name="quiz_file"
                          type="file"
                          accept=".pdf,.png,.jpg,.jpeg,.mp4,.mov,.avi"
                          required="true";
                }
                label {
                    "Number of questions"
                    input name="question_count"
                          type="number"
                          min=(names::MIN_QUESTION_COUNT)
                          max=(names::MAX_QUESTION_COUNT)
                          value=(names::DEFAULT_QUESTION_COUNT);
                }
                button type="submit" { "Generate quiz" }
            }
        }
    }
}

pub fn quiz_page(quiz: &StoredQuiz, default_name: &str) -> Markup {
    html! {
        h1 { (quiz.title) }
        p.secondary { "Created " (quiz.created_at) }
        form action=(names::quiz_page_url(&quiz.public_id)) method="post" {
            label {
                "Your name"
                input name="user_name" type="text" value=(default_name);
            }
            @for (i, q) in quiz.questions.iter().enumerate() {
                article {
                    h3 { "Q" (i + 1) ". " (q.question) }
                    fieldset {
                        @for opt in &q.options {
                            label {
                                input type="radio" name=(format!("q{i}")) value=(opt);
                                (opt)
                            }
                        }
                    }
                }
            }
            button type="submit" { "Submit answers" }
        }
        p {
            a href=(names::DOWNLOAD_QUIZ_PDF_URL) { "Download this quiz as PDF" }
        }
    }
}

pub fn result_page(
    quiz_title: &str,
    user_name: &str,
    score: i64,
    total: i64,
    details: &[GradedDetail],
) -> Markup {
    html! {
        h1 { (quiz_title) " - results" }
        article {
            p {
                @if user_name.is_empty() {
                    "Score: "
                } @else {
                    (user_name) ", your score: "
                }
                strong { (score) " / " (total) }
            }
        }
        @for (i, d) in details.iter().enumerate() {
            article class=(if d.is_correct { "graded correct" } else { "graded incorrect" }) {
                h3 { "Q" (i + 1) ". " (d.question) }
                ul {
                    @for opt in &d.options {
                        li { (opt) }
                    }
                }
                p {
                    "Your answer: "
                    @if d.user_answer.is_empty() {
                        em { "(no answer)" }
                    } @else {
                        strong { (d.user_answer) }
                    }
                    @if d.is_correct {
                        " \u{2714}"
                    }
                }
                @if !d.is_correct {
                    p { "Correct answer: " strong { (d.correct_answer) } }
                }
                p.secondary { (d.explanation) }
            }
        }
        p {
            a href=(names::DOWNLOAD_RESULT_PDF_URL) { "Download graded result as PDF" }
            " | "
            a href=(names::HISTORY_URL) { "View history" }
        }
    }
}

/// Shown when an export is requested but the session has not viewed a quiz
/// (or, for the graded export, not submitted one) yet.
pub fn no_export_data() -> Markup {
    html! {
        h1 { "No quiz data" }
        p { "There is no quiz data to export yet. Take a quiz first." }
        p {
            a role="button" href=(names::UPLOAD_URL) { "Upload a document" }
        }
    }
}
