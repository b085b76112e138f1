use std::collections::HashMap;

use axum::extract::{Form, Path, State};

use crate::{
    extractors::AuthGuard,
    grader,
    rejections::{AppError, ResultExt},
    views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn quiz_page(
    guard: AuthGuard,
    State(state): State<AppState>,
    Path(public_id): Path<String>,
) -> Result<maud::Markup, AppError> {
    let quiz = state
        .db
        .get_quiz(&public_id)
        .await
        .reject("failed to load quiz")?
        .ok_or(AppError::NotFound)?;

    // Viewing a quiz makes it the session's export target and invalidates
    // any previously graded result.
    state
        .db
        .set_viewed_quiz(&guard.session_id, quiz.id)
        .await
        .reject("failed to update export state")?;

    Ok(views::page_with_user(
        &quiz.title,
        &guard.user.display_name,
        quiz_views::quiz_page(&quiz, &guard.user.display_name),
    ))
}

pub(crate) async fn submit_quiz(
    guard: AuthGuard,
    State(state): State<AppState>,
    Path(public_id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<maud::Markup, AppError> {
    let quiz = state
        .db
        .get_quiz(&public_id)
        .await
        .reject("failed to load quiz")?
        .ok_or(AppError::NotFound)?;

    let user_name = fields
        .get("user_name")
        .map(|n| n.trim())
        .unwrap_or_default()
        .to_string();

    // Radio groups are named q0..qN; unanswered questions simply have no
    // entry in the form data.
    let answers: Vec<String> = (0..quiz.questions.len())
        .map(|i| fields.get(&format!("q{i}")).cloned().unwrap_or_default())
        .collect();

    let graded = grader::grade(&quiz.questions, &answers);

    state
        .db
        .insert_result(quiz.id, guard.user.id, &user_name, graded.score, graded.total)
        .await
        .reject("failed to store quiz result")?;

    let details_json =
        serde_json::to_string(&graded.details).reject("failed to encode graded details")?;
    state
        .db
        .set_graded_result(
            &guard.session_id,
            quiz.id,
            &user_name,
            graded.score,
            graded.total,
            &details_json,
        )
        .await
        .reject("failed to update export state")?;

    Ok(views::page_with_user(
        "Results",
        &guard.user.display_name,
        quiz_views::result_page(
            &quiz.title,
            &user_name,
            graded.score,
            graded.total,
            &graded.details,
        ),
    ))
}
