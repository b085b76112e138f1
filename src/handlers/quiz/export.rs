use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::{
    extractors::AuthGuard,
    grader::GradedDetail,
    names,
    rejections::{AppError, ResultExt},
    report, views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn download_quiz_pdf(
    guard: AuthGuard,
    State(state): State<AppState>,
) -> Result<axum::response::Response, AppError> {
    let Some(export) = state
        .db
        .export_state(&guard.session_id)
        .await
        .reject("failed to load export state")?
    else {
        return Ok(no_data_page(&guard).into_response());
    };

    let quiz = state
        .db
        .get_quiz_by_id(export.quiz_id)
        .await
        .reject("failed to load quiz")?
        .ok_or(AppError::NotFound)?;

    let bytes =
        report::quiz_pdf(&quiz.title, &quiz.questions).reject("failed to render quiz pdf")?;

    Ok(pdf_response(bytes, names::QUIZ_PDF_FILENAME))
}

pub(crate) async fn download_result_pdf(
    guard: AuthGuard,
    State(state): State<AppState>,
) -> Result<axum::response::Response, AppError> {
    let export = state
        .db
        .export_state(&guard.session_id)
        .await
        .reject("failed to load export state")?;

    // The graded fields are only present once a submission has been scored
    // in this session.
    let Some((export, details_json, score, total)) = export.and_then(|e| {
        let details = e.details.clone()?;
        let score = e.score?;
        let total = e.total?;
        Some((e, details, score, total))
    }) else {
        return Ok(no_data_page(&guard).into_response());
    };

    let quiz = state
        .db
        .get_quiz_by_id(export.quiz_id)
        .await
        .reject("failed to load quiz")?
        .ok_or(AppError::NotFound)?;

    let details: Vec<GradedDetail> =
        serde_json::from_str(&details_json).reject("failed to decode graded details")?;

    let bytes = report::result_pdf(
        &quiz.title,
        export.user_name.as_deref().unwrap_or_default(),
        score,
        total,
        &details,
    )
    .reject("failed to render result pdf")?;

    Ok(pdf_response(bytes, names::RESULT_PDF_FILENAME))
}

fn no_data_page(guard: &AuthGuard) -> maud::Markup {
    views::page_with_user(
        "No quiz data",
        &guard.user.display_name,
        quiz_views::no_export_data(),
    )
}

fn pdf_response(bytes: Vec<u8>, filename: &str) -> axum::response::Response {
    (
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
