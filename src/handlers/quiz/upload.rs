use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    extract::{self, MediaKind},
    extractors::AuthGuard,
    names,
    rejections::{AppError, ResultExt},
    views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn upload_page(guard: AuthGuard) -> maud::Markup {
    views::page_with_user("Upload", &guard.user.display_name, quiz_views::upload_form())
}

pub(crate) async fn upload_post(
    guard: AuthGuard,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut question_count = names::DEFAULT_QUESTION_COUNT;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("failed to read multipart field: {e}");
        AppError::Input("failed to read multipart field")
    })? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "quiz_file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("failed to read field data: {e}");
                    AppError::Input("failed to read field data")
                })?;
                file = Some((file_name, data.to_vec()));
            }
            "question_count" => {
                let text = field.text().await.map_err(|e| {
                    tracing::error!("failed to read field data: {e}");
                    AppError::Input("failed to read field data")
                })?;
                if let Ok(n) = text.trim().parse::<usize>() {
                    question_count = n;
                }
            }
            _ => {}
        }
    }

    let (file_name, data) = file.ok_or(AppError::Input("missing quiz_file field"))?;
    let question_count =
        question_count.clamp(names::MIN_QUESTION_COUNT, names::MAX_QUESTION_COUNT);

    let kind = MediaKind::from_file_name(&file_name);
    let text = match kind {
        Some(kind) => extract::extract_text(&data, kind),
        None => String::new(),
    };
    let text = if text.trim().is_empty() {
        extract::NO_CONTENT_FALLBACK.to_string()
    } else {
        text
    };

    state
        .db
        .record_upload(
            &file_name,
            kind.map(|k| k.label()).unwrap_or("unknown"),
            data.len() as i64,
        )
        .await
        .reject("failed to record upload")?;

    let questions = state.questions.generate(&text, question_count).await;

    let public_id = state
        .db
        .create_quiz(names::DEFAULT_QUIZ_TITLE, &questions, guard.user.id)
        .await
        .reject("failed to store quiz")?;

    Ok(Redirect::to(&names::quiz_page_url(&public_id)))
}
