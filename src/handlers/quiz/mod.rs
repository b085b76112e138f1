mod export;
mod history;
mod take;
mod upload;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::AppState;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            get(upload::upload_page).post(upload::upload_post),
        )
        .route("/quiz/{id}", get(take::quiz_page).post(take::submit_quiz))
        .route("/history", get(history::history_page))
        .route("/download-pdf", get(export::download_quiz_pdf))
        .route(
            "/download-quiz-details-pdf",
            get(export::download_result_pdf),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
