use axum::extract::State;

use crate::{
    extractors::AuthGuard,
    rejections::{AppError, ResultExt},
    views,
    views::history as history_views,
    AppState,
};

pub(crate) async fn history_page(
    guard: AuthGuard,
    State(state): State<AppState>,
) -> Result<maud::Markup, AppError> {
    let results = state
        .db
        .results_for_user(guard.user.id)
        .await
        .reject("failed to load history")?;

    Ok(views::page_with_user(
        "History",
        &guard.user.display_name,
        history_views::history_page(&results),
    ))
}
