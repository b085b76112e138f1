pub mod ai;
pub mod db;
pub mod extract;
pub mod extractors;
pub mod grader;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod report;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::Router;

use crate::ai::QuestionSource;
use crate::db::Db;
use crate::services::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub auth: AuthService<Db>,
    pub questions: Arc<QuestionSource>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: Db, questions: QuestionSource, secure_cookies: bool) -> Self {
        Self {
            auth: AuthService::new(db.clone()),
            db,
            questions: Arc::new(questions),
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .nest("/static", statics::routes())
        .with_state(state)
}
