mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use quizforge::ai::{placeholder_questions, QuestionSource};
use quizforge::db::Db;
use quizforge::{names, router, AppState};
use tower::ServiceExt;

fn app(db: Db) -> axum::Router {
    router(AppState::new(db, QuestionSource::Offline, false))
}

async fn signed_in_user(db: &Db) -> (i64, String) {
    let user_id = db
        .create_user("test@example.com", "long-enough-password", "Test User")
        .await
        .expect("create user");
    let session = db.create_user_session(user_id).await.expect("create session");
    (user_id, session)
}

fn session_cookie(session: &str) -> String {
    format!("{}={}", names::USER_SESSION_COOKIE_NAME, session)
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8_lossy(&bytes).to_string()
}

#[tokio::test]
async fn protected_routes_reject_requests_without_session_cookie() {
    let app = app(common::create_test_db().await);

    let cases = [
        (Method::GET, "/upload"),
        (Method::GET, "/quiz/some-id"),
        (Method::GET, "/history"),
        (Method::GET, "/download-pdf"),
        (Method::GET, "/download-quiz-details-pdf"),
    ];

    for (method, uri) in cases {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request build should succeed"),
            )
            .await
            .expect("router should respond");

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "expected UNAUTHORIZED for {uri}",
        );
    }
}

#[tokio::test]
async fn anonymous_homepage_redirects_to_login() {
    let app = app(common::create_test_db().await);

    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        names::LOGIN_URL
    );
}

#[tokio::test]
async fn login_with_bad_credentials_shows_inline_error() {
    let db = common::create_test_db().await;
    signed_in_user(&db).await;
    let app = app(db);

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("email=test%40example.com&password=wrong"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Invalid credentials"));
}

#[tokio::test]
async fn login_with_valid_credentials_sets_cookie_and_redirects() {
    let db = common::create_test_db().await;
    signed_in_user(&db).await;
    let app = app(db);

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "email=test%40example.com&password=long-enough-password",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with(names::USER_SESSION_COOKIE_NAME));
}

#[tokio::test]
async fn register_then_duplicate_email_shows_inline_error() {
    let db = common::create_test_db().await;
    let app = app(db);

    let body = "email=new%40example.com&display_name=New&password=long-enough-password";

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/register")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/register")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("already registered"));
}

#[tokio::test]
async fn export_without_viewing_a_quiz_returns_no_data_page() {
    let db = common::create_test_db().await;
    let (_, session) = signed_in_user(&db).await;
    let app = app(db);

    for uri in [names::DOWNLOAD_QUIZ_PDF_URL, names::DOWNLOAD_RESULT_PDF_URL] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::COOKIE, session_cookie(&session))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "expected OK for {uri}");
        assert!(
            body_string(resp).await.contains("No quiz data"),
            "expected no-data page for {uri}",
        );
    }
}

#[tokio::test]
async fn viewing_grading_and_exporting_a_quiz() {
    let db = common::create_test_db().await;
    let (user_id, session) = signed_in_user(&db).await;

    let questions = placeholder_questions(2);
    let public_id = db
        .create_quiz("AI Generated Quiz", &questions, user_id)
        .await
        .unwrap();

    let app = app(db.clone());
    let cookie = session_cookie(&session);

    // Viewing the quiz page arms the quiz-only export.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(names::quiz_page_url(&public_id))
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Sample Question 1 (fallback)"));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(names::DOWNLOAD_QUIZ_PDF_URL)
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    // The graded export only unlocks after a submission.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(names::DOWNLOAD_RESULT_PDF_URL)
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(body_string(resp).await.contains("No quiz data"));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(names::quiz_page_url(&public_id))
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::COOKIE, &cookie)
                .body(Body::from("user_name=Alice&q0=Option+A1&q1=Option+B2"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Alice"));
    assert!(body.contains("1 / 2"));

    let results = db.results_for_user(user_id).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 1);
    assert_eq!(results[0].total, 2);

    let resp = app
        .oneshot(
            Request::builder()
                .uri(names::DOWNLOAD_RESULT_PDF_URL)
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
}
