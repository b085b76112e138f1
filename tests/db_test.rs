mod common;

use common::create_test_db;
use quizforge::ai::placeholder_questions;
use quizforge::db::Db;

async fn create_user(db: &Db, email: &str) -> i64 {
    db.create_user(email, "long-enough-password", "Test User")
        .await
        .expect("failed to create user")
}

#[tokio::test]
async fn test_db_connection() {
    let _db = create_test_db().await;
}

#[tokio::test]
async fn test_user_auth_roundtrip() {
    let db = create_test_db().await;
    create_user(&db, "a@example.com").await;

    assert!(db.email_exists("a@example.com").await.unwrap());
    assert!(!db.email_exists("b@example.com").await.unwrap());

    assert!(db
        .verify_user_password("a@example.com", "long-enough-password")
        .await
        .unwrap());
    assert!(!db
        .verify_user_password("a@example.com", "wrong")
        .await
        .unwrap());
    assert!(!db
        .verify_user_password("nobody@example.com", "long-enough-password")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_user_sessions() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "a@example.com").await;

    let session = db.create_user_session(user_id).await.unwrap();

    let user = db.get_user_by_session(&session).await.unwrap().unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "a@example.com");

    db.delete_user_session(&session).await.unwrap();
    assert!(db.get_user_by_session(&session).await.unwrap().is_none());
}

#[tokio::test]
async fn test_quiz_roundtrip() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "a@example.com").await;

    let questions = placeholder_questions(3);
    let public_id = db
        .create_quiz("AI Generated Quiz", &questions, user_id)
        .await
        .unwrap();

    let quiz = db.get_quiz(&public_id).await.unwrap().unwrap();
    assert_eq!(quiz.public_id, public_id);
    assert_eq!(quiz.title, "AI Generated Quiz");
    assert_eq!(quiz.questions, questions);
    assert!(!quiz.created_at.is_empty());

    let by_id = db.get_quiz_by_id(quiz.id).await.unwrap().unwrap();
    assert_eq!(by_id.public_id, public_id);

    assert!(db.get_quiz("no-such-quiz").await.unwrap().is_none());
}

#[tokio::test]
async fn test_results_are_scoped_per_user() {
    let db = create_test_db().await;
    let alice = create_user(&db, "alice@example.com").await;
    let bob = create_user(&db, "bob@example.com").await;

    let questions = placeholder_questions(2);
    let public_id = db.create_quiz("Quiz", &questions, alice).await.unwrap();
    let quiz = db.get_quiz(&public_id).await.unwrap().unwrap();

    db.insert_result(quiz.id, alice, "Alice", 1, 2).await.unwrap();
    db.insert_result(quiz.id, alice, "Alice", 2, 2).await.unwrap();
    db.insert_result(quiz.id, bob, "Bob", 0, 2).await.unwrap();

    let alice_results = db.results_for_user(alice).await.unwrap();
    assert_eq!(alice_results.len(), 2);
    // Newest first
    assert_eq!(alice_results[0].score, 2);
    assert_eq!(alice_results[1].score, 1);
    assert!(alice_results.iter().all(|r| r.user_name == "Alice"));
    assert!(alice_results.iter().all(|r| r.quiz_title == "Quiz"));

    let bob_results = db.results_for_user(bob).await.unwrap();
    assert_eq!(bob_results.len(), 1);
    assert_eq!(bob_results[0].user_name, "Bob");
}

#[tokio::test]
async fn test_export_state_lifecycle() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "a@example.com").await;
    let session = db.create_user_session(user_id).await.unwrap();

    assert!(db.export_state(&session).await.unwrap().is_none());

    let questions = placeholder_questions(2);
    let public_id = db.create_quiz("Quiz", &questions, user_id).await.unwrap();
    let quiz = db.get_quiz(&public_id).await.unwrap().unwrap();

    // Viewing a quiz records it without a graded result.
    db.set_viewed_quiz(&session, quiz.id).await.unwrap();
    let state = db.export_state(&session).await.unwrap().unwrap();
    assert_eq!(state.quiz_id, quiz.id);
    assert!(state.score.is_none());
    assert!(state.details.is_none());

    // Grading fills in the result fields.
    db.set_graded_result(&session, quiz.id, "Alice", 1, 2, "[]")
        .await
        .unwrap();
    let state = db.export_state(&session).await.unwrap().unwrap();
    assert_eq!(state.user_name.as_deref(), Some("Alice"));
    assert_eq!(state.score, Some(1));
    assert_eq!(state.total, Some(2));
    assert_eq!(state.details.as_deref(), Some("[]"));

    // Viewing again overwrites the snapshot and clears the result.
    let other_id = db.create_quiz("Other", &questions, user_id).await.unwrap();
    let other = db.get_quiz(&other_id).await.unwrap().unwrap();
    db.set_viewed_quiz(&session, other.id).await.unwrap();
    let state = db.export_state(&session).await.unwrap().unwrap();
    assert_eq!(state.quiz_id, other.id);
    assert!(state.score.is_none());
    assert!(state.details.is_none());
}

#[tokio::test]
async fn test_upload_metadata() {
    let db = create_test_db().await;
    let id = db.record_upload("notes.pdf", "document", 1234).await.unwrap();
    assert!(id > 0);
}
