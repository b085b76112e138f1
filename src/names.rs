pub const LOGIN_URL: &str = "/login";
pub const REGISTER_URL: &str = "/register";
pub const LOGOUT_URL: &str = "/logout";
pub const UPLOAD_URL: &str = "/upload";
pub const HISTORY_URL: &str = "/history";
pub const DOWNLOAD_QUIZ_PDF_URL: &str = "/download-pdf";
pub const DOWNLOAD_RESULT_PDF_URL: &str = "/download-quiz-details-pdf";

pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

pub fn quiz_page_url(public_id: &str) -> String {
    format!("/quiz/{public_id}")
}

// Question generation defaults
pub const MIN_QUESTION_COUNT: usize = 1;
pub const MAX_QUESTION_COUNT: usize = 20;
pub const DEFAULT_QUESTION_COUNT: usize = 5;

pub const DEFAULT_QUIZ_TITLE: &str = "AI Generated Quiz";

// PDF export
pub const QUIZ_PDF_FILENAME: &str = "quiz.pdf";
pub const RESULT_PDF_FILENAME: &str = "quiz_result.pdf";
