use clap::Parser;
use quizforge::ai::{OpenAiClient, QuestionSource, DEFAULT_MODEL};
use quizforge::db::Db;
use quizforge::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL, e.g. sqlite:quizforge.db
    #[clap(env)]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// OpenAI API key. When absent, question generation runs offline and
    /// produces placeholder questions.
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,

    /// Completion model to use.
    #[arg(long, env, default_value = DEFAULT_MODEL)]
    openai_model: String,

    /// Completion API base URL.
    #[arg(long, env, default_value = "https://api.openai.com")]
    openai_base_url: String,

    /// Set the Secure attribute on session cookies (enable behind HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=info,quizforge=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    let questions = match args.openai_api_key {
        Some(api_key) => {
            tracing::info!("question generation: live, model={}", args.openai_model);
            QuestionSource::live(OpenAiClient::new(
                api_key,
                args.openai_model,
                args.openai_base_url,
            ))
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set, question generation runs offline");
            QuestionSource::Offline
        }
    };

    let state = AppState::new(db, questions, args.secure_cookies);
    let app = quizforge::router(state);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
