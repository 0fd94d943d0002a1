use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vocab_quiz_server::api::routes::{create_router, AppState};
use vocab_quiz_server::config::{Config, VocabSource};
use vocab_quiz_server::quiz::QuizService;
use vocab_quiz_server::vocab::{JsonFileStore, RestStore, VocabularyStore};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!("Vocab Quiz Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", config.addr);
    tracing::info!("Assets directory: {}", config.assets_dir.display());

    // Pick the vocabulary store
    let store: Arc<dyn VocabularyStore> = match &config.vocab {
        VocabSource::File(path) => {
            tracing::info!("Vocabulary file: {}", path.display());
            Arc::new(JsonFileStore::new(path.clone()))
        }
        VocabSource::Rest {
            url,
            api_key,
            table,
        } => {
            tracing::info!("Vocabulary table: {} at {}", table, url);
            Arc::new(RestStore::new(url, api_key, table).expect("Failed to create REST client"))
        }
    };

    let state = Arc::new(AppState {
        quiz: QuizService::new(store),
    });

    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
