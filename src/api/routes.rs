use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::{Config, CorsOrigins};
use crate::quiz::QuizService;

pub struct AppState {
    pub quiz: QuizService,
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) => {
            AllowOrigin::list(list.iter().filter_map(|o| HeaderValue::from_str(o).ok()))
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn create_router(state: Arc<AppState>, config: &Config) -> Router {
    let api_routes = Router::new()
        .route("/words/random", get(handlers::random_word))
        .route(
            "/words/check/:word_id/:choice_index/:correct_index",
            post(handlers::check_answer),
        )
        .route("/health", get(handlers::health));

    let assets = &config.assets_dir;

    Router::new()
        .nest("/api/v1", api_routes)
        .nest_service("/images", ServeDir::new(assets.join("images")))
        .nest_service("/audio", ServeDir::new(assets.join("audio")))
        .nest_service("/assets", ServeDir::new(assets))
        .fallback_service(ServeDir::new(&config.static_dir).append_index_html_on_directories(true))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
