// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{health, import, objective, subjective},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the question bank API under `/api/questions`.
/// * Applies global middleware (Trace, CORS).
/// * Serves the static UI for unmatched paths when configured.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let question_routes = Router::new()
        .route(
            "/objective",
            get(objective::list_objective).post(objective::create_objective),
        )
        .route("/objective/random", get(objective::random_objective))
        .route(
            "/subjective",
            get(subjective::list_subjective).post(subjective::create_subjective),
        )
        .route("/subjective/random", get(subjective::random_subjective))
        .route("/import-txt", post(import::import_txt));

    let mut app = Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/questions", question_routes);

    if let Some(static_dir) = &state.config.static_dir {
        tracing::info!("Serving static UI from {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    // Global Middleware (applied from outside in)
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
    .with_state(state)
}
