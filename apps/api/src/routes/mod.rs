pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use crate::schema::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let dev_tool = ServeFile::new(&state.config.dev_tool_path);

    Router::new()
        .route_service("/", dev_tool)
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-schema",
            post(handlers::handle_generate_schema),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
