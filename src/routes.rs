use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::cors;
use crate::state::AppState;
use crate::translate;

/// Assemble the application router. The CORS middleware sits inside the
/// trace layer so requests are logged whether or not they are preflights.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/translate", post(translate::translate))
        .with_state(state)
        .layer(middleware::from_fn(cors::cors_headers))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
