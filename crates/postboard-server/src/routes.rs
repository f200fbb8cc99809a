// ABOUTME: Route definitions for the postboard API and frontend listeners.
// ABOUTME: The API router carries an open CORS policy since the page is served from another origin.

use axum::Router;
use axum::routing::{get, put};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::web;

/// Build the JSON API router with all post routes and shared state.
pub fn create_api_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/posts",
            get(api::posts::list_posts).post(api::posts::create_post),
        )
        .route("/api/posts/search", get(api::posts::search_posts))
        .route(
            "/api/posts/{id}",
            put(api::posts::update_post).delete(api::posts::delete_post),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the router for the frontend page.
pub fn create_web_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(web::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
