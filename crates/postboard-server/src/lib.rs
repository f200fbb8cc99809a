// ABOUTME: HTTP server for postboard, providing the JSON post API and the frontend page.
// ABOUTME: Uses Axum with a shared PostService; API and page are served from separate routers.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;
pub mod web;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, PostboardConfig};
pub use routes::{create_api_router, create_web_router};
