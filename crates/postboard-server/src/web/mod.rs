// ABOUTME: Frontend page handler serving the single postboard HTML page via Askama.
// ABOUTME: The page talks to the JSON API from the browser; it never calls PostService directly.

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;
use axum::extract::State;

use crate::app_state::SharedState;

/// The frontend page. Scripts read the API location from `api_base_url`.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub api_base_url: String,
}

/// GET / - Render the frontend page.
pub async fn index(State(state): State<SharedState>) -> IndexTemplate {
    IndexTemplate {
        api_base_url: state.api_base_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::routes::create_web_router;
    use axum::body::Body;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn index_embeds_api_base_url() {
        let state = Arc::new(AppState::new(
            Arc::new(postboard_core::MemoryStore::new()),
            "http://api.internal:7000",
        ));
        let app = create_web_router(state);

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("data-api-base="));
        assert!(html.contains("api.internal:7000"));
    }

    #[test]
    fn template_escapes_attribute_value() {
        let page = IndexTemplate {
            api_base_url: "http://x\" onload=\"alert(1)".to_string(),
        };
        let html = page.render().unwrap();
        assert!(!html.contains("\" onload=\""));
    }
}
