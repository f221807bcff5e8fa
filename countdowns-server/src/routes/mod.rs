pub mod events;
pub mod sitemap;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(events::router())
        .merge(sitemap::router())
        .with_state(state)
        .layer(cors)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert errors to HTTP responses
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        let message: String = message.into();
        AppError {
            status: StatusCode::NOT_FOUND,
            error: anyhow::anyhow!(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{:#}", self.error);
        }
        let body = Json(ErrorResponse {
            error: self.error.to_string(),
        });
        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: err.into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use countdowns_core::Catalog;
    use countdowns_core::clock::ManualClock;
    use countdowns_core::config::SiteConfig;
    use countdowns_core::event::parse_instant;
    use tower::ServiceExt;

    use super::*;

    const EVENTS: &str = r#"[
        {
            "id": "1",
            "slug": "new-year-2030",
            "title": "New Year 2030",
            "description": "The biggest holiday of the decade.",
            "startsAtUtc": "2030-01-01T00:00:00Z",
            "category": "holiday",
            "tags": ["party"],
            "image": "https://example.com/ny.png"
        },
        {
            "id": "2",
            "slug": "rocket-launch",
            "title": "Rocket Launch",
            "description": "Liftoff.",
            "startsAtUtc": "2025-06-01T00:00:00Z",
            "category": "launch",
            "tags": ["space"]
        }
    ]"#;

    pub(crate) fn test_app() -> Router {
        let catalog: &'static Catalog = Box::leak(Box::new(Catalog::from_json(EVENTS).unwrap()));
        let config = SiteConfig {
            base_url: "https://example.com".to_string(),
            ..Default::default()
        };
        let clock = Arc::new(ManualClock::new(
            parse_instant("2024-01-01T00:00:00Z").unwrap(),
        ));
        app(AppState::new(catalog, config).with_clock(clock))
    }

    pub(crate) async fn get(uri: &str) -> (StatusCode, String) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub(crate) async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
