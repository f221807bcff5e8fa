//! sitemap.xml endpoint

use axum::{Router, extract::State, http::header, response::IntoResponse, routing::get};

use countdowns_core::sitemap;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap_xml))
}

/// GET /sitemap.xml - Home page and every event page
async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let entries = sitemap::entries(
        state.catalog.all(),
        &state.config.base_url,
        state.clock.now(),
    );
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::to_xml(&entries),
    )
}
