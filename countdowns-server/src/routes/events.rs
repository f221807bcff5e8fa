//! Event, category and countdown endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use countdowns_core::metadata::{self, JsonLdEvent, PageMetadata};
use countdowns_core::{Event, EventFilter, TimeRemaining, compute_remaining};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/events", get(list_events))
        .route("/api/top", get(top_events))
        .route("/api/events/{slug}", get(event_detail))
        .route("/api/events/{slug}/countdown", get(event_countdown))
        .route("/api/categories", get(list_categories))
}

/// Query string for the event list
#[derive(Deserialize)]
pub struct ListParams {
    /// Category name; "all" or empty for every category
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct EventList<'a> {
    pub events: Vec<&'a Event>,
    pub shown: usize,
    pub total: usize,
}

#[derive(Deserialize)]
pub struct TopParams {
    pub n: Option<usize>,
}

/// An event card with its current countdown
#[derive(Serialize)]
pub struct EventWithCountdown<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
    pub countdown: TimeRemaining,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail<'a> {
    pub event: &'a Event,
    pub countdown: TimeRemaining,
    pub metadata: PageMetadata,
    pub json_ld: JsonLdEvent,
}

#[derive(Serialize)]
pub struct Home<'a> {
    pub metadata: PageMetadata,
    pub categories: Vec<&'a str>,
    pub top: Vec<EventWithCountdown<'a>>,
}

/// GET /api/home - Page metadata, categories and the top events
async fn home(State(state): State<AppState>) -> Json<Home<'static>> {
    let now = state.clock.now();
    let top = state
        .catalog
        .top(state.config.top_count)
        .into_iter()
        .map(|event| EventWithCountdown {
            event,
            countdown: compute_remaining(event.starts_at_utc, now),
        })
        .collect();

    Json(Home {
        metadata: metadata::home_page(),
        categories: state.catalog.categories(),
        top,
    })
}

/// GET /api/events?category=&q= - Filtered events, soonest first
async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<EventList<'static>> {
    let filter = EventFilter::new(
        params.category.as_deref(),
        params.q.unwrap_or_default(),
    );
    let result = filter.apply(state.catalog.all());
    log::debug!(
        "Filter category={} q={:?} matched {} of {}",
        filter.category,
        filter.query,
        result.shown(),
        result.total
    );

    Json(EventList {
        shown: result.shown(),
        total: result.total,
        events: result.events,
    })
}

/// GET /api/top?n= - Random selection of events with countdowns
async fn top_events(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Json<Vec<EventWithCountdown<'static>>> {
    let now = state.clock.now();
    let n = params.n.unwrap_or(state.config.top_count);

    Json(
        state
            .catalog
            .top(n)
            .into_iter()
            .map(|event| EventWithCountdown {
                event,
                countdown: compute_remaining(event.starts_at_utc, now),
            })
            .collect(),
    )
}

/// GET /api/events/:slug - Event with countdown, page metadata and JSON-LD
async fn event_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EventDetail<'static>>, AppError> {
    let event = find_event(&state, &slug)?;

    Ok(Json(EventDetail {
        event,
        countdown: compute_remaining(event.starts_at_utc, state.clock.now()),
        metadata: metadata::event_page(event),
        json_ld: metadata::json_ld(event, &state.config.base_url),
    }))
}

/// GET /api/events/:slug/countdown - Time remaining until the event
async fn event_countdown(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<TimeRemaining>, AppError> {
    let event = find_event(&state, &slug)?;
    Ok(Json(compute_remaining(event.starts_at_utc, state.clock.now())))
}

/// GET /api/categories - Sorted distinct categories
async fn list_categories(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.catalog.categories())
}

fn find_event(state: &AppState, slug: &str) -> Result<&'static Event, AppError> {
    state.catalog.by_slug(slug).ok_or_else(|| {
        log::debug!("Unknown event slug: {}", slug);
        AppError::not_found(format!("Event not found: {}", slug))
    })
}
