use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Form, State};
use axum::response::{Html, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::views;
use super::AppState;
use crate::explore::{explore, Exploration};

#[derive(Deserialize)]
pub struct ExploreForm {
    #[serde(default)]
    city: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn index() -> Html<String> {
    debug!("Rendering search form");
    Html(views::index().into_string())
}

/// Form submission. Always answers 200; failures render an empty list.
pub async fn explore_landmarks(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ExploreForm>,
) -> Html<String> {
    let start = Instant::now();
    let city = form.city.trim();
    debug!("Received POST request with city: {}", city);

    let exploration = if city.is_empty() {
        Exploration::default()
    } else {
        explore(&state.places, &state.search, city).await
    };

    info!(
        "POST /landmarks city='{}' -> {} landmarks ({:.1}ms)",
        city,
        exploration.landmarks.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Html(views::results(&exploration).into_string())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
