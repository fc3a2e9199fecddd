//! Form page handler

use axum::{extract::State, response::Html};

use crate::models::FormValues;
use crate::views::render_page;
use crate::AppState;

/// Idle page: widgets at their defaults, no outcome
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&FormValues::defaults(), None, state.engine.metadata()))
}
