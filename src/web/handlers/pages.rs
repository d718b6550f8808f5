//! The three near-duplicate chat page variants.
//!
//! They share one browser-side script; each template pins its own theme,
//! reveal behavior and trim rule through data attributes.

use crate::client::MAX_MESSAGE_CHARS;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use minijinja::context;

pub async fn midnight(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_page(&state, "midnight.html")
}

pub async fn classic(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_page(&state, "classic.html")
}

pub async fn paper(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_page(&state, "paper.html")
}

fn render_page(state: &AppState, template: &str) -> Result<Html<String>, StatusCode> {
    state
        .templates
        .render(template, context! { max_chars => MAX_MESSAGE_CHARS })
        .map(Html)
        .map_err(|err| {
            tracing::error!("Failed to render {}: {:#}", template, err);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
