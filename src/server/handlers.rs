//! Request handlers.

use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::receipt::{Receipt, resolve_date};

use super::page::INDEX_HTML;
use super::state::AppState;

pub const ACCEPTED: &str = "Receipt received and will be printed!";
pub const MISSING_MESSAGE: &str = "Missing message parameter";
pub const NOT_FOUND: &str = "The requested page was not found.";
pub const QUEUE_CLOSED: &str = "Printer is not accepting jobs";

/// Parameters for `/submit`, from the query string or a urlencoded body.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitParams {
    pub message: Option<String>,
    /// `YYYY-MM-DD` or `DD/MM/YYYY`; today when absent or empty
    pub date: Option<String>,
}

impl SubmitParams {
    /// Fill fields missing here from `fallback`.
    fn or(self, fallback: Self) -> Self {
        Self {
            message: self.message.or(fallback.message),
            date: self.date.or(fallback.date),
        }
    }
}

/// Handle GET / - return the HTML form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle GET /submit?message=...&date=...
pub async fn submit_query(
    State(state): State<AppState>,
    Query(params): Query<SubmitParams>,
) -> Response {
    submit(state, params).await
}

/// Handle POST /submit.
///
/// Fields come from the urlencoded body, or from the query string when the
/// body lacks them (or is not a form at all).
pub async fn submit_form(
    State(state): State<AppState>,
    Query(query): Query<SubmitParams>,
    form: Option<Form<SubmitParams>>,
) -> Response {
    let params = match form {
        Some(Form(body)) => body.or(query),
        None => query,
    };
    submit(state, params).await
}

/// Fallback for every other path.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND).into_response()
}

async fn submit(state: AppState, params: SubmitParams) -> Response {
    let Some(message) = params.message else {
        return (StatusCode::BAD_REQUEST, MISSING_MESSAGE).into_response();
    };

    let date = params.date.as_deref().filter(|d| !d.trim().is_empty());
    let receipt = Receipt::message(message, resolve_date(date));
    info!(
        header = %receipt.header,
        chars = receipt.body.chars().count(),
        custom_date = date.is_some(),
        "receipt received"
    );

    if state.queue.send(receipt).await.is_err() {
        warn!("print queue closed, receipt dropped");
        return (StatusCode::SERVICE_UNAVAILABLE, QUEUE_CLOSED).into_response();
    }

    (StatusCode::OK, ACCEPTED).into_response()
}
