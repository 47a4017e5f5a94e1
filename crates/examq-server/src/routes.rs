//! HTTP endpoints: the inbound sheet-update webhook and the polling reads.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use examq_model::Station;
use examq_queue::{
    board_matrix, decorate, present_sorted, retain_today, retain_today_matrix, select_next_up,
};

use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/sheet-update", post(sheet_update))
        .route("/api/queue", get(queue_view))
        .route("/api/next-up", get(next_up_view))
        .route("/api/board", get(board_view))
        .with_state(state)
}

/// Webhook payload pushed by the sheet automation.
#[derive(Debug, Deserialize)]
struct SheetUpdate {
    #[serde(rename = "updatedContent")]
    updated_content: Vec<Vec<String>>,
}

/// The webhook's fixed reply envelope. Failures are reported in-band; the
/// sender retries on its own schedule and must never see a transport error
/// for a malformed body.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateEnvelope {
    pub status: String,
    pub message: String,
}

impl UpdateEnvelope {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

async fn sheet_update(State(state): State<SharedState>, body: Bytes) -> Json<UpdateEnvelope> {
    match serde_json::from_slice::<SheetUpdate>(&body) {
        Ok(update) => {
            let rows = update.updated_content.len();
            state.cache.put_at(update.updated_content, state.now());
            info!(rows, "cached pushed sheet update");
            Json(UpdateEnvelope::success(format!("cached {rows} rows")))
        }
        Err(error) => {
            warn!(%error, "rejecting malformed sheet update");
            Json(UpdateEnvelope::error(error.to_string()))
        }
    }
}

/// Projected, date-filtered matrix for the polling page, header row first.
async fn queue_view(State(state): State<SharedState>) -> Json<Vec<Vec<String>>> {
    let matrix = state.current_matrix();
    let projected = examq_ingest::project_columns(&matrix, &state.schema.projection_indices());
    let filtered = retain_today_matrix(
        &projected,
        examq_ingest::PROJECTED_RESERVED_ON,
        state.today(),
    );
    Json(filtered)
}

/// Per-station next-up names, `-` where no one is eligible.
async fn next_up_view(State(state): State<SharedState>) -> Json<BTreeMap<String, String>> {
    let queue = todays_queue(&state);
    let next_up = select_next_up(&queue);
    let by_label = Station::ALL
        .into_iter()
        .map(|station| {
            (
                station.label().to_string(),
                next_up.display(station).to_string(),
            )
        })
        .collect();
    Json(by_label)
}

/// Decorated board matrix for the waiting-room display.
async fn board_view(State(state): State<SharedState>) -> Json<Vec<Vec<String>>> {
    let queue = todays_queue(&state);
    Json(board_matrix(&decorate(&queue)))
}

/// Typed pipeline shared by the next-up and board endpoints. Ingest problems
/// degrade to an empty queue; issues are logged, never surfaced as errors.
fn todays_queue(state: &SharedState) -> Vec<examq_model::Registrant> {
    let matrix = state.current_matrix();
    let report = match examq_ingest::ingest_matrix(&state.schema, &matrix) {
        Ok(report) => report,
        Err(error) => {
            warn!(%error, "roster ingest failed; serving empty queue");
            return Vec::new();
        }
    };
    for issue in &report.issues {
        warn!(row = issue.row, column = ?issue.column, "{}", issue.message);
    }
    present_sorted(retain_today(report.registrants, state.today()))
}
