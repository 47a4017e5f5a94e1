//! Pushed-update cache and HTTP bridge for the exam-day queue board.
//!
//! The sheet automation pushes full snapshots to the webhook; polling pages
//! read the cached snapshot back, falling back to the live roster source when
//! the cache is cold.

pub mod cache;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use thiserror::Error;
use tracing::info;

pub use cache::{DEFAULT_TTL, UpdateCache};
pub use routes::{UpdateEnvelope, router};
pub use state::{AppState, Clock, SharedState};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binds and runs the HTTP bridge until the task is cancelled.
pub async fn serve(addr: SocketAddr, state: SharedState) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "queue board listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
