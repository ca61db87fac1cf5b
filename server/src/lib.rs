//! Multi-user todo service.
//!
//! # Overview
//! An axum router over a single in-memory `TodoStore`. Records are scoped by
//! an opaque owner tag passed as `?userRole=`; a caller only ever sees or
//! modifies records created under the same tag. Nothing is persisted.
//!
//! The tag is not authenticated. Anyone who knows a tag can act as its owner.

pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod routes;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;

pub use config::{ConfigError, ServerConfig};
pub use error::{AppError, ErrorResponse};
pub use model::{CreateTodo, OwnerQuery, Todo, UpdateTodo};
pub use routes::AppState;
pub use store::TodoStore;

/// Router backed by a fresh, empty store.
pub fn app() -> Router {
    routes::router(AppState::default())
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
