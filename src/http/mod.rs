//! HTTP boundary: router, shared state, and error mapping.

pub mod auth;
pub mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::assistant::CommandExecutor;
use crate::notify::NotificationHub;
use crate::{AppError, GlobalConfig, Result};

/// Shared application state accessible by all handlers.
pub struct AppState {
    /// Global configuration.
    pub config: Arc<GlobalConfig>,
    /// `SQLite` connection pool.
    pub db: Arc<SqlitePool>,
    /// Notification hub feeding connected clients.
    pub hub: NotificationHub,
    /// Assistant command executor.
    pub executor: CommandExecutor,
}

impl AppState {
    /// Build the full state from its parts, wiring the executor to the hub.
    #[must_use]
    pub fn new(config: Arc<GlobalConfig>, db: Arc<SqlitePool>) -> Self {
        let hub = NotificationHub::new(config.event_capacity);
        let executor = CommandExecutor::new(Arc::clone(&db), Some(hub.clone()));
        Self {
            config,
            db,
            hub,
            executor,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Config(_) | Self::Db(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(%self, "request failed");
        }

        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

/// Handler for `GET /healthz` — returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Build the application router over shared state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/assistant", post(handlers::assistant::run))
        .route("/teams", post(handlers::teams::create))
        .route("/teams/{id}", get(handlers::teams::get))
        .route("/teams/{id}/users", get(handlers::users::list_by_team))
        .route("/teams/{id}/projects", get(handlers::projects::list_by_team))
        .route("/teams/{id}/messages", get(handlers::messages::list_by_team))
        .route("/users", post(handlers::users::create))
        .route("/projects", post(handlers::projects::create))
        .route("/projects/{id}/tasks", get(handlers::tasks::list_by_project))
        .route("/tasks", post(handlers::tasks::create))
        .route(
            "/tasks/{id}",
            get(handlers::tasks::get)
                .patch(handlers::tasks::update)
                .delete(handlers::tasks::remove),
        )
        .route("/messages", post(handlers::messages::create))
        .route("/ws", get(handlers::events::ws))
        .with_state(state)
}

/// Bind and serve the HTTP API until the shutdown future resolves.
///
/// # Errors
///
/// Returns `AppError::Config` if the server fails to bind or serve.
pub async fn serve(
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let bind = SocketAddr::from(([127, 0, 0, 1], state.config.http_port));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind http on {bind}: {err}")))?;

    info!(%bind, "http server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|err| AppError::Config(format!("http server error: {err}")))?;

    info!("http server shut down");
    Ok(())
}
