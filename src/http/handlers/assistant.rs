//! `POST /assistant` — natural-language command endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::assistant::{Command, ResultEnvelope};
use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::Result;

/// Request body for the assistant endpoint.
#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    /// Raw command text.
    pub command: String,
    /// Optional project scope for task-touching commands.
    #[serde(default)]
    pub project_id: Option<String>,
}

/// Parse and execute a free-text command for the authenticated caller.
///
/// # Errors
///
/// Propagates the assistant error taxonomy: `BadRequest`, `NotFound`,
/// `Forbidden`, or `Db`.
pub async fn run(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Json(body): Json<AssistantRequest>,
) -> Result<Json<ResultEnvelope>> {
    info!(user = %actor.id, "assistant command received");

    let command = Command {
        text: body.command,
        actor,
        project_id: body.project_id,
    };

    let envelope = state.executor.execute(&command).await?;
    Ok(Json(envelope))
}
