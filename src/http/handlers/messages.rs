//! Chat message handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::models::message::ChatMessage;
use crate::notify::{EventKind, NotificationHub};
use crate::persistence::message_repo::MessageRepo;
use crate::{AppError, Result};

use super::ensure_own_team;

/// Request body for posting a message.
#[derive(Debug, Deserialize)]
pub struct CreateMessage {
    /// Message body.
    pub body: String,
}

/// Post a message to the caller's team stream.
///
/// # Errors
///
/// Returns `BadRequest` for an empty body or `Db` on persistence failure.
pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Json(body): Json<CreateMessage>,
) -> Result<(StatusCode, Json<ChatMessage>)> {
    if body.body.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }

    let message = MessageRepo::new(Arc::clone(&state.db))
        .create(&ChatMessage::new(
            actor.team_id.clone(),
            actor.id.clone(),
            body.body,
        ))
        .await?;

    info!(message = %message.id, team = %message.team_id, "message posted");
    state.hub.publish(
        NotificationHub::team_topic(&message.team_id),
        EventKind::MessageCreated,
        serde_json::json!({ "message": message }),
    );

    Ok((StatusCode::CREATED, Json(message)))
}

/// List recent messages in the caller's team, newest first.
///
/// # Errors
///
/// Returns `Forbidden` for another team or `Db` on failure.
pub async fn list_by_team(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>> {
    ensure_own_team(&actor, &id)?;

    let messages = MessageRepo::new(Arc::clone(&state.db))
        .list_by_team(&id, state.config.message_history_limit)
        .await?;

    Ok(Json(messages))
}
