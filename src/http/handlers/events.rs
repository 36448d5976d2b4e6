//! WebSocket event stream for real-time client push.
//!
//! Each connected client holds its own broadcast receiver and sees only the
//! events published on its team's topic. Delivery is best-effort: a client
//! that falls behind the broadcast buffer misses events.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::http::auth::AuthedUser;
use crate::http::AppState;
use crate::notify::{Notification, NotificationHub};

/// Upgrade to a WebSocket scoped to the caller's team events.
pub async fn ws(
    State(state): State<Arc<AppState>>,
    AuthedUser(actor): AuthedUser,
    upgrade: WebSocketUpgrade,
) -> Response {
    let topic = NotificationHub::team_topic(&actor.team_id);
    let rx = state.hub.subscribe();
    debug!(user = %actor.id, topic = %topic, "websocket subscriber attached");
    upgrade.on_upgrade(move |socket| stream_events(socket, rx, topic))
}

/// Forward matching notifications to the socket until either side closes.
///
/// The receive half is drained so a client close is noticed promptly;
/// inbound payloads are ignored, the stream is push-only.
async fn stream_events(
    socket: WebSocket,
    mut rx: broadcast::Receiver<Notification>,
    topic: String,
) {
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
            event = rx.recv() => {
                match event {
                    Ok(notification) if notification.topic == topic => {
                        let Ok(text) = serde_json::to_string(&notification) else {
                            continue;
                        };
                        if sink.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "websocket subscriber lagged; events dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }
    debug!(topic = %topic, "websocket subscriber detached");
}
