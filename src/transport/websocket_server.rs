use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header},
    response::Response,
};
use tracing::{error, info, warn};

use crate::api::{self, IncomingMessage};
use crate::common::types::ConnectionId;
use crate::server::{AppState, session_manager};

pub async fn websocket_handler(
    headers: HeaderMap,
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Result<Response, (StatusCode, &'static str)> {
    // Origin gate: rejected connections never reach the event router.
    let origin = headers.get(header::ORIGIN).and_then(|h| h.to_str().ok());
    if !state.config.server.origin_allowed(origin) {
        warn!("Rejected connection from origin {:?}", origin);
        return Err((StatusCode::FORBIDDEN, "Origin not allowed"));
    }

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state)))
}

pub async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = flume::unbounded();
    session_manager::register_connection(&state, connection_id.clone(), tx);

    info!("WebSocket connected: connection={}", connection_id);

    loop {
        tokio::select! {
            Ok(msg) = rx.recv_async() => {
                if let Err(e) = socket.send(msg).await {
                    error!("Socket send error: connection={} err={}", connection_id, e);
                    break;
                }
            }
            msg = socket.recv() => {
                let msg = match msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        warn!("WebSocket error: connection={} err={}", connection_id, e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        match serde_json::from_str::<IncomingMessage>(text.as_str()) {
                            Ok(op) => api::handle_op(op, &state, &connection_id),
                            Err(e) => {
                                warn!(
                                    "Undecodable frame from connection={}: {}",
                                    connection_id, e
                                );
                            }
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    }

    session_manager::handle_disconnect(&state, &connection_id);
    info!("WebSocket disconnected: connection={}", connection_id);
}
