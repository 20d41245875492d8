//! Broadcast fanout and disconnect bookkeeping.

use axum::extract::ws::Message;
use tracing::{debug, info};

use crate::api::OutgoingMessage;
use crate::api::models::ChatMessage;
use crate::common::types::{ConnectionId, RoomCode};
use crate::server::AppState;

/// Delivers `msg` to every session bound to `code`, optionally excluding the
/// originating connection. Serialized once; delivery is fire-and-forget.
pub fn broadcast(
    state: &AppState,
    code: &RoomCode,
    msg: &OutgoingMessage,
    except: Option<&ConnectionId>,
) {
    let Ok(json) = serde_json::to_string(msg) else {
        return;
    };

    for entry in state.sessions.iter() {
        let session = entry.value();
        if &session.room_code != code {
            continue;
        }
        if except.is_some_and(|id| id == &session.connection_id) {
            continue;
        }
        session.send_json(&json);
    }
}

/// Tears down a closed connection. A socket that never joined a room leaves
/// no session behind and this is a no-op beyond dropping its sender.
pub fn handle_disconnect(state: &AppState, connection_id: &ConnectionId) {
    state.connections.remove(connection_id);

    let Some((_, session)) = state.sessions.remove(connection_id) else {
        debug!("Disconnect without session: connection={}", connection_id);
        return;
    };

    let code = session.room_code.clone();
    let departure = match state.registry.with_room(&code, |room| {
        room.remove_member(connection_id);
        if room.is_empty() {
            None
        } else {
            let message =
                ChatMessage::system(format!("{} left the room", session.profile.display_name));
            room.push_message(message.clone());
            Some((message, room.members.clone()))
        }
    }) {
        Ok(departure) => departure,
        Err(_) => return,
    };

    match departure {
        None => {
            if state.registry.remove_if_empty(&code) {
                info!("Room {} emptied out, deleting it", code);
            }
        }
        Some((message, members)) => {
            broadcast(
                state,
                &code,
                &OutgoingMessage::UserLeft {
                    connection_id: connection_id.clone(),
                },
                None,
            );
            broadcast(state, &code, &OutgoingMessage::UsersUpdated { members }, None);
            broadcast(state, &code, &OutgoingMessage::NewMessage { message }, None);
        }
    }

    info!(
        "Session closed: connection={} room={}",
        connection_id, code
    );
}

/// Registers a fresh socket's outbound sender.
pub fn register_connection(
    state: &AppState,
    connection_id: ConnectionId,
    sender: flume::Sender<Message>,
) {
    state.connections.insert(connection_id, sender);
}
