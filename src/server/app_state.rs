use std::sync::Arc;

use axum::extract::ws::Message;
use dashmap::DashMap;

use crate::api::OutgoingMessage;
use crate::common::types::ConnectionId;
use crate::rooms::RoomRegistry;
use crate::server::session::Session;

/// Top-level application state.
pub struct AppState {
    /// Outbound sender per live socket, joined or not.
    pub connections: DashMap<ConnectionId, flume::Sender<Message>>,
    /// Room-bound sessions. A connection appears here only after a join.
    pub sessions: DashMap<ConnectionId, Arc<Session>>,
    pub registry: RoomRegistry,
    pub config: crate::configs::Config,
}

impl AppState {
    pub fn new(config: crate::configs::Config) -> Self {
        Self {
            connections: DashMap::new(),
            sessions: DashMap::new(),
            registry: RoomRegistry::new(),
            config,
        }
    }

    /// Direct reply to one connection. Dropped silently if the socket is
    /// already gone; the socket task owns cleanup.
    pub fn send_to(&self, connection_id: &ConnectionId, msg: &OutgoingMessage) {
        let Some(sender) = self.connections.get(connection_id) else {
            return;
        };
        if let Ok(json) = serde_json::to_string(msg) {
            let _ = sender.send(Message::Text(json.into()));
        }
    }
}

pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
