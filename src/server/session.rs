use std::sync::atomic::{AtomicBool, Ordering::Relaxed};

use axum::extract::ws::Message;

use crate::api::models::Profile;
use crate::common::types::{ConnectionId, RoomCode};

/// The live binding between one connection and a participant inside exactly
/// one room. Exists from successful join until disconnect.
pub struct Session {
    pub connection_id: ConnectionId,
    pub profile: Profile,
    pub room_code: RoomCode,
    pub is_typing: AtomicBool,
    /// Sender for outgoing WS messages, fire-and-forget.
    sender: flume::Sender<Message>,
}

impl Session {
    pub fn new(profile: Profile, room_code: RoomCode, sender: flume::Sender<Message>) -> Self {
        Self {
            connection_id: profile.connection_id.clone(),
            profile,
            room_code,
            is_typing: AtomicBool::new(false),
            sender,
        }
    }

    pub fn send_json(&self, json: &str) {
        let _ = self.sender.send(Message::Text(json.to_string().into()));
    }


    pub fn set_typing(&self, is_typing: bool) {
        self.is_typing.store(is_typing, Relaxed);
    }
}
