use serde::Serialize;

use crate::api::models::{ChatMessage, Profile, RoomSnapshot, Song};
use crate::common::types::{ConnectionId, RoomCode};

/// Messages sent from server to client over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum OutgoingMessage {
    RoomCreated {
        code: RoomCode,
    },
    RoomJoined {
        room: RoomSnapshot,
    },
    RoomError {
        message: String,
    },
    UserJoined {
        profile: Profile,
    },
    UsersUpdated {
        members: Vec<Profile>,
    },
    NewMessage {
        message: ChatMessage,
    },
    #[serde(rename_all = "camelCase")]
    UserTyping {
        connection_id: ConnectionId,
        display_name: String,
        is_typing: bool,
    },
    PlaylistUpdated {
        playlist: Vec<Song>,
    },
    /// Playback relay. `timestamp` is the server clock at relay time so
    /// receivers can compensate for transit delay.
    #[serde(rename_all = "camelCase")]
    MusicSync {
        is_playing: bool,
        current_time: f64,
        timestamp: u64,
    },
    #[serde(rename_all = "camelCase")]
    SongChanged {
        song: Song,
        is_playing: bool,
        current_time: f64,
    },
    #[serde(rename_all = "camelCase")]
    UserLeft {
        connection_id: ConnectionId,
    },
}
