use serde::{Deserialize, Serialize};

use crate::common::types::{ConnectionId, RoomCode};
use crate::rooms::avatar;
use crate::server::now_ms;

/// Reserved author name for messages the server itself appends.
pub const SYSTEM_AUTHOR: &str = "system";
const SYSTEM_AVATAR: &str = "#9ca3af";

/// A participant as the rest of the room sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub connection_id: ConnectionId,
    pub display_name: String,
    pub avatar_color: String,
}

impl Profile {
    pub fn new(connection_id: ConnectionId, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let avatar_color = avatar::avatar_color(&display_name).to_string();
        Self {
            connection_id,
            display_name,
            avatar_color,
        }
    }
}

/// One chat entry. Immutable once appended to a room's log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub text: String,
    pub created_at: u64,
}

impl ChatMessage {
    pub fn new(author: &Profile, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author_name: author.display_name.clone(),
            author_avatar: author.avatar_color.clone(),
            text: text.into(),
            created_at: now_ms(),
        }
    }

    /// Server-authored announcement ("Ann joined the room", ...).
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author_name: SYSTEM_AUTHOR.to_string(),
            author_avatar: SYSTEM_AVATAR.to_string(),
            text: text.into(),
            created_at: now_ms(),
        }
    }
}

/// A playlist entry. The engine never interprets `audio_ref`; it is an
/// opaque handle the clients resolve themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_label: String,
    pub added_by: String,
    pub audio_ref: String,
}

/// Full projection of a room, sent once on join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub code: RoomCode,
    pub members: Vec<Profile>,
    pub messages: Vec<ChatMessage>,
    pub playlist: Vec<Song>,
    pub current_song: Option<Song>,
    pub is_playing: bool,
    pub current_time: f64,
}
