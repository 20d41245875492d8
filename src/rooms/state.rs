//! Mutable per-room state. Callers hold the room's lock across a whole
//! handler, so every method here assumes exclusive access.

use crate::api::models::{ChatMessage, Profile, RoomSnapshot, Song};
use crate::common::types::{ConnectionId, RoomCode};

#[derive(Debug)]
pub struct RoomState {
    pub code: RoomCode,
    pub members: Vec<Profile>,
    pub messages: Vec<ChatMessage>,
    pub playlist: Vec<Song>,
    pub current_song: Option<Song>,
    pub is_playing: bool,
    /// Playhead offset in seconds. Only meaningful while a song is selected.
    pub current_time: f64,
}

impl RoomState {
    pub fn new(code: RoomCode) -> Self {
        Self {
            code,
            members: Vec::new(),
            messages: Vec::new(),
            playlist: Vec::new(),
            current_song: None,
            is_playing: false,
            current_time: 0.0,
        }
    }

    pub fn add_member(&mut self, profile: Profile) {
        self.members.push(profile);
    }

    /// Removes the member bound to `connection_id`. Returns the removed
    /// profile, or `None` if it was not a member.
    pub fn remove_member(&mut self, connection_id: &ConnectionId) -> Option<Profile> {
        let index = self
            .members
            .iter()
            .position(|m| &m.connection_id == connection_id)?;
        Some(self.members.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn push_song(&mut self, song: Song) {
        self.playlist.push(song);
    }

    /// Switches the current song. Pausing and rewinding happen in the same
    /// step so no observer ever sees the new song with the old clock.
    pub fn select_song(&mut self, song: Song) {
        self.current_song = Some(song);
        self.is_playing = false;
        self.current_time = 0.0;
    }

    /// Stores whatever the controlling client reported. Values are not
    /// sanity-checked; any member may drive playback for the room.
    pub fn set_playback(&mut self, is_playing: bool, current_time: f64) {
        self.is_playing = is_playing;
        self.current_time = current_time;
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            members: self.members.clone(),
            messages: self.messages.clone(),
            playlist: self.playlist.clone(),
            current_song: self.current_song.clone(),
            is_playing: self.is_playing,
            current_time: self.current_time,
        }
    }
}
