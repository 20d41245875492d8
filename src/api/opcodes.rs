use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::events::OutgoingMessage;
use crate::api::models::{ChatMessage, Profile, Song};
use crate::common::types::{ConnectionId, RoomCode};
use crate::server::session_manager::broadcast;
use crate::server::{AppState, Session, now_ms};

/// Messages received from clients over WebSocket.
#[derive(Deserialize, Debug)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum IncomingMessage {
    #[serde(rename_all = "camelCase")]
    CreateRoom { display_name: String },
    #[serde(rename_all = "camelCase")]
    JoinRoom { code: String, display_name: String },
    SendMessage {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Typing { is_typing: bool },
    #[serde(rename_all = "camelCase")]
    AddSong {
        #[serde(default)]
        id: Option<String>,
        title: String,
        artist: String,
        duration_label: String,
        audio_ref: String,
    },
    #[serde(rename_all = "camelCase")]
    MusicControl { is_playing: bool, current_time: f64 },
    SelectSong {
        song: Song,
    },
}

/// Routes one inbound event. Runs to completion before the socket task picks
/// up the next frame, so each room sees handler effects atomically.
pub fn handle_op(op: IncomingMessage, state: &Arc<AppState>, connection_id: &ConnectionId) {
    match op {
        IncomingMessage::CreateRoom { display_name } => {
            create_room(state, connection_id, display_name)
        }
        IncomingMessage::JoinRoom { code, display_name } => {
            join_room(state, connection_id, code, display_name)
        }
        IncomingMessage::SendMessage { text } => send_message(state, connection_id, text),
        IncomingMessage::Typing { is_typing } => typing(state, connection_id, is_typing),
        IncomingMessage::AddSong {
            id,
            title,
            artist,
            duration_label,
            audio_ref,
        } => add_song(state, connection_id, id, title, artist, duration_label, audio_ref),
        IncomingMessage::MusicControl {
            is_playing,
            current_time,
        } => music_control(state, connection_id, is_playing, current_time),
        IncomingMessage::SelectSong { song } => select_song(state, connection_id, song),
    }
}

/// Room-scoped events from a connection with no bound session are dropped
/// on purpose; a frame can race past its own disconnect cleanup.
fn session_for(state: &AppState, connection_id: &ConnectionId) -> Option<Arc<Session>> {
    let session = state.sessions.get(connection_id).map(|e| e.value().clone());
    if session.is_none() {
        debug!("Dropping event from unbound connection {}", connection_id);
    }
    session
}

fn create_room(state: &AppState, connection_id: &ConnectionId, display_name: String) {
    match state.registry.create() {
        Ok(code) => {
            info!("Room {} created by {}", code, display_name);
            state.send_to(connection_id, &OutgoingMessage::RoomCreated { code });
        }
        Err(err) => {
            warn!("Room creation failed: {}", err);
            state.send_to(
                connection_id,
                &OutgoingMessage::RoomError {
                    message: err.to_string(),
                },
            );
        }
    }
}

fn join_room(state: &AppState, connection_id: &ConnectionId, code: String, display_name: String) {
    if state.sessions.contains_key(connection_id) {
        debug!("Connection {} is already in a room, ignoring join", connection_id);
        return;
    }

    let Some(sender) = state
        .connections
        .get(connection_id)
        .map(|e| e.value().clone())
    else {
        return;
    };

    let code = RoomCode::from(code);
    let profile = Profile::new(connection_id.clone(), display_name);
    let session = Arc::new(Session::new(profile.clone(), code.clone(), sender));

    // Membership, the session-table entry and the snapshot commit under the
    // registry entry plus the room lock: a concurrent empty-room deletion
    // cannot interleave, and no broadcast can fall between the snapshot and
    // the joiner becoming visible to the fanout.
    let result = state.registry.with_room(&code, |room| {
        room.add_member(profile.clone());
        let message = ChatMessage::system(format!("{} joined the room", profile.display_name));
        room.push_message(message.clone());
        state.sessions.insert(connection_id.clone(), session);
        (room.snapshot(), message)
    });

    let (snapshot, joined_msg) = match result {
        Ok(committed) => committed,
        Err(err) => {
            state.send_to(
                connection_id,
                &OutgoingMessage::RoomError {
                    message: err.to_string(),
                },
            );
            return;
        }
    };

    info!("{} joined room {}", profile.display_name, code);

    let members = snapshot.members.clone();
    state.send_to(connection_id, &OutgoingMessage::RoomJoined { room: snapshot });
    broadcast(
        state,
        &code,
        &OutgoingMessage::UserJoined { profile },
        Some(connection_id),
    );
    broadcast(
        state,
        &code,
        &OutgoingMessage::UsersUpdated { members },
        Some(connection_id),
    );
    broadcast(
        state,
        &code,
        &OutgoingMessage::NewMessage { message: joined_msg },
        Some(connection_id),
    );
}

fn send_message(state: &AppState, connection_id: &ConnectionId, text: String) {
    let Some(session) = session_for(state, connection_id) else {
        return;
    };
    let message = ChatMessage::new(&session.profile, text);
    let pushed = state.registry.with_room(&session.room_code, |room| {
        room.push_message(message.clone());
    });
    if pushed.is_err() {
        return;
    }

    broadcast(
        state,
        &session.room_code,
        &OutgoingMessage::NewMessage { message },
        None,
    );
}

fn typing(state: &AppState, connection_id: &ConnectionId, is_typing: bool) {
    let Some(session) = session_for(state, connection_id) else {
        return;
    };
    session.set_typing(is_typing);

    broadcast(
        state,
        &session.room_code,
        &OutgoingMessage::UserTyping {
            connection_id: connection_id.clone(),
            display_name: session.profile.display_name.clone(),
            is_typing,
        },
        Some(connection_id),
    );
}

fn add_song(
    state: &AppState,
    connection_id: &ConnectionId,
    id: Option<String>,
    title: String,
    artist: String,
    duration_label: String,
    audio_ref: String,
) {
    let Some(session) = session_for(state, connection_id) else {
        return;
    };
    let song = Song {
        id: id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        title,
        artist,
        duration_label,
        added_by: session.profile.display_name.clone(),
        audio_ref,
    };

    let Ok(playlist) = state.registry.with_room(&session.room_code, |room| {
        room.push_song(song);
        room.playlist.clone()
    }) else {
        return;
    };

    broadcast(
        state,
        &session.room_code,
        &OutgoingMessage::PlaylistUpdated { playlist },
        None,
    );
}

fn music_control(
    state: &AppState,
    connection_id: &ConnectionId,
    is_playing: bool,
    current_time: f64,
) {
    let Some(session) = session_for(state, connection_id) else {
        return;
    };
    let updated = state.registry.with_room(&session.room_code, |room| {
        room.set_playback(is_playing, current_time);
    });
    if updated.is_err() {
        return;
    }

    broadcast(
        state,
        &session.room_code,
        &OutgoingMessage::MusicSync {
            is_playing,
            current_time,
            timestamp: now_ms(),
        },
        Some(connection_id),
    );
}

fn select_song(state: &AppState, connection_id: &ConnectionId, song: Song) {
    let Some(session) = session_for(state, connection_id) else {
        return;
    };
    let message = ChatMessage::system(format!(
        "{} selected {}",
        session.profile.display_name, song.title
    ));
    let committed = state.registry.with_room(&session.room_code, |room| {
        room.select_song(song.clone());
        room.push_message(message.clone());
    });
    if committed.is_err() {
        return;
    }

    broadcast(
        state,
        &session.room_code,
        &OutgoingMessage::SongChanged {
            song,
            is_playing: false,
            current_time: 0.0,
        },
        None,
    );
    broadcast(
        state,
        &session.room_code,
        &OutgoingMessage::NewMessage { message },
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::SYSTEM_AUTHOR;
    use crate::configs::Config;
    use crate::server::session_manager::{handle_disconnect, register_connection};
    use axum::extract::ws::Message;
    use serde_json::Value;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default()))
    }

    fn connect(state: &AppState) -> (ConnectionId, flume::Receiver<Message>) {
        let connection_id = ConnectionId::generate();
        let (tx, rx) = flume::unbounded();
        register_connection(state, connection_id.clone(), tx);
        (connection_id, rx)
    }

    fn recv_json(rx: &flume::Receiver<Message>) -> Value {
        match rx.try_recv().expect("expected a queued message") {
            Message::Text(text) => serde_json::from_str(text.as_str()).unwrap(),
            other => panic!("expected text frame, got {:?}", other),
        }
    }

    fn drain(rx: &flume::Receiver<Message>) -> Vec<Value> {
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            match msg {
                Message::Text(text) => out.push(serde_json::from_str(text.as_str()).unwrap()),
                other => panic!("expected text frame, got {:?}", other),
            }
        }
        out
    }

    fn join(state: &Arc<AppState>, connection_id: &ConnectionId, code: &RoomCode, name: &str) {
        handle_op(
            IncomingMessage::JoinRoom {
                code: code.0.clone(),
                display_name: name.to_string(),
            },
            state,
            connection_id,
        );
    }

    fn sample_song() -> Song {
        Song {
            id: "s1".to_string(),
            title: "Windowlicker".to_string(),
            artist: "Aphex Twin".to_string(),
            duration_label: "6:07".to_string(),
            added_by: "Ann".to_string(),
            audio_ref: "blob:abc123".to_string(),
        }
    }

    #[test]
    fn create_then_join_returns_snapshot_with_system_message() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let created = recv_json(&ann_rx);
        assert_eq!(created["op"], "room-created");
        let code = created["code"].as_str().unwrap().to_string();
        assert_eq!(code.len(), 6);

        join(&state, &ann, &RoomCode::from(code.clone()), "Ann");
        let joined = recv_json(&ann_rx);
        assert_eq!(joined["op"], "room-joined");
        let room = &joined["room"];
        assert_eq!(room["code"], code.as_str());
        assert_eq!(room["members"].as_array().unwrap().len(), 1);
        assert_eq!(room["members"][0]["displayName"], "Ann");
        let messages = room["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["authorName"], SYSTEM_AUTHOR);
        assert_eq!(messages[0]["text"], "Ann joined the room");

        // The creator-joiner gets no echo of the join broadcasts.
        assert!(ann_rx.try_recv().is_err());
    }

    #[test]
    fn second_join_notifies_existing_members() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, bo_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        drain(&ann_rx);

        join(&state, &bo, &code, "Bo");

        let bo_joined = recv_json(&bo_rx);
        assert_eq!(bo_joined["op"], "room-joined");
        assert_eq!(bo_joined["room"]["members"].as_array().unwrap().len(), 2);

        let to_ann = drain(&ann_rx);
        assert_eq!(to_ann[0]["op"], "user-joined");
        assert_eq!(to_ann[0]["profile"]["displayName"], "Bo");
        assert_eq!(to_ann[1]["op"], "users-updated");
        let members = to_ann[1]["members"].as_array().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0]["displayName"], "Ann");
        assert_eq!(members[1]["displayName"], "Bo");
        assert_eq!(to_ann[2]["op"], "new-message");
        assert_eq!(to_ann[2]["message"]["text"], "Bo joined the room");
    }

    #[test]
    fn chat_reaches_everyone_including_sender() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, bo_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        join(&state, &bo, &code, "Bo");
        drain(&ann_rx);
        drain(&bo_rx);

        handle_op(
            IncomingMessage::SendMessage {
                text: "hi".to_string(),
            },
            &state,
            &ann,
        );

        for rx in [&ann_rx, &bo_rx] {
            let msg = recv_json(rx);
            assert_eq!(msg["op"], "new-message");
            assert_eq!(msg["message"]["text"], "hi");
            assert_eq!(msg["message"]["authorName"], "Ann");
        }
    }

    #[test]
    fn select_song_resets_clock_and_announces() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, bo_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        join(&state, &bo, &code, "Bo");

        // Simulate mid-playback before re-selecting.
        handle_op(
            IncomingMessage::MusicControl {
                is_playing: true,
                current_time: 33.0,
            },
            &state,
            &ann,
        );
        drain(&ann_rx);
        drain(&bo_rx);

        handle_op(
            IncomingMessage::SelectSong {
                song: sample_song(),
            },
            &state,
            &ann,
        );

        for rx in [&ann_rx, &bo_rx] {
            let changed = recv_json(rx);
            assert_eq!(changed["op"], "song-changed");
            assert_eq!(changed["song"]["title"], "Windowlicker");
            assert_eq!(changed["isPlaying"], false);
            assert_eq!(changed["currentTime"], 0.0);

            let announcement = recv_json(rx);
            assert_eq!(announcement["op"], "new-message");
            assert_eq!(announcement["message"]["authorName"], SYSTEM_AUTHOR);
            assert_eq!(announcement["message"]["text"], "Ann selected Windowlicker");
        }

        let (is_playing, current_time) = state
            .registry
            .with_room(&code, |room| (room.is_playing, room.current_time))
            .unwrap();
        assert!(!is_playing);
        assert_eq!(current_time, 0.0);
    }

    #[test]
    fn music_sync_excludes_the_sender() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, bo_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        join(&state, &bo, &code, "Bo");
        drain(&ann_rx);
        drain(&bo_rx);

        handle_op(
            IncomingMessage::MusicControl {
                is_playing: true,
                current_time: 42.5,
            },
            &state,
            &ann,
        );

        let synced = recv_json(&bo_rx);
        assert_eq!(synced["op"], "music-sync");
        assert_eq!(synced["isPlaying"], true);
        assert_eq!(synced["currentTime"], 42.5);
        assert!(synced["timestamp"].as_u64().unwrap() > 0);

        assert!(ann_rx.try_recv().is_err(), "sender must not get its own echo");
    }

    #[test]
    fn add_song_broadcasts_full_playlist() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        drain(&ann_rx);

        handle_op(
            IncomingMessage::AddSong {
                id: None,
                title: "Windowlicker".to_string(),
                artist: "Aphex Twin".to_string(),
                duration_label: "6:07".to_string(),
                audio_ref: "blob:abc123".to_string(),
            },
            &state,
            &ann,
        );

        let updated = recv_json(&ann_rx);
        assert_eq!(updated["op"], "playlist-updated");
        let playlist = updated["playlist"].as_array().unwrap();
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist[0]["addedBy"], "Ann");
        assert!(!playlist[0]["id"].as_str().unwrap().is_empty());
    }

    #[test]
    fn typing_relays_to_others_only() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, bo_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        join(&state, &bo, &code, "Bo");
        drain(&ann_rx);
        drain(&bo_rx);

        handle_op(
            IncomingMessage::Typing { is_typing: true },
            &state,
            &bo,
        );

        let typing = recv_json(&ann_rx);
        assert_eq!(typing["op"], "user-typing");
        assert_eq!(typing["displayName"], "Bo");
        assert_eq!(typing["isTyping"], true);
        assert!(bo_rx.try_recv().is_err());

        let session = state.sessions.get(&bo).unwrap();
        assert!(session.is_typing.load(std::sync::atomic::Ordering::Relaxed));
    }

    #[test]
    fn join_with_unknown_code_errors_only_the_requester() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);

        join(&state, &ann, &RoomCode::from("NOPE99"), "Ann");

        let err = recv_json(&ann_rx);
        assert_eq!(err["op"], "room-error");
        assert!(err["message"].as_str().unwrap().contains("NOPE99"));
        assert!(state.sessions.is_empty());
        assert!(state.registry.is_empty());
    }

    #[test]
    fn orphan_events_are_silently_dropped() {
        let state = test_state();
        let (ghost, ghost_rx) = connect(&state);

        handle_op(
            IncomingMessage::SendMessage {
                text: "anyone?".to_string(),
            },
            &state,
            &ghost,
        );
        handle_op(
            IncomingMessage::MusicControl {
                is_playing: true,
                current_time: 1.0,
            },
            &state,
            &ghost,
        );

        assert!(ghost_rx.try_recv().is_err());
        assert!(state.registry.is_empty());
    }

    #[test]
    fn members_always_mirror_bound_sessions() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, _bo_rx) = connect(&state);
        let (cy, _cy_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        join(&state, &bo, &code, "Bo");
        join(&state, &cy, &code, "Cy");
        handle_disconnect(&state, &bo);

        let mut member_ids: Vec<String> = state
            .registry
            .with_room(&code, |room| {
                room.members
                    .iter()
                    .map(|m| m.connection_id.0.clone())
                    .collect()
            })
            .unwrap();
        let mut session_ids: Vec<String> = state
            .sessions
            .iter()
            .filter(|e| e.value().room_code == code)
            .map(|e| e.key().0.clone())
            .collect();
        member_ids.sort();
        session_ids.sort();
        assert_eq!(member_ids, session_ids);
        assert_eq!(member_ids.len(), 2);
    }

    #[test]
    fn disconnect_cleans_up_and_deletes_empty_rooms() {
        let state = test_state();
        let (ann, ann_rx) = connect(&state);
        let (bo, bo_rx) = connect(&state);

        handle_op(
            IncomingMessage::CreateRoom {
                display_name: "Ann".to_string(),
            },
            &state,
            &ann,
        );
        let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
        join(&state, &ann, &code, "Ann");
        join(&state, &bo, &code, "Bo");
        drain(&ann_rx);
        drain(&bo_rx);

        handle_disconnect(&state, &bo);

        let to_ann = drain(&ann_rx);
        assert_eq!(to_ann[0]["op"], "user-left");
        assert_eq!(to_ann[0]["connectionId"], bo.0.as_str());
        assert_eq!(to_ann[1]["op"], "users-updated");
        assert_eq!(to_ann[1]["members"].as_array().unwrap().len(), 1);
        assert_eq!(to_ann[2]["op"], "new-message");
        assert_eq!(to_ann[2]["message"]["text"], "Bo left the room");

        // Events from the dead connection are now orphans.
        handle_op(
            IncomingMessage::SendMessage {
                text: "late".to_string(),
            },
            &state,
            &bo,
        );
        assert!(ann_rx.try_recv().is_err());

        handle_disconnect(&state, &ann);
        assert!(state.registry.is_empty());
        assert!(state.sessions.is_empty());
        assert!(state.connections.is_empty());
    }

    #[test]
    fn racing_join_against_last_leave_never_strands_a_session() {
        for _ in 0..200 {
            let state = test_state();
            let (ann, ann_rx) = connect(&state);
            handle_op(
                IncomingMessage::CreateRoom {
                    display_name: "Ann".to_string(),
                },
                &state,
                &ann,
            );
            let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
            join(&state, &ann, &code, "Ann");
            let (bo, _bo_rx) = connect(&state);

            let joiner = {
                let state = Arc::clone(&state);
                let bo = bo.clone();
                let code = code.clone();
                std::thread::spawn(move || join(&state, &bo, &code, "Bo"))
            };
            handle_disconnect(&state, &ann);
            joiner.join().unwrap();

            if state.sessions.contains_key(&bo) {
                // Bo committed, so the room must still exist and list him.
                let names: Vec<String> = state
                    .registry
                    .with_room(&code, |room| {
                        room.members.iter().map(|m| m.display_name.clone()).collect()
                    })
                    .expect("a live session implies a live room");
                assert_eq!(names, vec!["Bo".to_string()]);
            } else {
                assert!(state.registry.is_empty());
            }
        }
    }

    #[test]
    fn late_joiner_misses_no_message() {
        for _ in 0..50 {
            let state = test_state();
            let (ann, ann_rx) = connect(&state);
            handle_op(
                IncomingMessage::CreateRoom {
                    display_name: "Ann".to_string(),
                },
                &state,
                &ann,
            );
            let code = RoomCode::from(recv_json(&ann_rx)["code"].as_str().unwrap());
            join(&state, &ann, &code, "Ann");
            let (bo, bo_rx) = connect(&state);

            let chatter = {
                let state = Arc::clone(&state);
                let ann = ann.clone();
                std::thread::spawn(move || {
                    for i in 0..20 {
                        handle_op(
                            IncomingMessage::SendMessage {
                                text: format!("m{}", i),
                            },
                            &state,
                            &ann,
                        );
                    }
                })
            };
            join(&state, &bo, &code, "Bo");
            chatter.join().unwrap();

            // Every chat message must reach Bo through the snapshot or a
            // broadcast frame. Duplicates across the two are fine; gaps are
            // not. The snapshot frame need not arrive first.
            let mut seen = std::collections::HashSet::new();
            for frame in drain(&bo_rx) {
                match frame["op"].as_str().unwrap() {
                    "room-joined" => {
                        for msg in frame["room"]["messages"].as_array().unwrap() {
                            seen.insert(msg["text"].as_str().unwrap().to_string());
                        }
                    }
                    "new-message" => {
                        seen.insert(frame["message"]["text"].as_str().unwrap().to_string());
                    }
                    _ => {}
                }
            }
            for i in 0..20 {
                assert!(seen.contains(&format!("m{}", i)), "missing m{}", i);
            }
        }
    }

    #[test]
    fn incoming_ops_deserialize_from_wire_names() {
        let op: IncomingMessage =
            serde_json::from_str(r#"{"op":"join-room","code":"AB12CD","displayName":"Ann"}"#)
                .unwrap();
        assert!(matches!(op, IncomingMessage::JoinRoom { .. }));

        let op: IncomingMessage = serde_json::from_str(
            r#"{"op":"music-control","isPlaying":true,"currentTime":12.5}"#,
        )
        .unwrap();
        match op {
            IncomingMessage::MusicControl {
                is_playing,
                current_time,
            } => {
                assert!(is_playing);
                assert_eq!(current_time, 12.5);
            }
            other => panic!("unexpected op: {:?}", other),
        }
    }
}
