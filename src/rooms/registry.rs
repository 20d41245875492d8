//! Registry of live rooms. Owns the room map outright; everything else goes
//! through these operations, and each room sits behind its own lock so a
//! handler's mutation plus broadcast-list computation is atomic per room.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::common::errors::RoomError;
use crate::common::types::RoomCode;
use crate::rooms::code;
use crate::rooms::state::RoomState;

type SharedRoom = Arc<Mutex<RoomState>>;

#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomCode, SharedRoom>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Creates an empty room under a collision-checked code.
    pub fn create(&self) -> Result<RoomCode, RoomError> {
        let code = code::generate_unique(|c| self.rooms.contains_key(c))?;
        self.rooms.insert(
            code.clone(),
            Arc::new(Mutex::new(RoomState::new(code.clone()))),
        );
        Ok(code)
    }

    /// Runs `f` with the room locked while the map entry is still held, so
    /// a concurrent `remove_if_empty` cannot delete the room between lookup
    /// and mutation. Lock order is always map entry, then room.
    pub fn with_room<T>(
        &self,
        code: &RoomCode,
        f: impl FnOnce(&mut RoomState) -> T,
    ) -> Result<T, RoomError> {
        let entry = self
            .rooms
            .get(code)
            .ok_or_else(|| RoomError::RoomNotFound(code.clone()))?;
        let mut room = entry.value().lock();
        Ok(f(&mut room))
    }

    /// Drops the room if its last member has left. The emptiness check runs
    /// under the map's shard lock plus the room lock, so a join committed
    /// through `with_room` either lands before the check (and spares the
    /// room) or fails with `RoomNotFound` after it.
    pub fn remove_if_empty(&self, code: &RoomCode) -> bool {
        self.rooms
            .remove_if(code, |_, room| room.lock().is_empty())
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
