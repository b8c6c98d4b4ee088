//! In-memory room hub.
//!
//! Each room stores its latest snapshot plus the subscribers that receive
//! every new version. Writes are last-write-wins unless the caller asks for
//! a version check with [`RoomHub::update_from`].

use std::hash::BuildHasherDefault;

use dashmap::DashMap;
use rustc_hash::FxHasher;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};
use uuid::Uuid;

use super::{RoomId, Snapshot, SyncChannel};
use crate::core::GameState;
use crate::error::SyncError;

struct Room {
    latest: Snapshot,
    subscribers: Vec<UnboundedSender<Snapshot>>,
}

impl Room {
    fn publish(&mut self, state: GameState) -> u64 {
        self.latest.version += 1;
        self.latest.state = state;
        let snapshot = &self.latest;
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!(room = %snapshot.room, dropped, "dropped closed subscribers");
        }
        self.latest.version
    }
}

/// Shared registry of game rooms.
///
/// Rooms live in a sharded concurrent map, so writers to different rooms
/// never contend.
#[derive(Default)]
pub struct RoomHub {
    rooms: DashMap<RoomId, Room, BuildHasherDefault<FxHasher>>,
}

impl RoomHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new room holding `state` at version 0.
    pub fn create(&self, state: GameState) -> RoomId {
        let room = Uuid::new_v4();
        let latest = Snapshot::new(room, 0, state);
        self.rooms.insert(room, Room { latest, subscribers: Vec::new() });
        info!(%room, "room created");
        room
    }

    /// Current snapshot of a room.
    pub fn join(&self, room: RoomId) -> Result<Snapshot, SyncError> {
        self.rooms
            .get(&room)
            .map(|r| r.latest.clone())
            .ok_or(SyncError::UnknownRoom(room))
    }

    /// Receive every snapshot written to `room` from now on.
    pub fn subscribe(&self, room: RoomId) -> Result<UnboundedReceiver<Snapshot>, SyncError> {
        let mut entry = self.rooms.get_mut(&room).ok_or(SyncError::UnknownRoom(room))?;
        let (tx, rx) = mpsc::unbounded_channel();
        entry.subscribers.push(tx);
        Ok(rx)
    }

    /// Replace the room's state unconditionally and notify subscribers.
    ///
    /// Returns the new version.
    pub fn update(&self, room: RoomId, state: GameState) -> Result<u64, SyncError> {
        let mut entry = self.rooms.get_mut(&room).ok_or(SyncError::UnknownRoom(room))?;
        let version = entry.publish(state);
        debug!(%room, version, "room updated");
        Ok(version)
    }

    /// Like [`RoomHub::update`], but only if the room is still at `based_on`.
    pub fn update_from(
        &self,
        room: RoomId,
        based_on: u64,
        state: GameState,
    ) -> Result<u64, SyncError> {
        let mut entry = self.rooms.get_mut(&room).ok_or(SyncError::UnknownRoom(room))?;
        let current = entry.latest.version;
        if current != based_on {
            return Err(SyncError::Stale { current, based_on });
        }
        let version = entry.publish(state);
        debug!(%room, version, "room updated");
        Ok(version)
    }

    /// Drop a room and hang up on its subscribers.
    pub fn close(&self, room: RoomId) -> Option<Snapshot> {
        let removed = self.rooms.remove(&room).map(|(_, r)| r.latest);
        if removed.is_some() {
            info!(%room, "room closed");
        }
        removed
    }

    /// Number of open rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl SyncChannel for RoomHub {
    fn latest(&self, room: RoomId) -> Result<Snapshot, SyncError> {
        self.join(room)
    }

    fn persist(&self, room: RoomId, state: &GameState) -> Result<u64, SyncError> {
        self.update(room, state.clone())
    }

    fn persist_from(&self, room: RoomId, based_on: u64, state: &GameState) -> Result<u64, SyncError> {
        self.update_from(room, based_on, state.clone())
    }

    fn subscribe(&self, room: RoomId) -> Result<UnboundedReceiver<Snapshot>, SyncError> {
        RoomHub::subscribe(self, room)
    }
}
