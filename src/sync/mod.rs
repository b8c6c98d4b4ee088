//! Multiplayer sync adapter.
//!
//! Rule operations stay pure; this layer sits outside them and moves whole
//! snapshots between peers:
//! - `snapshot`: versioned room state and its bincode encoding
//! - `hub`: in-memory rooms with subscribers
//! - `session`: the single writer that applies moves and persists results

pub mod hub;
pub mod session;
pub mod snapshot;

pub use hub::RoomHub;
pub use session::Session;
pub use snapshot::Snapshot;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::GameState;
use crate::error::SyncError;

/// Identifier of a shared game room.
pub type RoomId = uuid::Uuid;

/// Storage and fan-out for room snapshots.
pub trait SyncChannel {
    /// Most recent snapshot of `room`.
    fn latest(&self, room: RoomId) -> Result<Snapshot, SyncError>;

    /// Store `state` as the room's newest version and notify subscribers.
    ///
    /// Returns the version assigned.
    fn persist(&self, room: RoomId, state: &GameState) -> Result<u64, SyncError>;

    /// Like [`SyncChannel::persist`], but fails with `SyncError::Stale` unless
    /// the room is still at version `based_on`.
    fn persist_from(&self, room: RoomId, based_on: u64, state: &GameState) -> Result<u64, SyncError>;

    /// Stream of every snapshot persisted after this call.
    fn subscribe(&self, room: RoomId) -> Result<UnboundedReceiver<Snapshot>, SyncError>;
}

impl<C: SyncChannel + ?Sized> SyncChannel for &C {
    fn latest(&self, room: RoomId) -> Result<Snapshot, SyncError> {
        (**self).latest(room)
    }

    fn persist(&self, room: RoomId, state: &GameState) -> Result<u64, SyncError> {
        (**self).persist(room, state)
    }

    fn persist_from(&self, room: RoomId, based_on: u64, state: &GameState) -> Result<u64, SyncError> {
        (**self).persist_from(room, based_on, state)
    }

    fn subscribe(&self, room: RoomId) -> Result<UnboundedReceiver<Snapshot>, SyncError> {
        (**self).subscribe(room)
    }
}

impl<C: SyncChannel + ?Sized> SyncChannel for Arc<C> {
    fn latest(&self, room: RoomId) -> Result<Snapshot, SyncError> {
        (**self).latest(room)
    }

    fn persist(&self, room: RoomId, state: &GameState) -> Result<u64, SyncError> {
        (**self).persist(room, state)
    }

    fn persist_from(&self, room: RoomId, based_on: u64, state: &GameState) -> Result<u64, SyncError> {
        (**self).persist_from(room, based_on, state)
    }

    fn subscribe(&self, room: RoomId) -> Result<UnboundedReceiver<Snapshot>, SyncError> {
        (**self).subscribe(room)
    }
}
