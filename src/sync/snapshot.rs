//! Versioned, self-describing room snapshots.

use serde::{Deserialize, Serialize};

use super::RoomId;
use crate::core::GameState;
use crate::error::SyncError;

/// Full state of a room at one version.
///
/// The embedded state carries its config and RNG position, so a peer that
/// decodes a snapshot continues the exact same game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub room: RoomId,
    /// Bumped by one on every accepted write; 0 for a fresh room.
    pub version: u64,
    pub state: GameState,
}

impl Snapshot {
    #[must_use]
    pub fn new(room: RoomId, version: u64, state: GameState) -> Self {
        Self { room, version, state }
    }

    /// Encode as a single bincode blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SyncError> {
        bincode::serialize(self).map_err(SyncError::Encode)
    }

    /// Decode a blob written by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        bincode::deserialize(bytes).map_err(SyncError::Decode)
    }
}
