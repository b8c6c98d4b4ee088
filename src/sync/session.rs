//! The authoritative writer for one room.
//!
//! A `Session` is the only place that turns player input into new states for
//! its room. Accepted transitions are persisted through the channel; rejected
//! ones are logged and leave both the session and the room untouched.
//!
//! Writes are version-checked: if another writer got to the room first the
//! session gets `SyncError::Stale` and must [`Session::refresh`] before
//! acting again.

use tracing::{debug, warn};

use super::{RoomId, SyncChannel};
use crate::bot::{take_turn, MovePolicy};
use crate::core::{GameRng, GameState, Move};
use crate::error::{MoveError, SyncError};
use crate::rules::{apply_move, burn_card};

pub struct Session<C> {
    channel: C,
    room: RoomId,
    version: u64,
    state: GameState,
    /// Bot choices draw from here, never from the deck stream in `state`.
    bots: GameRng,
}

impl<C: SyncChannel> Session<C> {
    /// Attach to an existing room, starting from its latest snapshot.
    pub fn open(channel: C, room: RoomId) -> Result<Self, SyncError> {
        let snapshot = channel.latest(room)?;
        let bots = snapshot.state.rng.clone().fork();
        Ok(Self {
            channel,
            room,
            version: snapshot.version,
            state: snapshot.state,
            bots,
        })
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Version of the last state this session read or wrote.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Reload the room's latest snapshot, discarding the local copy.
    pub fn refresh(&mut self) -> Result<u64, SyncError> {
        let snapshot = self.channel.latest(self.room)?;
        self.version = snapshot.version;
        self.state = snapshot.state;
        Ok(self.version)
    }

    /// Apply a move for the active player and persist the result.
    pub fn play(&mut self, mv: &Move) -> Result<u64, SyncError> {
        let next = apply_move(&self.state, mv);
        self.commit(next)
    }

    /// Burn (or pass) for the active player and persist the result.
    pub fn burn(&mut self) -> Result<u64, SyncError> {
        let next = burn_card(&self.state);
        self.commit(next)
    }

    /// Play bot turns until a human is up or the game ends.
    ///
    /// Returns the number of turns taken.
    pub fn run_bots<P: MovePolicy + ?Sized>(&mut self, policy: &P) -> Result<usize, SyncError> {
        let mut turns = 0;
        while !self.state.is_over() && self.state.active_player().is_bot {
            let next = take_turn(&self.state, policy, &mut self.bots);
            self.commit(next)?;
            turns += 1;
        }
        Ok(turns)
    }

    fn commit(&mut self, next: Result<GameState, MoveError>) -> Result<u64, SyncError> {
        let next = match next {
            Ok(next) => next,
            Err(err) => {
                warn!(room = %self.room, color = %self.state.current_turn, %err, "rejected");
                return Err(err.into());
            }
        };
        let version = match self.channel.persist_from(self.room, self.version, &next) {
            Ok(version) => version,
            Err(err) => {
                warn!(room = %self.room, based_on = self.version, %err, "write refused");
                return Err(err);
            }
        };
        debug!(room = %self.room, version, turn = %next.current_turn, "persisted");
        self.state = next;
        self.version = version;
        Ok(version)
    }
}
