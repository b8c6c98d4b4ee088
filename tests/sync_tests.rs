//! Room hub and session behavior across multiple peers.

use std::sync::Arc;
use std::thread;

use jakaro::core::{Color, GameConfig, GameState};
use jakaro::rules::{initialize_game, legal_moves};
use jakaro::sync::{RoomHub, Session, Snapshot, SyncChannel};
use jakaro::{GameRng, GreedyPolicy, Location, MoveError, SyncError};

fn new_game(seed: u64) -> GameState {
    initialize_game(&["Ana", "Omar"], 2, GameConfig::new(seed)).unwrap()
}

#[test]
fn test_subscribers_see_every_version_in_order() {
    let hub = RoomHub::new();
    let room = hub.create(new_game(1));
    let mut rx = hub.subscribe(room).unwrap();
    let mut session = Session::open(&hub, room).unwrap();

    for _ in 0..6 {
        let state = session.state().clone();
        if state.active_player().is_bot {
            session.run_bots(&GreedyPolicy).unwrap();
        } else {
            match legal_moves(&state).first() {
                Some(mv) => session.play(mv).unwrap(),
                None => session.burn().unwrap(),
            };
        }
    }

    let versions: Vec<u64> = std::iter::from_fn(|| rx.try_recv().ok()).map(|s| s.version).collect();
    assert_eq!(versions, (1..=session.version()).collect::<Vec<_>>());
}

#[test]
fn test_snapshot_from_hub_replays_on_peer() {
    let hub = RoomHub::new();
    let room = hub.create(new_game(2));
    let mut host = Session::open(&hub, room).unwrap();
    let mv = legal_moves(host.state()).first().copied();
    match mv {
        Some(mv) => host.play(&mv).unwrap(),
        None => host.burn().unwrap(),
    };

    // Ship the snapshot as bytes to a second hub, as a remote peer would.
    let bytes = hub.join(room).unwrap().to_bytes().unwrap();
    let snapshot = Snapshot::from_bytes(&bytes).unwrap();
    assert_eq!(snapshot.version, 1);

    let peer_hub = RoomHub::new();
    let peer_room = peer_hub.create(snapshot.state.clone());
    let mut peer = Session::open(&peer_hub, peer_room).unwrap();

    let mut rng_a = GameRng::new(3);
    let mut rng_b = GameRng::new(3);
    for _ in 0..12 {
        let a = jakaro::take_turn(host.state(), &GreedyPolicy, &mut rng_a).unwrap();
        let b = jakaro::take_turn(peer.state(), &GreedyPolicy, &mut rng_b).unwrap();
        assert_eq!(a, b);
        hub.update(room, a).unwrap();
        peer_hub.update(peer_room, b).unwrap();
        host.refresh().unwrap();
        peer.refresh().unwrap();
    }
    assert_eq!(host.state(), peer.state());
}

#[test]
fn test_json_snapshot_round_trip() {
    let hub = RoomHub::new();
    let room = hub.create(new_game(4));
    let snapshot = hub.join(room).unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_flat_positions_for_clients() {
    let state = new_game(5);
    for (color, player) in state.players.iter() {
        for marble in &player.marbles {
            let raw = marble.location.to_raw(color);
            assert_eq!(raw, -1);
            assert_eq!(Location::from_raw(color, raw), Some(Location::Base));
        }
    }
    assert_eq!(Location::Safe(2).to_raw(Color::Yellow), 302);
    assert_eq!(Location::from_raw(Color::Green, 203), Some(Location::Safe(3)));
    assert_eq!(Location::from_raw(Color::Green, 303), None);
}

#[test]
fn test_rejected_move_is_not_broadcast() {
    let hub = RoomHub::new();
    let room = hub.create(new_game(6));
    let mut rx = hub.subscribe(room).unwrap();
    let mut session = Session::open(&hub, room).unwrap();

    // Play a real move out of turn order by pretending green is up.
    let mut wrong = session.state().clone();
    wrong.current_turn = Color::Green;
    let foreign = legal_moves(&wrong).into_iter().find(|m| m.marble.color == Color::Green);

    if let Some(mv) = foreign {
        let err = session.play(&mv).unwrap_err();
        assert!(matches!(
            err,
            SyncError::Move(MoveError::CardNotInHand { .. } | MoveError::NotYourTurn { .. })
        ));
    }
    assert!(rx.try_recv().is_err());
    assert_eq!(hub.join(room).unwrap().version, 0);
}

#[test]
fn test_hub_shared_across_threads() {
    let hub = Arc::new(RoomHub::new());
    let rooms: Vec<_> = (0..4).map(|seed| hub.create(new_game(seed))).collect();

    let handles: Vec<_> = rooms
        .iter()
        .map(|&room| {
            let hub = Arc::clone(&hub);
            thread::spawn(move || {
                let mut session = Session::open(Arc::clone(&hub), room).unwrap();
                let state = session.state().clone();
                match legal_moves(&state).first() {
                    Some(mv) => session.play(mv).unwrap(),
                    None => session.burn().unwrap(),
                }
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
    for room in rooms {
        assert_eq!(hub.latest(room).unwrap().version, 1);
    }
}
