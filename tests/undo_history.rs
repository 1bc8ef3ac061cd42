// Integration test: Undo history of the remote control
//
// Drives the public API the way a caller wires devices, commands and the
// remote together.

use remote_control::{
    RemoteControl, RoomState, TurnOffLightCommand, TurnOnLightCommand, VolumeDownCommand,
    VolumeUpCommand,
};

#[test]
fn test_light_and_tv_scenario() {
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();
    assert!(!room.light.is_on());

    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);
    assert!(room.light.is_on());
    assert_eq!(remote.history(), vec!["Turn Light On"]);

    remote.submit(Box::new(VolumeUpCommand), &mut room);
    assert_eq!(room.tv.volume(), 11);
    assert_eq!(remote.history(), vec!["Turn Light On", "Volume Up"]);

    assert_eq!(remote.undo(&mut room).as_deref(), Some("Volume Up"));
    assert_eq!(room.tv.volume(), 10);
    assert!(room.light.is_on());
    assert_eq!(remote.history(), vec!["Turn Light On"]);

    assert_eq!(remote.undo(&mut room).as_deref(), Some("Turn Light On"));
    assert!(!room.light.is_on());
    assert!(remote.history().is_empty());
}

#[test]
fn test_full_undo_restores_initial_state() {
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();
    let initial = room.clone();

    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);
    remote.submit(Box::new(VolumeUpCommand), &mut room);
    remote.submit(Box::new(VolumeUpCommand), &mut room);
    remote.submit(Box::new(TurnOffLightCommand::new()), &mut room);
    remote.submit(Box::new(VolumeDownCommand), &mut room);
    assert_eq!(remote.history_len(), 5);
    assert_eq!(room.tv.volume(), 11);
    assert!(!room.light.is_on());

    for _ in 0..5 {
        assert!(remote.undo(&mut room).is_some());
    }

    assert_eq!(room, initial);
    assert_eq!(remote.history_len(), 0);
}

#[test]
fn test_undo_reverses_only_the_last_command() {
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();

    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);
    remote.submit(Box::new(VolumeDownCommand), &mut room);
    remote.undo(&mut room);

    assert!(room.light.is_on());
    assert_eq!(room.tv.volume(), 10);
    assert_eq!(remote.history_len(), 1);
}

#[test]
fn test_second_undo_is_a_no_op() {
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();
    let initial = room.clone();

    remote.submit(Box::new(VolumeUpCommand), &mut room);
    assert!(remote.undo(&mut room).is_some());
    assert_eq!(room, initial);

    assert_eq!(remote.undo(&mut room), None);
    assert_eq!(room, initial);
    assert_eq!(remote.history_len(), 0);
}

#[test]
fn test_undo_on_fresh_remote_leaves_room_unchanged() {
    let mut room = RoomState::new();
    room.light.turn_on();
    room.tv.set_volume(25);
    let before = room.clone();

    let mut remote = RemoteControl::default();
    assert_eq!(remote.undo(&mut room), None);
    assert_eq!(room, before);
}

#[test]
fn test_redundant_light_switches_undo_cleanly() {
    // Turning off a light that is already off, then undoing, keeps it off
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();

    remote.submit(Box::new(TurnOffLightCommand::new()), &mut room);
    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);
    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);

    remote.undo(&mut room);
    assert!(room.light.is_on());
    remote.undo(&mut room);
    assert!(!room.light.is_on());
    remote.undo(&mut room);
    assert!(!room.light.is_on());
}

#[test]
fn test_four_commands_then_two_undos() {
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();

    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);
    remote.submit(Box::new(VolumeUpCommand), &mut room);
    remote.submit(Box::new(VolumeUpCommand), &mut room);
    remote.submit(Box::new(TurnOffLightCommand::new()), &mut room);

    remote.undo(&mut room);
    remote.undo(&mut room);

    assert!(room.light.is_on());
    assert_eq!(room.tv.volume(), 11);
    assert_eq!(remote.history(), vec!["Turn Light On", "Volume Up"]);
    assert_eq!(remote.redo_description().as_deref(), Some("Volume Up"));
}

#[test]
fn test_undo_redo_undo_round_trip() {
    let mut room = RoomState::new();
    let mut remote = RemoteControl::new();

    remote.submit(Box::new(TurnOnLightCommand::new()), &mut room);
    remote.submit(Box::new(VolumeUpCommand), &mut room);

    remote.undo(&mut room);
    remote.undo(&mut room);
    assert_eq!(room, RoomState::new());

    assert_eq!(remote.redo(&mut room).as_deref(), Some("Turn Light On"));
    assert_eq!(remote.redo(&mut room).as_deref(), Some("Volume Up"));
    assert_eq!(remote.redo(&mut room), None);
    assert!(room.light.is_on());
    assert_eq!(room.tv.volume(), 11);
    assert_eq!(remote.history(), vec!["Turn Light On", "Volume Up"]);
}
