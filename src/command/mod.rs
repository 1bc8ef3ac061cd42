// Command Pattern for Undo/Redo functionality
//
// This module implements the Command Pattern for a household remote control.
// Every device change goes through a ReversibleCommand so it can be undone.
//
// Architecture:
// - ReversibleCommand trait: Defines apply(), reverse(), description()
// - RemoteControl: Applies commands and keeps the undo/redo stacks
// - Concrete commands: TurnOnLightCommand, VolumeUpCommand, etc.
//
// The devices live in RoomState, which the caller lends to the remote control
// for each submit/undo/redo.

pub mod commands;
pub mod manager;
pub mod state;
pub mod trait_def;

pub use commands::{TurnOffLightCommand, TurnOnLightCommand, VolumeDownCommand, VolumeUpCommand};
pub use manager::RemoteControl;
pub use state::RoomState;
pub use trait_def::{CommandError, CommandResult, ReversibleCommand};
