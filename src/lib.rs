// Remote Control - Command Pattern with undo history

pub mod command;
pub mod devices;

// Re-export commonly used types for convenience
pub use command::{
    CommandError, CommandResult, RemoteControl, ReversibleCommand, RoomState, TurnOffLightCommand,
    TurnOnLightCommand, VolumeDownCommand, VolumeUpCommand,
};
pub use devices::{Light, Tv};
