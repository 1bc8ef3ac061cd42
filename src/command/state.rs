// RoomState - The devices a remote control can act on
//
// Commands receive this struct mutably when they are applied or reversed,
// so they never hold references to the devices themselves.

use crate::devices::{Light, Tv};

/// State of the room that commands modify
///
/// The caller owns it and lends it to the [`RemoteControl`] for each operation.
///
/// [`RemoteControl`]: crate::command::RemoteControl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomState {
    /// Living room light
    pub light: Light,

    /// Living room TV
    pub tv: Tv,
}

impl RoomState {
    /// Create a room with the light off and the TV at its default volume
    pub fn new() -> Self {
        Self::default()
    }
}
