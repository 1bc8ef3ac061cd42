// Concrete command implementations

use crate::command::state::RoomState;
use crate::command::trait_def::ReversibleCommand;

/// Command to switch the light on
///
/// Remembers whether the light was already on so that reversing it restores
/// exactly that. Reversing a command that was never applied switches the light off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOnLightCommand {
    was_on: Option<bool>,
}

impl TurnOnLightCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReversibleCommand for TurnOnLightCommand {
    fn apply(&mut self, room: &mut RoomState) {
        self.was_on = Some(room.light.is_on());
        room.light.turn_on();
    }

    fn reverse(&mut self, room: &mut RoomState) {
        restore_light(room, self.was_on.unwrap_or(false));
    }

    fn description(&self) -> String {
        "Turn Light On".to_string()
    }
}

/// Command to switch the light off
///
/// Reversing it restores the light to whatever it was before `apply()`,
/// or switches it on if the command was never applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOffLightCommand {
    was_on: Option<bool>,
}

impl TurnOffLightCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReversibleCommand for TurnOffLightCommand {
    fn apply(&mut self, room: &mut RoomState) {
        self.was_on = Some(room.light.is_on());
        room.light.turn_off();
    }

    fn reverse(&mut self, room: &mut RoomState) {
        restore_light(room, self.was_on.unwrap_or(true));
    }

    fn description(&self) -> String {
        "Turn Light Off".to_string()
    }
}

fn restore_light(room: &mut RoomState, on: bool) {
    if on {
        room.light.turn_on();
    } else {
        room.light.turn_off();
    }
}

/// Command to raise the TV volume by one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeUpCommand;

impl ReversibleCommand for VolumeUpCommand {
    fn apply(&mut self, room: &mut RoomState) {
        room.tv.volume_up();
    }

    fn reverse(&mut self, room: &mut RoomState) {
        room.tv.volume_down();
    }

    fn description(&self) -> String {
        "Volume Up".to_string()
    }
}

/// Command to lower the TV volume by one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeDownCommand;

impl ReversibleCommand for VolumeDownCommand {
    fn apply(&mut self, room: &mut RoomState) {
        room.tv.volume_down();
    }

    fn reverse(&mut self, room: &mut RoomState) {
        room.tv.volume_up();
    }

    fn description(&self) -> String {
        "Volume Down".to_string()
    }
}
