// ReversibleCommand trait definition

use crate::command::state::RoomState;
use thiserror::Error;

/// Result type for the strict history operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors reported by [`RemoteControl::try_undo`] and [`RemoteControl::try_redo`]
///
/// The plain `undo()`/`redo()` calls never fail; they treat an empty stack as a no-op.
///
/// [`RemoteControl::try_undo`]: crate::command::RemoteControl::try_undo
/// [`RemoteControl::try_redo`]: crate::command::RemoteControl::try_redo
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Trait for commands that can be applied and reversed
///
/// Commands act on the devices held by [`RoomState`]. They do not track whether
/// they have been applied; the [`RemoteControl`] history does that.
///
/// # Thread Safety
/// Commands must be Send so a remote control can be moved between threads.
///
/// # Example
/// ```
/// use remote_control::command::state::RoomState;
/// use remote_control::command::trait_def::ReversibleCommand;
///
/// struct MuteCommand {
///     old_volume: i32,
/// }
///
/// impl ReversibleCommand for MuteCommand {
///     fn apply(&mut self, room: &mut RoomState) {
///         self.old_volume = room.tv.volume();
///         room.tv.set_volume(0);
///     }
///
///     fn reverse(&mut self, room: &mut RoomState) {
///         room.tv.set_volume(self.old_volume);
///     }
///
///     fn description(&self) -> String {
///         "Mute TV".to_string()
///     }
/// }
/// ```
///
/// [`RemoteControl`]: crate::command::RemoteControl
pub trait ReversibleCommand: Send {
    /// Perform the forward effect on the command's target
    fn apply(&mut self, room: &mut RoomState);

    /// Undo exactly the effect of the most recent `apply()`
    fn reverse(&mut self, room: &mut RoomState);

    /// Get a human-readable description of the command
    ///
    /// Used for logging and display (e.g., "Undo: Turn Light On")
    fn description(&self) -> String;
}
