// RemoteControl - Applies commands and manages undo/redo stacks

use crate::command::state::RoomState;
use crate::command::trait_def::{CommandError, CommandResult, ReversibleCommand};

/// Applies commands on behalf of a caller and remembers them for undo
///
/// The RemoteControl maintains two stacks:
/// - History: Commands that have been applied and can be undone (most recent at the back)
/// - Redo stack: Commands that have been undone and can be re-applied (most recent at the back)
///
/// When a new command is submitted:
/// 1. Apply the command
/// 2. Push it onto the history
/// 3. Clear the redo stack (since we're on a new timeline)
///
/// Undo and redo on an empty stack do nothing. Use [`try_undo`](Self::try_undo)
/// and [`try_redo`](Self::try_redo) to get an error instead.
pub struct RemoteControl {
    history: Vec<Box<dyn ReversibleCommand>>,
    redo_stack: Vec<Box<dyn ReversibleCommand>>,
}

impl RemoteControl {
    /// Create a remote control with an empty history
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Create a remote control with room for `capacity` commands preallocated
    ///
    /// The history still grows past `capacity`; nothing is ever dropped from it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Vec::with_capacity(capacity),
            redo_stack: Vec::new(),
        }
    }

    /// Apply a command and record it in the history
    pub fn submit(&mut self, mut command: Box<dyn ReversibleCommand>, room: &mut RoomState) {
        command.apply(room);
        log::debug!(
            "Applied '{}' (history: {})",
            command.description(),
            self.history.len() + 1
        );

        self.history.push(command);

        // New timeline
        self.redo_stack.clear();
    }

    /// Reverse the most recently applied command
    ///
    /// Returns the description of the undone command, or `None` if the history is empty.
    pub fn undo(&mut self, room: &mut RoomState) -> Option<String> {
        let Some(mut command) = self.history.pop() else {
            log::trace!("Undo requested with empty history");
            return None;
        };

        command.reverse(room);
        let description = command.description();
        log::debug!("Undid '{}' (history: {})", description, self.history.len());

        self.redo_stack.push(command);
        Some(description)
    }

    /// Re-apply the most recently undone command
    ///
    /// Returns the description of the redone command, or `None` if there is nothing to redo.
    pub fn redo(&mut self, room: &mut RoomState) -> Option<String> {
        let Some(mut command) = self.redo_stack.pop() else {
            log::trace!("Redo requested with empty redo stack");
            return None;
        };

        command.apply(room);
        let description = command.description();
        log::debug!("Redid '{}' (history: {})", description, self.history.len() + 1);

        self.history.push(command);
        Some(description)
    }

    /// Like [`undo`](Self::undo), but an empty history is an error
    ///
    /// # Errors
    /// Returns [`CommandError::NothingToUndo`] if the history is empty.
    pub fn try_undo(&mut self, room: &mut RoomState) -> CommandResult<String> {
        self.undo(room).ok_or(CommandError::NothingToUndo)
    }

    /// Like [`redo`](Self::redo), but an empty redo stack is an error
    ///
    /// # Errors
    /// Returns [`CommandError::NothingToRedo`] if there is nothing to redo.
    pub fn try_redo(&mut self, room: &mut RoomState) -> CommandResult<String> {
        self.redo(room).ok_or(CommandError::NothingToRedo)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.history.last().map(|cmd| cmd.description())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|cmd| cmd.description())
    }

    /// Descriptions of the recorded commands, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(|cmd| cmd.description()).collect()
    }

    /// Number of commands that can be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of commands that can be redone
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all recorded commands without reversing them
    pub fn clear(&mut self) {
        self.history.clear();
        self.redo_stack.clear();
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}
